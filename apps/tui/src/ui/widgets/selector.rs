use crate::app::selector::SelectorState;
use crate::ui::widgets::popup::centered_rect;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

pub fn render_selector_popup(
    selector: &SelectorState,
    current: Option<&str>,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let popup = centered_rect(40, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Select player ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let query = Paragraph::new(TextLine::from(vec![
        Span::styled("Filter: ", Style::default().fg(Color::Gray)),
        Span::styled(selector.query.clone(), Style::default().fg(Color::White)),
        Span::styled("_", Style::default().fg(Color::Cyan)),
    ]));
    f.render_widget(query, layout[0]);

    let options = selector.filtered();
    if options.is_empty() {
        let paragraph = Paragraph::new("No matching players")
            .alignment(ratatui::layout::Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, layout[2]);
        return;
    }

    let items = options
        .iter()
        .map(|option| {
            let style = if Some(*option) == current {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(TextLine::from(Span::styled((*option).to_string(), style)))
        })
        .collect::<Vec<_>>();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0, 0, 238))
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(selector.highlighted));
    f.render_stateful_widget(list, layout[2], &mut state);
}
