use crate::app::{App, LoadState};
use crate::ui::widgets::popup::centered_rect;
use crate::ui::widgets::radar::render_radar_chart;
use crate::ui::widgets::selector::render_selector_popup;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Areas of the main screen.
pub struct MainLayout {
    pub title: Rect,
    pub chart: Rect,
    pub status: Rect,
    pub shortcuts: Rect,
}

pub fn build_main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title area
            Constraint::Min(5),    // Chart area
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(area.inner(Margin::new(2, 1)));

    MainLayout {
        title: chunks[0],
        chart: chunks[1],
        status: chunks[2],
        shortcuts: chunks[3],
    }
}

/// Inner drawing area of the chart block, which is what the chart scales to.
pub fn chart_area(frame_area: Rect) -> Rect {
    chart_block().inner(build_main_layout(frame_area).chart)
}

fn chart_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

pub fn render_main(app: &App, f: &mut Frame<'_>) {
    let layout = build_main_layout(f.area());

    render_title_section(app, f, layout.title);
    render_chart_section(app, f, layout.chart);
    render_status_section(app, f, layout.status);
    render_shortcuts(app, f, layout.shortcuts);

    if app.selector.open {
        render_selector_popup(&app.selector, app.current_identifier(), f, f.area());
    } else if app.show_help {
        render_help_popup(f, f.area());
    }
}

fn render_title_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let name = app
        .chart
        .as_ref()
        .map_or_else(String::new, |chart| chart.elements().entity_name.clone());

    let block = Block::default()
        .title("== Player Radar ==")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(TextLine::from(Span::styled(
        name,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .block(block)
    .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

fn render_chart_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = chart_block();
    let inner = block.inner(area);
    f.render_widget(block, area);

    match (&app.load_state, app.chart.as_ref()) {
        (LoadState::Ready, Some(chart)) => render_radar_chart(chart.elements(), f, inner),
        (LoadState::Failed(message), _) => {
            let text = Text::from(vec![
                TextLine::from(Span::styled(
                    "Could not load player data",
                    Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                )),
                TextLine::from(""),
                TextLine::from(Span::styled(message.clone(), Style::default().fg(Color::White))),
                TextLine::from(""),
                TextLine::from(Span::styled("Press q to quit", Style::default().fg(Color::Gray))),
            ]);
            let paragraph = Paragraph::new(text)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(paragraph, centered_rect(80, 50, inner));
        }
        _ => {
            let paragraph = Paragraph::new(Text::from(TextLine::from(format!(
                "Loading {}...",
                app.config.data_source
            ))))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
            f.render_widget(paragraph, centered_rect(80, 20, inner));
        }
    }
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let color = if app.status_message.starts_with("Error") {
        Color::Red
    } else {
        Color::White
    };

    let mut spans = vec![Span::styled(
        app.status_message.clone(),
        Style::default().fg(color),
    )];
    if let Some(chart) = app.chart.as_ref() {
        let record = chart.selection();
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("overall {:.0}", record.overall),
            Style::default().fg(Color::Gray),
        ));
    }

    let paragraph = Paragraph::new(TextLine::from(spans)).block(status_block);
    f.render_widget(paragraph, area);
}

fn render_shortcuts(app: &App, f: &mut Frame<'_>, area: Rect) {
    let hint = if app.load_state == LoadState::Ready {
        "←/→: Previous/Next  Enter or /: Select player  ?: Help  q: Quit"
    } else {
        "q: Quit"
    };
    let paragraph = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(paragraph, area);
}

fn render_help_popup(f: &mut Frame<'_>, area: Rect) {
    let popup = centered_rect(50, 50, area);
    f.render_widget(Clear, popup);

    let rows = [
        ("← / h", "Previous player"),
        ("→ / l", "Next player"),
        ("Enter / /", "Open the player selector"),
        ("type", "Filter the selector"),
        ("↑ / ↓", "Move in the selector"),
        ("Esc", "Close popup"),
        ("? / F1", "Toggle this help"),
        ("q", "Quit"),
    ];

    let lines = rows
        .iter()
        .map(|(key, action)| {
            TextLine::from(vec![
                Span::styled(
                    format!("{key:>10}  "),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*action, Style::default().fg(Color::White)),
            ])
        })
        .collect::<Vec<_>>();

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    f.render_widget(Paragraph::new(Text::from(lines)).block(block), popup);
}
