use player_radar::chart::VisualElements;
use player_radar::{Viewport, ViewportProvider};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine, Points};
use ratatui::Frame;

pub const POINT_COLOR: Color = Color::Rgb(0x52, 0x32, 0xB9);
const PATH_COLOR: Color = Color::Rgb(0x8f, 0x7a, 0xe6);
const GUIDE_COLOR: Color = Color::DarkGray;
const LABEL_COLOR: Color = Color::Gray;

/// Line segments per curve segment when rasterizing the value path.
const CURVE_STEPS: usize = 12;

/// Marker radius in canvas units (columns).
const MARKER_RADIUS: f64 = 0.9;

/// The chart area of the terminal, measured in canvas units: one unit per
/// column horizontally and two per row vertically, so that circles stay round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalViewport(pub Rect);

impl ViewportProvider for TerminalViewport {
    fn viewport(&self) -> Viewport {
        Viewport::new(f64::from(self.0.width), f64::from(self.0.height) * 2.0)
    }
}

/// Draws the chart centered in `area`. Element y grows downwards, canvas y
/// grows upwards, hence the flips.
pub fn render_radar_chart(elements: &VisualElements, f: &mut Frame<'_>, area: Rect) {
    if area.width < 4 || area.height < 2 {
        return;
    }

    let viewport = TerminalViewport(area).viewport();
    let half_width = viewport.width / 2.0;
    let half_height = viewport.height / 2.0;
    let path = elements.value_path.flatten(CURVE_STEPS);

    f.render_widget(
        Canvas::default()
            .marker(Marker::Braille)
            .paint(|ctx| {
                for circle in &elements.axis_circles {
                    if circle.radius > 0.0 {
                        ctx.draw(&Circle {
                            x: 0.0,
                            y: 0.0,
                            radius: circle.radius,
                            color: GUIDE_COLOR,
                        });
                    }
                }

                for spoke in &elements.spokes {
                    ctx.draw(&CanvasLine {
                        x1: 0.0,
                        y1: 0.0,
                        x2: spoke.end.x,
                        y2: -spoke.end.y,
                        color: GUIDE_COLOR,
                    });
                }

                ctx.layer();

                for pair in path.windows(2) {
                    ctx.draw(&CanvasLine {
                        x1: pair[0].x,
                        y1: -pair[0].y,
                        x2: pair[1].x,
                        y2: -pair[1].y,
                        color: PATH_COLOR,
                    });
                }

                let centers = elements
                    .markers
                    .iter()
                    .map(|marker| (marker.position.x, -marker.position.y))
                    .collect::<Vec<_>>();
                for &(x, y) in &centers {
                    ctx.draw(&Circle {
                        x,
                        y,
                        radius: MARKER_RADIUS,
                        color: POINT_COLOR,
                    });
                }
                ctx.draw(&Points {
                    coords: &centers,
                    color: Color::White,
                });

                for label in &elements.labels {
                    let width = label.text.chars().count() as f64;
                    ctx.print(
                        label.anchor.x - width / 2.0,
                        -label.anchor.y,
                        Span::styled(
                            label.text,
                            Style::default()
                                .fg(LABEL_COLOR)
                                .add_modifier(Modifier::ITALIC),
                        ),
                    );
                }
            })
            .x_bounds([-half_width, half_width])
            .y_bounds([-half_height, half_height]),
        area,
    );
}
