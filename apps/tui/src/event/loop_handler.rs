use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use player_radar::chart::svg::{render_document, Palette};
use player_radar::chart::{LayoutStyle, VisualElements};
use player_radar::config::ChartConfig;
use player_radar::{ChartState, DatasetStore, Viewport, ViewportProvider};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::fmt::Write as _;
use std::io::Stdout;
use std::time::Duration;

use crate::app::{handle_input, App};
use crate::cli::CliArgs;
use crate::ui;
use crate::ui::screens::main::chart_area;
use crate::ui::widgets::radar::TerminalViewport;

/// Poll timeout while a transition is running, roughly one frame.
const ANIMATION_POLL_TIMEOUT: u64 = 16;
/// Poll timeout while idle.
const EVENT_POLL_TIMEOUT: u64 = 50;

fn chart_viewport(width: u16, height: u16) -> Viewport {
    TerminalViewport(chart_area(Rect::new(0, 0, width, height))).viewport()
}

/// Run the application in headless mode (no UI)
pub async fn run_headless(config: ChartConfig, args: &CliArgs) -> Result<()> {
    let store = DatasetStore::load(&config.data_source, config.min_overall).await?;
    let output = render_headless(&store, &config, args).await?;
    println!("{output}");
    Ok(())
}

/// Builds the chart at the requested pixel size, settles any `--select`
/// transition, writes the optional SVG and returns what goes to stdout.
async fn render_headless(store: &DatasetStore, config: &ChartConfig, args: &CliArgs) -> Result<String> {
    let viewport = Viewport::new(args.width, args.height);
    let mut chart = ChartState::initialize(store, config, &viewport, LayoutStyle::pixels())?;

    if let Some(identifier) = args.select.as_deref() {
        chart.select(store, identifier, 0.0)?;
        chart.tick(config.transition_seconds);
    }

    if let Some(path) = args.svg.as_ref() {
        let document = render_document(chart.elements(), viewport, &Palette::default());
        tokio::fs::write(path, document).await?;
        log::info!("wrote {}", path.display());
    }

    if args.json {
        render_headless_json(&chart, viewport)
    } else {
        Ok(render_headless_summary(&chart, store, viewport))
    }
}

fn render_headless_summary(chart: &ChartState, store: &DatasetStore, viewport: Viewport) -> String {
    let record = chart.selection();
    let elements = chart.elements();

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "\nPlayer Radar");
    let _ = writeln!(out, "============");
    let _ = writeln!(out, "Players loaded: {}", store.len());
    let _ = writeln!(out, "Showing: {} ({})", record.identifier, record.display_name);
    let _ = writeln!(out, "Overall: {:.0}", record.overall);
    let _ = writeln!(
        out,
        "Viewport: {:.0}x{:.0}, max radius {:.1}",
        viewport.width,
        viewport.height,
        chart.scales().max_radius()
    );

    let _ = writeln!(out, "\nAttributes:");
    for (label, marker) in elements.labels.iter().zip(&elements.markers) {
        let _ = writeln!(
            out,
            "- {:<10} {:>5.1}  ({:.1}, {:.1})",
            label.text,
            record.value(marker.attribute),
            marker.position.x,
            marker.position.y
        );
    }
    out
}

fn render_headless_json(chart: &ChartState, viewport: Viewport) -> Result<String> {
    let record = chart.selection();
    let output = HeadlessChart {
        identifier: &record.identifier,
        display_name: &record.display_name,
        viewport,
        max_radius: chart.scales().max_radius(),
        elements: chart.elements(),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

#[derive(serde::Serialize)]
struct HeadlessChart<'a> {
    identifier: &'a str,
    display_name: &'a str,
    viewport: Viewport,
    max_radius: f64,
    elements: &'a VisualElements,
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let size = terminal.size()?;
    app.on_resize(chart_viewport(size.width, size.height));

    loop {
        app.poll_load();

        // Update animations
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        let timeout = if app.is_animating() {
            ANIMATION_POLL_TIMEOUT
        } else {
            EVENT_POLL_TIMEOUT
        };

        if matches!(event::poll(Duration::from_millis(timeout)), Ok(true)) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key.code);
                }
                Ok(Event::Resize(width, height)) => {
                    app.on_resize(chart_viewport(width, height));
                }
                Ok(_) => {}
                Err(e) => log::warn!("failed to read terminal event: {e}"),
            }
        }

        if !app.running {
            break;
        }

        // Give the loader task a chance to run.
        tokio::task::yield_now().await;
    }
    Ok(())
}
