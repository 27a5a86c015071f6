use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::selector::SelectorState;
use player_radar::chart::LayoutStyle;
use player_radar::config::ChartConfig;
use player_radar::{ChartError, ChartState, DatasetStore, LoadError, Viewport};
use std::time::Instant;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

pub type LoadResult = Result<DatasetStore, LoadError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Failed(String),
    Ready,
}

pub struct App {
    pub running: bool,
    pub config: ChartConfig,
    pub load_state: LoadState,
    pub store: Option<DatasetStore>,
    pub chart: Option<ChartState>,
    pub selector: SelectorState,
    pub status_message: String,
    pub show_help: bool,
    pending_load: Option<oneshot::Receiver<LoadResult>>,
    viewport: Option<Viewport>,
    started: Instant,
}

impl App {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            running: true,
            config,
            load_state: LoadState::Loading,
            store: None,
            chart: None,
            selector: SelectorState::default(),
            status_message: String::new(),
            show_help: false,
            pending_load: None,
            viewport: None,
            started: Instant::now(),
        }
    }

    /// Seconds since start-up; the clock for all transitions.
    pub fn now(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    /// Starts loading the dataset in the background.
    pub fn start_loading(&mut self) {
        let (sender, receiver) = oneshot::channel();
        let source = self.config.data_source.clone();
        let min_overall = self.config.min_overall;

        tokio::spawn(async move {
            let result = DatasetStore::load(&source, min_overall).await;
            let _ = sender.send(result);
        });

        self.load_state = LoadState::Loading;
        self.status_message = format!("Loading {}...", self.config.data_source);
        self.pending_load = Some(receiver);
    }

    /// Picks up the load result once it is available.
    pub fn poll_load(&mut self) {
        let Some(receiver) = self.pending_load.as_mut() else {
            return;
        };

        match receiver.try_recv() {
            Ok(result) => {
                self.pending_load = None;
                self.on_loaded(result);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Closed) => {
                self.pending_load = None;
                self.fail("dataset loader stopped without a result".to_string());
            }
        }
    }

    pub fn on_loaded(&mut self, result: LoadResult) {
        let store = match result {
            Ok(store) => store,
            Err(e) => {
                self.fail(e.to_string());
                return;
            }
        };

        let viewport = self.viewport.unwrap_or(Viewport::new(0.0, 0.0));
        match ChartState::initialize(&store, &self.config, &viewport, LayoutStyle::terminal()) {
            Ok(chart) => {
                self.selector.set_options(store.identifiers());
                self.status_message = format!("{} players loaded", store.identifiers().len());
                self.chart = Some(chart);
                self.store = Some(store);
                self.load_state = LoadState::Ready;
            }
            Err(e) => self.fail(e.to_string()),
        }
    }

    fn fail(&mut self, message: String) {
        log::error!("chart failed to initialize: {message}");
        self.status_message = format!("Error: {message}");
        self.load_state = LoadState::Failed(message);
    }

    /// Records the chart surface size. Before the chart exists the size is
    /// only remembered for initialization.
    pub fn on_resize(&mut self, viewport: Viewport) {
        if self.viewport == Some(viewport) {
            return;
        }
        self.viewport = Some(viewport);

        let now = self.now();
        if let Some(chart) = self.chart.as_mut() {
            chart.resize(&viewport, now);
        }
    }

    pub fn select(&mut self, identifier: &str) {
        let now = self.now();
        let result = match (self.chart.as_mut(), self.store.as_ref()) {
            (Some(chart), Some(store)) => chart.select(store, identifier, now),
            _ => Err(ChartError::NotInitialized),
        };

        match result {
            Ok(()) => self.status_message = format!("Showing {identifier}"),
            Err(e) => {
                log::warn!("selection ignored: {e}");
                self.status_message = format!("Error: {e}");
            }
        }
    }

    /// Steps through the identifiers in selector order, wrapping at the ends.
    pub fn select_relative(&mut self, forward: bool) {
        let Some(store) = self.store.as_ref() else {
            return;
        };
        let len = store.identifiers().len();
        let current = self
            .current_identifier()
            .and_then(|identifier| store.position_of(identifier))
            .unwrap_or(0);
        let next = if forward {
            wrap_increment(current, len)
        } else {
            wrap_decrement(current, len)
        };

        let identifier = store.identifiers().get(next).cloned();
        if let Some(identifier) = identifier {
            self.select(&identifier);
        }
    }

    pub fn current_identifier(&self) -> Option<&str> {
        self.chart
            .as_ref()
            .map(|chart| chart.selection().identifier.as_str())
    }

    /// Advances transitions and debounced resizes.
    pub fn update(&mut self) {
        let now = self.now();
        if let Some(chart) = self.chart.as_mut() {
            chart.tick(now);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.chart.as_ref().is_some_and(ChartState::is_animating)
    }
}
