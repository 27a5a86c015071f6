use super::renderer::{ChartRenderer, LayoutStyle, VisualElements};
use super::scale::Scales;
use crate::config::ChartConfig;
use crate::dataset::DatasetStore;
use crate::domain::{Attribute, Record};
use crate::error::{ChartError, LoadError};
use crate::resize::ResizeController;
use crate::selection::SelectionController;
use crate::viewport::ViewportProvider;

/// Everything a live chart owns: scales, the selection, the drawn elements and
/// the resize bookkeeping. All updates go through this type.
#[derive(Debug, Clone)]
pub struct ChartState {
    scales: Scales,
    selection: SelectionController,
    renderer: ChartRenderer,
    resize: ResizeController,
}

impl ChartState {
    pub fn initialize(
        store: &DatasetStore,
        config: &ChartConfig,
        viewport: &impl ViewportProvider,
        style: LayoutStyle,
    ) -> Result<Self, LoadError> {
        let selection = SelectionController::initial(store, &config.default_identifier)?;

        let viewport = viewport.viewport();
        let mut scales = Scales::new(Attribute::COUNT);
        scales.recompute_radius_to(viewport, &style.margins, style.fit_distance);

        let renderer = ChartRenderer::initialize(
            &scales,
            selection.current(),
            style,
            config.transition_seconds,
        );
        let resize = ResizeController::new(style, config.resize_debounce_seconds);

        log::info!(
            "chart initialized on {} at {:.0}x{:.0}",
            selection.current().identifier,
            viewport.width,
            viewport.height
        );

        Ok(Self {
            scales,
            selection,
            renderer,
            resize,
        })
    }

    /// Switches to `identifier` with an animated transition starting at `now`.
    pub fn select(
        &mut self,
        store: &DatasetStore,
        identifier: &str,
        now: f64,
    ) -> Result<(), ChartError> {
        let record = self.selection.select(store, identifier)?;
        log::info!("selected {identifier}");
        self.renderer
            .update_for_selection(record, &self.scales, true, now);
        Ok(())
    }

    /// Feeds a viewport size notification through the resize controller.
    pub fn resize(&mut self, viewport: &impl ViewportProvider, now: f64) {
        let viewport = viewport.viewport();
        if let Some(viewport) = self.resize.observe(viewport, now) {
            self.resize.apply(
                viewport,
                &mut self.scales,
                &mut self.renderer,
                self.selection.current(),
            );
        }
    }

    /// Applies debounced resizes and advances transitions. Returns whether
    /// anything is still moving.
    pub fn tick(&mut self, now: f64) -> bool {
        if let Some(viewport) = self.resize.poll(now) {
            self.resize.apply(
                viewport,
                &mut self.scales,
                &mut self.renderer,
                self.selection.current(),
            );
        }
        self.renderer.tick(now)
    }

    pub const fn elements(&self) -> &VisualElements {
        self.renderer.elements()
    }

    pub const fn scales(&self) -> &Scales {
        &self.scales
    }

    pub const fn selection(&self) -> &Record {
        self.selection.current()
    }

    pub const fn is_animating(&self) -> bool {
        self.renderer.is_animating()
    }
}
