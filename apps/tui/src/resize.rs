use crate::chart::renderer::{ChartRenderer, LayoutStyle};
use crate::chart::scale::Scales;
use crate::domain::Record;
use crate::viewport::Viewport;

/// Turns viewport size changes into scale updates and snap redraws.
///
/// With a positive debounce only the last size of a burst is applied, once
/// the burst has been quiet for the debounce window.
#[derive(Debug, Clone)]
pub struct ResizeController {
    style: LayoutStyle,
    debounce_seconds: f64,
    pending: Option<(Viewport, f64)>,
}

impl ResizeController {
    pub const fn new(style: LayoutStyle, debounce_seconds: f64) -> Self {
        Self {
            style,
            debounce_seconds,
            pending: None,
        }
    }

    /// Records a size notification. Returns the viewport to apply right away, if any.
    pub fn observe(&mut self, viewport: Viewport, now: f64) -> Option<Viewport> {
        if self.debounce_seconds <= 0.0 {
            self.pending = None;
            return Some(viewport);
        }
        self.pending = Some((viewport, now));
        None
    }

    /// Releases a debounced viewport once the quiet period has passed.
    pub fn poll(&mut self, now: f64) -> Option<Viewport> {
        match self.pending {
            Some((viewport, seen_at)) if now - seen_at >= self.debounce_seconds => {
                self.pending = None;
                Some(viewport)
            }
            _ => None,
        }
    }

    pub fn apply(
        &self,
        viewport: Viewport,
        scales: &mut Scales,
        renderer: &mut ChartRenderer,
        selection: &Record,
    ) {
        log::debug!("resize to {:.0}x{:.0}", viewport.width, viewport.height);
        scales.recompute_radius_to(viewport, &self.style.margins, self.style.fit_distance);
        renderer.update_for_layout(selection, scales);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::{Attribute, Record, LABEL_DISTANCE};

    #[test]
    fn without_debounce_every_size_applies_immediately() {
        let mut resize = ResizeController::new(LayoutStyle::pixels(), 0.0);
        let viewport = Viewport::new(640.0, 480.0);

        assert_eq!(resize.observe(viewport, 1.0), Some(viewport));
        assert_eq!(resize.poll(5.0), None);
    }

    #[test]
    fn debounce_keeps_only_the_last_size_of_a_burst() {
        let mut resize = ResizeController::new(LayoutStyle::pixels(), 0.25);

        assert_eq!(resize.observe(Viewport::new(600.0, 400.0), 1.0), None);
        assert_eq!(resize.observe(Viewport::new(700.0, 500.0), 1.1), None);
        assert_eq!(resize.poll(1.2), None);
        assert_eq!(resize.poll(1.4), Some(Viewport::new(700.0, 500.0)));
        assert_eq!(resize.poll(2.0), None);
    }

    #[test]
    fn terminal_layout_keeps_labels_inside_the_viewport() {
        let style = LayoutStyle::terminal();
        let resize = ResizeController::new(style, 0.0);
        let record = Record::new("A", "A", 90.0, [50.0; 6]);
        let mut scales = Scales::new(Attribute::COUNT);
        let mut renderer = ChartRenderer::initialize(&scales, &record, style, 0.0);

        let viewport = Viewport::new(114.0, 98.0);
        resize.apply(viewport, &mut scales, &mut renderer, &record);

        let half_height = viewport.height / 2.0;
        assert!(scales.radius(LABEL_DISTANCE) <= half_height - style.margins.top + 1e-9);
        for label in &renderer.elements().labels {
            assert!(label.anchor.y.abs() <= half_height);
        }
    }
}
