use crate::domain::VALUE_MAX;
use crate::viewport::Viewport;
use serde::Serialize;

/// Continuous linear mapping from `domain` onto `range`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if (d1 - d0).abs() < f64::EPSILON {
            return r0;
        }
        let t = (value - d0) / (d1 - d0);
        t.mul_add(r1 - r0, r0)
    }

    pub const fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub const fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn set_range(&mut self, range: (f64, f64)) {
        self.range = range;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// The radial value scale and the angular index scale.
///
/// Domains are fixed at construction. Only the radial range changes, through
/// [`Scales::recompute_radius`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scales {
    radius: LinearScale,
    angle: LinearScale,
}

impl Scales {
    pub fn new(attribute_count: usize) -> Self {
        Self {
            radius: LinearScale::new((0.0, VALUE_MAX), (0.0, 0.0)),
            angle: LinearScale::new(
                (0.0, attribute_count as f64),
                (0.0, 2.0 * std::f64::consts::PI),
            ),
        }
    }

    pub fn radius(&self, value: f64) -> f64 {
        self.radius.scale(value)
    }

    pub fn angle(&self, index: usize) -> f64 {
        self.angle.scale(index as f64)
    }

    pub const fn max_radius(&self) -> f64 {
        self.radius.range().1
    }

    pub const fn radius_scale(&self) -> &LinearScale {
        &self.radius
    }

    pub const fn angle_scale(&self) -> &LinearScale {
        &self.angle
    }

    /// Fits the outer ring inside the viewport. A non-positive fit collapses
    /// the chart onto its center instead of mirroring it.
    pub fn recompute_radius(&mut self, viewport: Viewport, margins: &Margins) {
        self.recompute_radius_to(viewport, margins, VALUE_MAX);
    }

    /// Like [`Scales::recompute_radius`], but fits value `distance` to the
    /// margins instead of the outer ring. Used to keep labels beyond the ring
    /// on the surface.
    pub fn recompute_radius_to(&mut self, viewport: Viewport, margins: &Margins, distance: f64) {
        let fit = (viewport.height / 2.0 - margins.top).min(viewport.width / 2.0 - margins.right);
        let max_radius = if fit.is_finite() && distance > 0.0 {
            fit.max(0.0) * VALUE_MAX / distance
        } else {
            0.0
        };
        self.radius.set_range((0.0, max_radius));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::assert_close;
    use crate::domain::Attribute;

    #[test]
    fn linear_scale_maps_domain_onto_range() {
        let scale = LinearScale::new((0.0, 100.0), (0.0, 200.0));
        assert_close(scale.scale(0.0), 0.0);
        assert_close(scale.scale(25.0), 50.0);
        assert_close(scale.scale(100.0), 200.0);
    }

    #[test]
    fn radius_uses_smaller_half_dimension() {
        let mut scales = Scales::new(Attribute::COUNT);
        let margins = Margins::new(65.0, 50.0, 65.0, 50.0);

        scales.recompute_radius(Viewport::new(800.0, 600.0), &margins);
        assert_close(scales.max_radius(), 235.0);

        scales.recompute_radius(Viewport::new(400.0, 900.0), &margins);
        assert_close(scales.max_radius(), 150.0);
        assert_eq!(scales.radius_scale().domain(), (0.0, 100.0));
    }

    #[test]
    fn tiny_viewport_collapses_to_origin() {
        let mut scales = Scales::new(Attribute::COUNT);
        scales.recompute_radius(Viewport::new(20.0, 20.0), &Margins::new(65.0, 50.0, 65.0, 50.0));

        assert_close(scales.max_radius(), 0.0);
        assert_close(scales.radius(100.0), 0.0);
    }

    #[test]
    fn angular_spacing_is_uniform() {
        let scales = Scales::new(Attribute::COUNT);
        let step = 2.0 * std::f64::consts::PI / Attribute::COUNT as f64;
        for index in 0..Attribute::COUNT {
            assert_close(scales.angle(index + 1) - scales.angle(index), step);
        }
        assert_close(scales.angle(Attribute::COUNT), 2.0 * std::f64::consts::PI);
    }

    #[test]
    fn recompute_is_idempotent() {
        let margins = Margins::new(65.0, 50.0, 65.0, 50.0);
        let mut once = Scales::new(Attribute::COUNT);
        once.recompute_radius(Viewport::new(1024.0, 768.0), &margins);
        let mut twice = once;
        twice.recompute_radius(Viewport::new(1024.0, 768.0), &margins);

        assert_eq!(once, twice);
    }

    #[test]
    fn fitting_a_farther_distance_shrinks_the_ring() {
        let margins = Margins::new(5.0, 14.0, 5.0, 14.0);
        let mut scales = Scales::new(Attribute::COUNT);
        scales.recompute_radius_to(Viewport::new(114.0, 98.0), &margins, 116.0);

        assert_close(scales.radius(116.0), 44.0);
        assert_close(scales.max_radius(), 44.0 * 100.0 / 116.0);
    }
}
