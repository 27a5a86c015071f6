use super::scale::Scales;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: t.mul_add(other.x - self.x, self.x),
            y: t.mul_add(other.y - self.y, self.y),
        }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Position of `value` on the axis of `index`, relative to the chart center.
///
/// Y grows downwards and axis 0 points straight up.
pub fn point_for(scales: &Scales, value: f64, index: usize) -> Point {
    let radius = scales.radius(value);
    let angle = scales.angle(index) - std::f64::consts::FRAC_PI_2;
    Point {
        x: radius * angle.cos(),
        y: radius * angle.sin(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::scale::Margins;
    use crate::domain::Attribute;
    use crate::viewport::Viewport;

    fn scales() -> Scales {
        let mut scales = Scales::new(Attribute::COUNT);
        scales.recompute_radius(
            Viewport::new(800.0, 600.0),
            &Margins::new(65.0, 50.0, 65.0, 50.0),
        );
        scales
    }

    #[test]
    fn zero_value_is_origin_on_every_axis() {
        let scales = scales();
        for index in 0..Attribute::COUNT {
            assert!(point_for(&scales, 0.0, index).distance(Point::ORIGIN) < 1e-9);
        }
    }

    #[test]
    fn points_stay_inside_outer_ring() {
        let scales = scales();
        let outer = scales.radius(100.0);
        for index in 0..Attribute::COUNT {
            for step in 0..=20 {
                let value = f64::from(step) * 5.0;
                let point = point_for(&scales, value, index);
                assert!(point.distance(Point::ORIGIN) <= outer + 1e-9);
            }
        }
    }

    #[test]
    fn first_axis_points_up() {
        let scales = scales();
        let point = point_for(&scales, 100.0, 0);
        assert!(point.x.abs() < 1e-9);
        assert!((point.y + scales.max_radius()).abs() < 1e-9);
    }

    #[test]
    fn lerp_hits_endpoints() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(5.0, -2.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Point::new(3.0, 0.0));
    }
}
