use super::geometry::Point;

/// Default duration of an animated selection change, in seconds.
pub const DEFAULT_TRANSITION_SECONDS: f64 = 0.6;

pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = (-2.0f64).mul_add(t, 2.0);
        1.0 - u * u * u / 2.0
    }
}

/// Moves a set of points from one layout to another over a fixed duration.
///
/// Sampling depends only on the clock value passed in, so restarting from
/// [`Transition::sample`] at any instant gives a seamless hand-over.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    from: Vec<Point>,
    to: Vec<Point>,
    started_at: f64,
    duration: f64,
}

impl Transition {
    pub fn new(from: Vec<Point>, to: Vec<Point>, started_at: f64, duration: f64) -> Self {
        debug_assert_eq!(from.len(), to.len());
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    pub fn progress(&self, now_seconds: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now_seconds - self.started_at) / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, now_seconds: f64) -> bool {
        self.progress(now_seconds) >= 1.0
    }

    pub fn sample(&self, now_seconds: f64) -> Vec<Point> {
        let progress = self.progress(now_seconds);
        if progress >= 1.0 {
            return self.to.clone();
        }
        let eased = ease_cubic_in_out(progress);
        self.from
            .iter()
            .zip(&self.to)
            .map(|(from, to)| from.lerp(*to, eased))
            .collect()
    }

    pub fn target(&self) -> &[Point] {
        &self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::assert_close;

    fn transition() -> Transition {
        Transition::new(
            vec![Point::ORIGIN, Point::new(10.0, 0.0)],
            vec![Point::new(0.0, 10.0), Point::new(20.0, 0.0)],
            4.0,
            0.5,
        )
    }

    #[test]
    fn easing_is_symmetric_and_bounded() {
        assert_close(ease_cubic_in_out(0.0), 0.0);
        assert_close(ease_cubic_in_out(0.5), 0.5);
        assert_close(ease_cubic_in_out(1.0), 1.0);
        assert_close(ease_cubic_in_out(0.25) + ease_cubic_in_out(0.75), 1.0);
        assert_close(ease_cubic_in_out(4.0), 1.0);
    }

    #[test]
    fn sample_starts_at_source_and_ends_at_target() {
        let transition = transition();
        assert_eq!(transition.sample(4.0), vec![Point::ORIGIN, Point::new(10.0, 0.0)]);
        assert_eq!(transition.sample(4.5), transition.target().to_vec());
        assert!(transition.is_finished(4.5));
        assert!(!transition.is_finished(4.2));
    }

    #[test]
    fn midpoint_is_halfway() {
        let points = transition().sample(4.25);
        assert_close(points[0].y, 5.0);
        assert_close(points[1].x, 15.0);
    }

    #[test]
    fn time_before_start_holds_source() {
        let transition = transition();
        assert_eq!(transition.sample(1.0), vec![Point::ORIGIN, Point::new(10.0, 0.0)]);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let transition = Transition::new(vec![Point::ORIGIN], vec![Point::new(1.0, 1.0)], 0.0, 0.0);
        assert!(transition.is_finished(0.0));
        assert_eq!(transition.sample(0.0), vec![Point::new(1.0, 1.0)]);
    }
}
