use super::geometry::Point;
use std::fmt::Write as _;

/// Tension of the closed cardinal spline drawn through the value vertices.
pub const CARDINAL_TENSION: f64 = 0.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

impl CubicSegment {
    fn line(start: Point, end: Point) -> Self {
        Self {
            start,
            control1: start.lerp(end, 1.0 / 3.0),
            control2: start.lerp(end, 2.0 / 3.0),
            end,
        }
    }

    pub fn at(&self, t: f64) -> Point {
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        Point {
            x: b3.mul_add(
                self.end.x,
                b2.mul_add(self.control2.x, b0.mul_add(self.start.x, b1 * self.control1.x)),
            ),
            y: b3.mul_add(
                self.end.y,
                b2.mul_add(self.control2.y, b0.mul_add(self.start.y, b1 * self.control1.y)),
            ),
        }
    }
}

/// A closed curve made of cubic segments, in vertex order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClosedCurve {
    start: Option<Point>,
    segments: Vec<CubicSegment>,
}

impl ClosedCurve {
    pub fn segments(&self) -> &[CubicSegment] {
        &self.segments
    }

    pub const fn start(&self) -> Option<Point> {
        self.start
    }

    /// Samples the curve into a polyline whose last point repeats the first.
    pub fn flatten(&self, steps_per_segment: usize) -> Vec<Point> {
        let Some(start) = self.start else {
            return Vec::new();
        };
        let steps = steps_per_segment.max(1);
        let mut points = Vec::with_capacity(self.segments.len() * steps + 1);
        points.push(start);
        for segment in &self.segments {
            for step in 1..=steps {
                points.push(segment.at(step as f64 / steps as f64));
            }
        }
        points
    }

    pub fn to_svg_path(&self) -> String {
        let Some(start) = self.start else {
            return String::new();
        };
        let mut d = format!("M{},{}", fmt_coord(start.x), fmt_coord(start.y));
        for segment in &self.segments {
            let _ = write!(
                d,
                "C{},{},{},{},{},{}",
                fmt_coord(segment.control1.x),
                fmt_coord(segment.control1.y),
                fmt_coord(segment.control2.x),
                fmt_coord(segment.control2.y),
                fmt_coord(segment.end.x),
                fmt_coord(segment.end.y),
            );
        }
        d.push('Z');
        d
    }
}

fn fmt_coord(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{rounded}")
    }
}

/// Closed cardinal spline through `vertices`. Each segment `p1 -> p2` takes its
/// tangents from the neighbours `p0` and `p3`, wrapping around the ends.
pub fn cardinal_closed(vertices: &[Point], tension: f64) -> ClosedCurve {
    let n = vertices.len();
    match n {
        0 => ClosedCurve::default(),
        1 => ClosedCurve {
            start: Some(vertices[0]),
            segments: Vec::new(),
        },
        2 => ClosedCurve {
            start: Some(vertices[0]),
            segments: vec![
                CubicSegment::line(vertices[0], vertices[1]),
                CubicSegment::line(vertices[1], vertices[0]),
            ],
        },
        _ => {
            let k = (1.0 - tension) / 6.0;
            let segments = (0..n)
                .map(|i| {
                    let p0 = vertices[(i + n - 1) % n];
                    let p1 = vertices[i];
                    let p2 = vertices[(i + 1) % n];
                    let p3 = vertices[(i + 2) % n];
                    CubicSegment {
                        start: p1,
                        control1: p1.offset(k * (p2.x - p0.x), k * (p2.y - p0.y)),
                        control2: p2.offset(-k * (p3.x - p1.x), -k * (p3.y - p1.y)),
                        end: p2,
                    }
                })
                .collect();
            ClosedCurve {
                start: Some(vertices[0]),
                segments,
            }
        }
    }
}
