use super::curve::{cardinal_closed, ClosedCurve, CARDINAL_TENSION};
use super::geometry::{point_for, Point};
use super::scale::{Margins, Scales};
use super::transition::Transition;
use crate::domain::{Attribute, Record, LABEL_DISTANCE, RADIAL_LEVELS, SPOKE_DISTANCE};
use serde::{Serialize, Serializer};

/// Surface-dependent layout constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutStyle {
    pub margins: Margins,
    /// Vertical shift applied to label anchors so text sits on its baseline.
    pub label_nudge: f64,
    /// Value distance that has to fit inside the margins.
    pub fit_distance: f64,
}

impl LayoutStyle {
    /// Page layout in CSS pixels.
    pub const fn pixels() -> Self {
        Self {
            margins: Margins::new(65.0, 50.0, 65.0, 50.0),
            label_nudge: 5.0,
            fit_distance: SPOKE_DISTANCE,
        }
    }

    /// Terminal canvas layout. One unit is a column wide and half a row tall.
    /// Labels are fitted too, since the canvas drops text outside its bounds.
    pub const fn terminal() -> Self {
        Self {
            margins: Margins::new(5.0, 14.0, 5.0, 14.0),
            label_nudge: 0.0,
            fit_distance: LABEL_DISTANCE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisCircle {
    pub level: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Spoke {
    pub attribute: Attribute,
    pub end: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueMarker {
    pub attribute: Attribute,
    pub position: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AttributeLabel {
    pub attribute: Attribute,
    pub text: &'static str,
    pub anchor: Point,
}

/// Everything the chart draws, relative to the chart center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualElements {
    pub axis_circles: Vec<AxisCircle>,
    pub spokes: Vec<Spoke>,
    #[serde(serialize_with = "serialize_curve")]
    pub value_path: ClosedCurve,
    pub markers: Vec<ValueMarker>,
    pub labels: Vec<AttributeLabel>,
    pub entity_name: String,
}

fn serialize_curve<S: Serializer>(curve: &ClosedCurve, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&curve.to_svg_path())
}

/// How a redraw reaches its target geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Redraw {
    /// Move markers and the value path over the transition duration, starting at `now`.
    Animated { now: f64 },
    Immediate,
}

/// Owns the drawn elements and keeps them in step with scales and selection.
///
/// Elements are built once in [`ChartRenderer::initialize`] and only updated
/// afterwards; their count never changes.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    style: LayoutStyle,
    transition_seconds: f64,
    elements: VisualElements,
    transition: Option<Transition>,
}

impl ChartRenderer {
    pub fn initialize(
        scales: &Scales,
        selection: &Record,
        style: LayoutStyle,
        transition_seconds: f64,
    ) -> Self {
        let axis_circles = RADIAL_LEVELS
            .iter()
            .map(|&level| AxisCircle {
                level,
                radius: scales.radius(level),
            })
            .collect();

        let spokes = Attribute::ALL
            .iter()
            .map(|&attribute| Spoke {
                attribute,
                end: point_for(scales, SPOKE_DISTANCE, attribute.index()),
            })
            .collect();

        let vertices = value_vertices(scales, selection);
        let markers = Attribute::ALL
            .iter()
            .zip(&vertices)
            .map(|(&attribute, &position)| ValueMarker {
                attribute,
                position,
            })
            .collect();

        let labels = Attribute::ALL
            .iter()
            .map(|&attribute| AttributeLabel {
                attribute,
                text: attribute.as_str(),
                anchor: label_anchor(scales, attribute, style.label_nudge),
            })
            .collect();

        Self {
            style,
            transition_seconds,
            elements: VisualElements {
                axis_circles,
                spokes,
                value_path: cardinal_closed(&vertices, CARDINAL_TENSION),
                markers,
                labels,
                entity_name: selection.display_name.clone(),
            },
            transition: None,
        }
    }

    pub const fn elements(&self) -> &VisualElements {
        &self.elements
    }

    pub const fn style(&self) -> &LayoutStyle {
        &self.style
    }

    pub const fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Brings every element in line with `scales` and `selection`.
    ///
    /// Guides and labels always snap. Markers and the value path either snap
    /// or start a transition from wherever they are currently drawn, so a
    /// transition started mid-flight takes over without a jump.
    pub fn redraw(&mut self, selection: &Record, scales: &Scales, mode: Redraw) {
        self.update_guides(scales);

        let target = value_vertices(scales, selection);
        match mode {
            Redraw::Animated { now } if self.transition_seconds > 0.0 => {
                let from = self
                    .transition
                    .as_ref()
                    .map_or_else(|| self.marker_positions(), |running| running.sample(now));
                log::debug!(
                    "transition to {} over {:.0}ms",
                    selection.identifier,
                    self.transition_seconds * 1000.0
                );
                self.set_value_geometry(&from);
                self.transition = Some(Transition::new(from, target, now, self.transition_seconds));
            }
            _ => {
                self.transition = None;
                self.set_value_geometry(&target);
            }
        }

        self.elements.entity_name.clone_from(&selection.display_name);
    }

    pub fn update_for_selection(
        &mut self,
        selection: &Record,
        scales: &Scales,
        animated: bool,
        now: f64,
    ) {
        let mode = if animated {
            Redraw::Animated { now }
        } else {
            Redraw::Immediate
        };
        self.redraw(selection, scales, mode);
    }

    /// Layout changes never animate. A running transition is dropped and the
    /// value geometry snaps to its target under the new scales.
    pub fn update_for_layout(&mut self, selection: &Record, scales: &Scales) {
        self.redraw(selection, scales, Redraw::Immediate);
    }

    /// Advances a running transition. Returns whether one is still running.
    pub fn tick(&mut self, now: f64) -> bool {
        let Some(transition) = self.transition.take() else {
            return false;
        };

        let positions = transition.sample(now);
        self.set_value_geometry(&positions);

        if transition.is_finished(now) {
            false
        } else {
            self.transition = Some(transition);
            true
        }
    }

    fn update_guides(&mut self, scales: &Scales) {
        for circle in &mut self.elements.axis_circles {
            circle.radius = scales.radius(circle.level);
        }
        for spoke in &mut self.elements.spokes {
            spoke.end = point_for(scales, SPOKE_DISTANCE, spoke.attribute.index());
        }
        for label in &mut self.elements.labels {
            label.anchor = label_anchor(scales, label.attribute, self.style.label_nudge);
        }
    }

    fn marker_positions(&self) -> Vec<Point> {
        self.elements.markers.iter().map(|marker| marker.position).collect()
    }

    fn set_value_geometry(&mut self, positions: &[Point]) {
        for (marker, position) in self.elements.markers.iter_mut().zip(positions) {
            marker.position = *position;
        }
        self.elements.value_path = cardinal_closed(positions, CARDINAL_TENSION);
    }
}

/// Vertices of the value polygon, in attribute order.
pub fn value_vertices(scales: &Scales, record: &Record) -> Vec<Point> {
    Attribute::ALL
        .iter()
        .map(|&attribute| point_for(scales, record.value(attribute), attribute.index()))
        .collect()
}

fn label_anchor(scales: &Scales, attribute: Attribute, nudge: f64) -> Point {
    point_for(scales, LABEL_DISTANCE, attribute.index()).offset(0.0, nudge)
}
