use serde::Serialize;

/// Reference values of the concentric guide circles.
pub const RADIAL_LEVELS: [f64; 5] = [0.0, 25.0, 50.0, 75.0, 100.0];

/// Upper bound of every attribute value.
pub const VALUE_MAX: f64 = 100.0;

/// Value distance of the spoke endpoints (the outermost guide circle).
pub const SPOKE_DISTANCE: f64 = 100.0;

/// Value distance of the label anchors, just outside the outer ring.
pub const LABEL_DISTANCE: f64 = 116.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Pace,
    Shooting,
    Passing,
    Dribbling,
    Defending,
    Physic,
}

impl Attribute {
    /// Angular order of the axes, starting at 12 o'clock and going clockwise.
    pub const ALL: [Self; 6] = [
        Self::Pace,
        Self::Shooting,
        Self::Passing,
        Self::Dribbling,
        Self::Defending,
        Self::Physic,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pace => "pace",
            Self::Shooting => "shooting",
            Self::Passing => "passing",
            Self::Dribbling => "dribbling",
            Self::Defending => "defending",
            Self::Physic => "physic",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Pace),
            1 => Some(Self::Shooting),
            2 => Some(Self::Passing),
            3 => Some(Self::Dribbling),
            4 => Some(Self::Defending),
            5 => Some(Self::Physic),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Pace => 0,
            Self::Shooting => 1,
            Self::Passing => 2,
            Self::Dribbling => 3,
            Self::Defending => 4,
            Self::Physic => 5,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "pace" => Some(Self::Pace),
            "shooting" => Some(Self::Shooting),
            "passing" => Some(Self::Passing),
            "dribbling" => Some(Self::Dribbling),
            "defending" => Some(Self::Defending),
            "physic" => Some(Self::Physic),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pace => "Pace",
            Self::Shooting => "Shooting",
            Self::Passing => "Passing",
            Self::Dribbling => "Dribbling",
            Self::Defending => "Defending",
            Self::Physic => "Physic",
        }
    }
}

/// One entity's attribute profile. Every attribute is defined and lies in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub identifier: String,
    pub display_name: String,
    pub overall: f64,
    values: [f64; Attribute::COUNT],
}

impl Record {
    pub fn new(
        identifier: impl Into<String>,
        display_name: impl Into<String>,
        overall: f64,
        values: [f64; Attribute::COUNT],
    ) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
            overall,
            values,
        }
    }

    pub const fn value(&self, attribute: Attribute) -> f64 {
        self.values[attribute.index()]
    }

    /// Values in attribute order.
    pub const fn values(&self) -> &[f64; Attribute::COUNT] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_and_from_index_agree() {
        for (position, attribute) in Attribute::ALL.iter().enumerate() {
            assert_eq!(attribute.index(), position);
            assert_eq!(Attribute::from_index(position), Some(*attribute));
        }
        assert_eq!(Attribute::from_index(Attribute::COUNT), None);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Attribute::parse(" Dribbling "), Some(Attribute::Dribbling));
        assert_eq!(Attribute::parse("PHYSIC"), Some(Attribute::Physic));
        assert_eq!(Attribute::parse("stamina"), None);
    }

    #[test]
    fn record_values_follow_attribute_order() {
        let record = Record::new("H. Son", "Heung Min Son", 89.0, [88.0, 85.0, 80.0, 89.0, 43.0, 75.0]);
        assert!((record.value(Attribute::Pace) - 88.0).abs() < f64::EPSILON);
        assert!((record.value(Attribute::Defending) - 43.0).abs() < f64::EPSILON);
        assert_eq!(record.values().len(), Attribute::COUNT);
    }
}
