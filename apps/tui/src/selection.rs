use crate::dataset::DatasetStore;
use crate::domain::Record;
use crate::error::{ChartError, LoadError};

/// Holds the record on display. The record is replaced wholesale on every change.
#[derive(Debug, Clone)]
pub struct SelectionController {
    current: Record,
}

impl SelectionController {
    /// Starts on `default_identifier`, which must exist in the loaded dataset.
    pub fn initial(store: &DatasetStore, default_identifier: &str) -> Result<Self, LoadError> {
        let record = store
            .by_identifier(default_identifier)
            .ok_or_else(|| LoadError::MissingDefault(default_identifier.to_string()))?;
        Ok(Self {
            current: record.clone(),
        })
    }

    pub const fn current(&self) -> &Record {
        &self.current
    }

    /// Unknown identifiers leave the current selection untouched.
    pub fn select(&mut self, store: &DatasetStore, identifier: &str) -> Result<&Record, ChartError> {
        let record = store
            .by_identifier(identifier)
            .ok_or_else(|| ChartError::UnknownSelection(identifier.to_string()))?;
        self.current = record.clone();
        Ok(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Attribute;

    fn store() -> DatasetStore {
        DatasetStore::from_records(
            vec![
                Record::new("H. Son", "Heung Min Son", 89.0, [88.0, 85.0, 80.0, 89.0, 43.0, 75.0]),
                Record::new("L. Messi", "Lionel Messi", 91.0, [81.0, 89.0, 90.0, 94.0, 34.0, 64.0]),
            ],
            85.0,
        )
    }

    #[test]
    fn missing_default_fails_explicitly() {
        let result = SelectionController::initial(&store(), "K. Mbappé");
        assert!(matches!(result, Err(LoadError::MissingDefault(id)) if id == "K. Mbappé"));
    }

    #[test]
    fn select_replaces_current_record() {
        let store = store();
        let mut selection = SelectionController::initial(&store, "H. Son").unwrap();
        assert_eq!(selection.current().display_name, "Heung Min Son");

        let record = selection.select(&store, "L. Messi").unwrap();
        assert!((record.value(Attribute::Dribbling) - 94.0).abs() < f64::EPSILON);
        assert_eq!(selection.current().identifier, "L. Messi");
    }

    #[test]
    fn unknown_selection_is_a_no_op() {
        let store = store();
        let mut selection = SelectionController::initial(&store, "H. Son").unwrap();

        let result = selection.select(&store, "Nobody");
        assert_eq!(result.err(), Some(ChartError::UnknownSelection("Nobody".to_string())));
        assert_eq!(selection.current().identifier, "H. Son");
    }
}
