use crate::domain::{Attribute, Record, VALUE_MAX};
use crate::error::LoadError;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// Where the player dataset lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.starts_with("http://") || value.starts_with("https://") {
            Self::Url(value.to_string())
        } else {
            Self::File(PathBuf::from(value))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

/// One entry of the raw player export. Unknown fields are ignored and any
/// field may be missing or null; incomplete rows are dropped, not fatal.
#[derive(Debug, Deserialize)]
struct RawRecord {
    short_name: Option<String>,
    long_name: Option<String>,
    overall: Option<f64>,
    pace: Option<f64>,
    shooting: Option<f64>,
    passing: Option<f64>,
    dribbling: Option<f64>,
    defending: Option<f64>,
    physic: Option<f64>,
}

impl RawRecord {
    fn attribute(&self, attribute: Attribute) -> Option<f64> {
        match attribute {
            Attribute::Pace => self.pace,
            Attribute::Shooting => self.shooting,
            Attribute::Passing => self.passing,
            Attribute::Dribbling => self.dribbling,
            Attribute::Defending => self.defending,
            Attribute::Physic => self.physic,
        }
    }

    fn into_record(self) -> Result<Record, String> {
        let mut values = [0.0; Attribute::COUNT];
        for attribute in Attribute::ALL {
            match self.attribute(attribute) {
                Some(value) if value.is_finite() && (0.0..=VALUE_MAX).contains(&value) => {
                    values[attribute.index()] = value;
                }
                _ => return Err(format!("{} missing or out of range", attribute.as_str())),
            }
        }

        match (self.short_name, self.long_name, self.overall) {
            (Some(identifier), Some(display_name), Some(overall)) => {
                Ok(Record::new(identifier, display_name, overall, values))
            }
            (None, _, _) => Err("short_name missing".to_string()),
            (_, None, _) => Err("long_name missing".to_string()),
            (_, _, None) => Err("overall missing".to_string()),
        }
    }
}

/// Filtered player records plus the selectable identifiers, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    records: Vec<Record>,
    identifiers: Vec<String>,
    index: HashMap<String, usize>,
}

impl DatasetStore {
    pub async fn load(source: &DataSource, min_overall: f64) -> Result<Self, LoadError> {
        log::info!("loading dataset from {source}");
        let text = match source {
            DataSource::File(path) => tokio::fs::read_to_string(path)
                .await
                .map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                })?,
            DataSource::Url(url) => fetch_text(url).await?,
        };

        let store = Self::from_json(&text, min_overall)?;
        log::info!(
            "loaded {} records ({} selectable) from {source}",
            store.len(),
            store.identifiers().len()
        );
        Ok(store)
    }

    pub fn from_json(text: &str, min_overall: f64) -> Result<Self, LoadError> {
        let raw: Vec<RawRecord> = serde_json::from_str(text)?;

        let records = raw
            .into_iter()
            .filter(|record| record.overall.is_some_and(|overall| overall > min_overall))
            .filter_map(|record| {
                let name = record.short_name.clone().unwrap_or_default();
                match record.into_record() {
                    Ok(record) => Some(record),
                    Err(reason) => {
                        log::warn!("skipping {name:?}: {reason}");
                        None
                    }
                }
            })
            .collect::<Vec<_>>();

        if records.is_empty() {
            return Err(LoadError::Empty { min_overall });
        }

        Ok(Self::from_records(records, min_overall))
    }

    /// Builds the store from already validated records, keeping those above `min_overall`.
    pub fn from_records(records: Vec<Record>, min_overall: f64) -> Self {
        let records = records
            .into_iter()
            .filter(|record| record.overall > min_overall)
            .collect::<Vec<_>>();

        let mut identifiers = Vec::new();
        let mut index = HashMap::new();
        for (position, record) in records.iter().enumerate() {
            if !index.contains_key(&record.identifier) {
                index.insert(record.identifier.clone(), position);
                identifiers.push(record.identifier.clone());
            }
        }

        Self {
            records,
            identifiers,
            index,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// First record carrying `identifier`.
    pub fn by_identifier(&self, identifier: &str) -> Option<&Record> {
        self.index
            .get(identifier)
            .and_then(|&position| self.records.get(position))
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.index.contains_key(identifier)
    }

    pub fn position_of(&self, identifier: &str) -> Option<usize> {
        self.identifiers.iter().position(|known| known == identifier)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let http = |source| LoadError::Http {
        url: url.to_string(),
        source,
    };

    let response = reqwest::get(url).await.map_err(http)?;
    let response = response.error_for_status().map_err(http)?;
    response.text().await.map_err(http)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {"short_name": "L. Messi", "long_name": "Lionel Andrés Messi Cuccittini", "overall": 91,
         "pace": 81, "shooting": 89, "passing": 90, "dribbling": 94, "defending": 34, "physic": 64,
         "club_name": "Paris Saint-Germain"},
        {"short_name": "H. Son", "long_name": "Heung Min Son", "overall": 89,
         "pace": 88, "shooting": 85, "passing": 80, "dribbling": 89, "defending": 43, "physic": 75},
        {"short_name": "T. Courtois", "long_name": "Thibaut Courtois", "overall": 90,
         "pace": null, "shooting": null, "passing": null, "dribbling": null, "defending": null, "physic": null},
        {"short_name": "J. Bench", "long_name": "Just Below", "overall": 85,
         "pace": 70, "shooting": 70, "passing": 70, "dribbling": 70, "defending": 70, "physic": 70},
        {"short_name": "L. Messi", "long_name": "Messi Again", "overall": 88,
         "pace": 1, "shooting": 1, "passing": 1, "dribbling": 1, "defending": 1, "physic": 1}
    ]"#;

    fn record(identifier: &str, overall: f64) -> Record {
        Record::new(identifier, identifier, overall, [50.0; Attribute::COUNT])
    }

    #[test]
    fn filters_by_overall_and_skips_incomplete_records() {
        let store = DatasetStore::from_json(SAMPLE, 85.0).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.identifiers(), ["L. Messi", "H. Son"]);
        assert!(!store.contains("J. Bench"));
        assert!(!store.contains("T. Courtois"));
    }

    #[test]
    fn lookup_returns_first_occurrence() {
        let store = DatasetStore::from_json(SAMPLE, 85.0).unwrap();
        let messi = store.by_identifier("L. Messi").unwrap();

        assert_eq!(messi.display_name, "Lionel Andrés Messi Cuccittini");
        assert!((messi.value(Attribute::Dribbling) - 94.0).abs() < f64::EPSILON);
        assert!(store.by_identifier("Nobody").is_none());
    }

    #[test]
    fn duplicate_identifiers_collapse_in_first_seen_order() {
        let store = DatasetStore::from_records(
            vec![record("A", 90.0), record("B", 90.0), record("A", 90.0)],
            85.0,
        );

        assert_eq!(store.identifiers(), ["A", "B"]);
        assert_eq!(store.position_of("B"), Some(1));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn empty_after_filter_is_an_error() {
        let result = DatasetStore::from_json(SAMPLE, 95.0);
        assert!(matches!(result, Err(LoadError::Empty { .. })));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = DatasetStore::from_json("{\"not\": \"an array\"}", 85.0);
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let json = r#"[{"short_name": "X", "long_name": "X", "overall": 99,
            "pace": 120, "shooting": 1, "passing": 1, "dribbling": 1, "defending": 1, "physic": 1}]"#;
        assert!(matches!(
            DatasetStore::from_json(json, 85.0),
            Err(LoadError::Empty { .. })
        ));
    }

    #[test]
    fn data_source_detects_urls() {
        assert_eq!(
            DataSource::parse("https://example.com/players.json"),
            DataSource::Url("https://example.com/players.json".to_string())
        );
        assert_eq!(
            DataSource::parse("data/players.json"),
            DataSource::File(PathBuf::from("data/players.json"))
        );
    }

    #[tokio::test]
    async fn load_reads_file_from_disk() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(SAMPLE.as_bytes())?;

        let source = DataSource::File(file.path().to_path_buf());
        let store = DatasetStore::load(&source, 85.0).await?;

        assert_eq!(store.identifiers().len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn load_reports_missing_file() {
        let source = DataSource::File(PathBuf::from("/definitely/not/here.json"));
        let result = DatasetStore::load(&source, 85.0).await;
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn incomplete_rows_are_dropped_without_failing_the_load() {
        let json = r#"[
            {"short_name": "Low", "long_name": "Low Rated", "overall": null},
            {"short_name": "No Score", "long_name": "No Score"},
            {"long_name": "Nameless", "overall": 90,
             "pace": 50, "shooting": 50, "passing": 50, "dribbling": 50, "defending": 50, "physic": 50},
            {"short_name": "H. Son", "long_name": "Heung Min Son", "overall": 89,
             "pace": 88, "shooting": 85, "passing": 80, "dribbling": 89, "defending": 43, "physic": 75}
        ]"#;

        let store = DatasetStore::from_json(json, 85.0).unwrap();
        assert_eq!(store.identifiers(), ["H. Son"]);
    }

    #[tokio::test]
    async fn load_reports_unreachable_url() {
        let source = DataSource::Url("http://127.0.0.1:9/players.json".to_string());
        let result = DatasetStore::load(&source, 85.0).await;
        assert!(matches!(result, Err(LoadError::Http { .. })));
    }
}
