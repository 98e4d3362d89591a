//! Regression suite container and its on-disk formats.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::de::value::MapAccessDeserializer;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

use super::case::RegressionCase;

/// On-disk format of a regression suite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuiteFormat {
    #[default]
    Toml,
    Json,
}

impl SuiteFormat {
    /// File extension (without the dot)
    pub fn extension(self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }

    /// Parse a format name or extension (`toml`, `json`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().trim_start_matches('.').to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Format implied by a path's extension, TOML when unknown
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_name)
            .unwrap_or_default()
    }
}

/// Metadata describing where a regression suite came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaData {
    pub ontology: String,
    pub ontology_version: String,
    #[serde(deserialize_with = "deserialize_creation_date")]
    pub regr_suite_creation_date: DateTime<Utc>,
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

impl MetaData {
    pub fn new(ontology: impl Into<String>, ontology_version: impl Into<String>) -> Self {
        Self {
            ontology: ontology.into(),
            ontology_version: ontology_version.into(),
            regr_suite_creation_date: Utc::now(),
            extra: BTreeMap::new(),
        }
    }

    /// Placeholder metadata for suites built without a known model
    pub fn unknown() -> Self {
        Self::new("Unknown", "Unknown")
    }
}

/// Accepts an RFC 3339 string (JSON, quoted TOML) or a native TOML datetime
fn deserialize_creation_date<'de, D>(
    deserializer: D,
) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    struct CreationDateVisitor;

    impl<'de> Visitor<'de> for CreationDateVisitor {
        type Value = DateTime<Utc>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an RFC 3339 date-time string or TOML offset date-time")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Self::Value, E> {
            DateTime::parse_from_rfc3339(value)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(E::custom)
        }

        fn visit_map<A>(self, map: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: de::MapAccess<'de>,
        {
            let datetime = toml::value::Datetime::deserialize(MapAccessDeserializer::new(map))?;
            self.visit_str(&datetime.to_string())
        }
    }

    deserializer.deserialize_any(CreationDateVisitor)
}

/// A set of regression cases plus the metadata they were created with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionSuite {
    pub metadata: MetaData,
    #[serde(default)]
    pub cases: Vec<RegressionCase>,
}

impl RegressionSuite {
    pub fn new(cases: Vec<RegressionCase>, metadata: MetaData) -> Self {
        Self { metadata, cases }
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn to_string_as(&self, format: SuiteFormat) -> Result<String> {
        let content = match format {
            SuiteFormat::Toml => toml::to_string_pretty(self)?,
            SuiteFormat::Json => serde_json::to_string_pretty(self)?,
        };
        Ok(content)
    }

    pub fn from_str_as(content: &str, format: SuiteFormat) -> Result<Self> {
        let suite = match format {
            SuiteFormat::Toml => toml::from_str(content)?,
            SuiteFormat::Json => serde_json::from_str(content)?,
        };
        Ok(suite)
    }

    /// Load a suite, picking the format from the file extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_str_as(&content, SuiteFormat::from_path(path))
    }

    /// Write the suite to `path` in the given format, replacing any existing file
    pub fn write_to(&self, path: &Path, format: SuiteFormat) -> Result<String> {
        let content = self.to_string_as(format)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &content)?;
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regression::FilterType;
    use tempfile::TempDir;

    fn sample_suite() -> RegressionSuite {
        let mut metadata = MetaData::new("SNOMED-CT", "2024-07");
        metadata
            .extra
            .insert("source".to_string(), "unit-test".to_string());
        RegressionSuite::new(
            vec![
                RegressionCase::new("heart-attack")
                    .with_phrase("The patient had a [CONCEPT].")
                    .with_filter(FilterType::Cui, ["22298006"])
                    .with_filter(FilterType::Name, ["heart attack", "MI"]),
                RegressionCase::new("no-filters"),
            ],
            metadata,
        )
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(SuiteFormat::from_path(Path::new("a/b.json")), SuiteFormat::Json);
        assert_eq!(SuiteFormat::from_path(Path::new("a/b.TOML")), SuiteFormat::Toml);
        assert_eq!(SuiteFormat::from_path(Path::new("a/b.yml")), SuiteFormat::Toml);
        assert_eq!(SuiteFormat::from_path(Path::new("a/b")), SuiteFormat::Toml);
    }

    #[test]
    fn test_format_from_name() {
        assert_eq!(SuiteFormat::from_name(".json"), Some(SuiteFormat::Json));
        assert_eq!(SuiteFormat::from_name("Toml"), Some(SuiteFormat::Toml));
        assert_eq!(SuiteFormat::from_name("yaml"), None);
    }

    #[test]
    fn test_toml_text_roundtrip() {
        let suite = sample_suite();
        let text = suite.to_string_as(SuiteFormat::Toml).unwrap();
        assert!(text.contains("CUI"));
        let back = RegressionSuite::from_str_as(&text, SuiteFormat::Toml).unwrap();
        assert_eq!(back, suite);
    }

    #[test]
    fn test_json_file_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("suite.json");
        let suite = sample_suite();
        suite.write_to(&path, SuiteFormat::Json).unwrap();

        let back = RegressionSuite::from_file(&path).unwrap();
        assert_eq!(back.cases, suite.cases);
        assert_eq!(back.metadata.extra.get("source").unwrap(), "unit-test");
    }

    #[test]
    fn test_missing_optional_fields() {
        let text = r#"
[metadata]
ontology = "UMLS"
ontology_version = "2023AA"
regr_suite_creation_date = "2024-01-01T00:00:00Z"

[[cases]]
name = "bare"
"#;
        let suite = RegressionSuite::from_str_as(text, SuiteFormat::Toml).unwrap();
        assert_eq!(suite.len(), 1);
        assert!(suite.cases[0].filters.is_empty());
        assert!(suite.metadata.extra.is_empty());
    }

    #[test]
    fn test_native_toml_datetime() {
        let text = r#"
[metadata]
ontology = "UMLS"
ontology_version = "2023AA"
regr_suite_creation_date = 2024-01-01T02:00:00+02:00

[[cases]]
name = "a"
"#;
        let suite = RegressionSuite::from_str_as(text, SuiteFormat::Toml).unwrap();
        let expected = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(suite.metadata.regr_suite_creation_date, expected);
    }

    #[test]
    fn test_local_toml_datetime_rejected() {
        let text = r#"
[metadata]
ontology = "UMLS"
ontology_version = "2023AA"
regr_suite_creation_date = 2024-01-01T00:00:00
"#;
        assert!(RegressionSuite::from_str_as(text, SuiteFormat::Toml).is_err());
    }
}
