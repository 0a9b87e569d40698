use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::{fmt, str::FromStr};

/// One feedback entry as returned by the API. The field set is open; key
/// order is kept as received so the first record can drive column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackRecord(pub Map<String, Value>);

impl FeedbackRecord {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.0.values()
    }

    /// String form of a field, empty when absent or null.
    pub fn display_value(&self, field: &str) -> String {
        self.get(field).map(stringify).unwrap_or_default()
    }
}

impl<const N: usize> From<[(&str, Value); N]> for FeedbackRecord {
    fn from(entries: [(&str, Value); N]) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        )
    }
}

pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: Option<String>,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            direction: SortDirection::Descending,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingPoint {
    pub product: String,
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: String,
    pub sentiment: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RadarPoint {
    #[serde(alias = "category")]
    pub name: String,
    pub sentiment: Option<f64>,
}

/// Body of `/feedback-summary` and `/filtered-feedback`. Missing or null
/// sections deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub average_rating: Vec<RatingPoint>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sentiment_distribution: Map<String, Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sentiment_trend: Vec<TrendPoint>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub common_words: Vec<KeywordCount>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub radar_data: Vec<RadarPoint>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(rename = "start", default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(rename = "end", default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl FilterCriteria {
    /// Empty inputs mean "not provided"; anything else is passed on as typed.
    pub fn normalized(self) -> Self {
        fn keep(value: Option<String>) -> Option<String> {
            value.filter(|text| !text.is_empty())
        }

        Self {
            start_date: keep(self.start_date),
            end_date: keep(self.end_date),
            category: keep(self.category),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none() && self.category.is_none()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryKind {
    #[default]
    General,
    Actionable,
    Sentiment,
}

impl SummaryKind {
    pub const ALL: [SummaryKind; 3] = [Self::General, Self::Actionable, Self::Sentiment];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Actionable => "actionable",
            Self::Sentiment => "sentiment",
        }
    }
}

impl fmt::Display for SummaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummaryKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "general" => Ok(Self::General),
            "actionable" => Ok(Self::Actionable),
            "sentiment" => Ok(Self::Sentiment),
            other => Err(format!(
                "kind must be 'general', 'actionable' or 'sentiment', got '{other}'"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub text: String,
    pub kind: SummaryKind,
}

#[derive(Debug, Deserialize)]
pub struct SortRequest {
    pub field: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub term: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub kind: String,
}
