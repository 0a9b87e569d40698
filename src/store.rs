use crate::models::{FeedbackRecord, SortDirection, SortSpec, stringify};
use serde_json::Value;
use std::cmp::Ordering;

/// Feedback records from the last fetch plus the active sort.
#[derive(Debug, Clone, Default)]
pub struct FeedbackStore {
    records: Vec<FeedbackRecord>,
    sort: SortSpec,
}

impl FeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the held records. The sort spec survives a reload.
    pub fn load(&mut self, records: Vec<FeedbackRecord>) {
        self.records = records;
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[FeedbackRecord] {
        &self.records
    }

    pub fn sort_spec(&self) -> &SortSpec {
        &self.sort
    }

    /// Column names, taken from the first record.
    pub fn columns(&self) -> Vec<String> {
        self.records
            .first()
            .map(|record| record.fields().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Same field while ascending flips to descending; anything else starts
    /// ascending on `field`.
    pub fn request_sort(&mut self, field: &str) -> &SortSpec {
        let same_field = self.sort.field.as_deref() == Some(field);
        self.sort = if same_field && self.sort.direction == SortDirection::Ascending {
            SortSpec::descending(field)
        } else {
            SortSpec::ascending(field)
        };
        &self.sort
    }

    /// Records where any field contains `term`, case-insensitively, in fetch
    /// order. An empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<&FeedbackRecord> {
        search(&self.records, term)
    }

    /// Searched then sorted with the held spec.
    pub fn view(&self, term: &str) -> Vec<&FeedbackRecord> {
        let mut rows = self.search(term);
        sort(&mut rows, &self.sort);
        rows
    }
}

pub fn search<'a>(records: &'a [FeedbackRecord], term: &str) -> Vec<&'a FeedbackRecord> {
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| matches(record, &needle))
        .collect()
}

fn matches(record: &FeedbackRecord, needle: &str) -> bool {
    needle.is_empty()
        || record
            .values()
            .any(|value| stringify(value).to_lowercase().contains(needle))
}

/// Stable sort; equal keys keep their fetch order in both directions.
pub fn sort(rows: &mut [&FeedbackRecord], spec: &SortSpec) {
    let Some(field) = spec.field.as_deref() else {
        return;
    };

    match spec.direction {
        SortDirection::Ascending => {
            rows.sort_by(|a, b| SortKey::of(a, field).cmp(&SortKey::of(b, field)))
        }
        SortDirection::Descending => {
            rows.sort_by(|a, b| SortKey::of(b, field).cmp(&SortKey::of(a, field)))
        }
    }
}

/// Total order used for sorting: absent < numeric < text. Numbers and
/// numeric-looking strings compare by value; everything else compares by
/// its string form.
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Missing,
    Number(f64),
    Text(String),
}

impl SortKey {
    fn of(record: &FeedbackRecord, field: &str) -> Self {
        match record.get(field) {
            None | Some(Value::Null) => Self::Missing,
            Some(Value::Number(number)) => number
                .as_f64()
                .map(Self::Number)
                .unwrap_or_else(|| Self::Text(number.to_string())),
            Some(Value::String(text)) => match text.trim().parse::<f64>() {
                Ok(number) if number.is_finite() => Self::Number(number),
                _ => Self::Text(text.clone()),
            },
            Some(other) => Self::Text(stringify(other)),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Missing => 0,
            Self::Number(_) => 1,
            Self::Text(_) => 2,
        }
    }
}

impl Eq for SortKey {}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(product: &str, rating: Value) -> FeedbackRecord {
        FeedbackRecord::from([("product", json!(product)), ("rating", rating)])
    }

    fn products(rows: &[&FeedbackRecord]) -> Vec<String> {
        rows.iter().map(|row| row.display_value("product")).collect()
    }

    fn sample_store() -> FeedbackStore {
        let mut store = FeedbackStore::new();
        store.load(vec![
            record("A", json!(3)),
            record("B", json!(5)),
            record("C", json!(3)),
        ]);
        store
    }

    #[test]
    fn rating_sort_is_stable_and_toggles() {
        let mut store = sample_store();

        store.request_sort("rating");
        assert_eq!(products(&store.view("")), ["A", "C", "B"]);

        store.request_sort("rating");
        assert_eq!(store.sort_spec(), &SortSpec::descending("rating"));
        assert_eq!(products(&store.view("")), ["B", "A", "C"]);
    }

    #[test]
    fn request_sort_on_new_field_resets_to_ascending() {
        let mut store = sample_store();
        store.request_sort("rating");
        store.request_sort("rating");
        assert_eq!(store.request_sort("product"), &SortSpec::ascending("product"));

        // third click on the same field goes back to ascending
        store.request_sort("product");
        assert_eq!(store.request_sort("product"), &SortSpec::ascending("product"));
    }

    #[test]
    fn search_matches_any_field_case_insensitively() {
        let mut store = FeedbackStore::new();
        store.load(vec![
            FeedbackRecord::from([("product", json!("Widget")), ("comment", json!("Great value"))]),
            FeedbackRecord::from([("product", json!("Gadget")), ("comment", json!("Broke fast"))]),
            FeedbackRecord::from([("product", json!("Gizmo")), ("rating", json!(4.5))]),
        ]);

        assert_eq!(products(&store.search("GREAT")), ["Widget"]);
        assert_eq!(products(&store.search("4.5")), ["Gizmo"]);
        assert_eq!(store.search("").len(), 3);
        assert!(store.search("nothing like this").is_empty());
    }

    #[test]
    fn search_is_idempotent() {
        let store = sample_store();
        let once: Vec<FeedbackRecord> = store.search("a").into_iter().cloned().collect();
        let twice = search(&once, "a");
        assert_eq!(twice.len(), once.len());
        assert!(twice.iter().zip(&once).all(|(a, b)| *a == b));
    }

    #[test]
    fn search_then_sort_composes() {
        let mut store = sample_store();
        store.load(vec![
            record("Alpha", json!(2)),
            record("Beta", json!(9)),
            record("Gamma", json!(1)),
            record("Delta", json!(7)),
        ]);
        store.request_sort("rating");
        store.request_sort("rating");
        assert_eq!(products(&store.view("a")), ["Beta", "Delta", "Alpha", "Gamma"]);
        assert_eq!(products(&store.view("ta")), ["Beta", "Delta"]);
    }

    #[test]
    fn missing_field_sorts_lowest() {
        let mut store = FeedbackStore::new();
        store.load(vec![
            record("A", json!(2)),
            FeedbackRecord::from([("product", json!("B"))]),
            record("C", Value::Null),
            record("D", json!(1)),
        ]);
        store.request_sort("rating");
        assert_eq!(products(&store.view("")), ["B", "C", "D", "A"]);
    }

    #[test]
    fn numeric_strings_compare_by_value() {
        let mut store = FeedbackStore::new();
        store.load(vec![
            record("A", json!("10")),
            record("B", json!(9)),
            record("C", json!("n/a")),
            record("D", json!("2.5")),
        ]);
        store.request_sort("rating");
        assert_eq!(products(&store.view("")), ["D", "B", "A", "C"]);
    }

    #[test]
    fn descending_is_reverse_without_ties() {
        let mut store = FeedbackStore::new();
        store.load(vec![record("A", json!(2)), record("B", json!(3)), record("C", json!(1))]);
        store.request_sort("rating");
        let mut ascending = products(&store.view(""));
        store.request_sort("rating");
        ascending.reverse();
        assert_eq!(products(&store.view("")), ascending);
    }

    #[test]
    fn columns_follow_first_record() {
        let store = sample_store();
        assert_eq!(store.columns(), ["product", "rating"]);
        assert!(FeedbackStore::new().columns().is_empty());
    }
}
