use crate::models::{KeywordCount, RadarPoint, RatingPoint, SummaryPayload, TrendPoint};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentSlice {
    pub label: String,
    pub count: u64,
}

/// Chart-ready series for the analytics view.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub ratings: Vec<RatingPoint>,
    pub sentiment: Vec<SentimentSlice>,
    pub trend: Vec<TrendPoint>,
    pub keywords: Vec<KeywordCount>,
    pub radar: Vec<RadarPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Headline {
    pub total_responses: u64,
    pub dominant_sentiment: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SummaryViewModel {
    series: ChartSeries,
}

impl SummaryViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all series with the ones in `payload`.
    pub fn ingest(&mut self, payload: SummaryPayload) {
        let sentiment = payload
            .sentiment_distribution
            .into_iter()
            .map(|(label, count)| SentimentSlice {
                count: count_of(&count),
                label,
            })
            .collect();

        self.series = ChartSeries {
            ratings: payload.average_rating,
            sentiment,
            trend: payload.sentiment_trend,
            keywords: payload.common_words,
            radar: payload.radar_data,
        };
    }

    pub fn clear(&mut self) {
        self.series = ChartSeries::default();
    }

    pub fn series(&self) -> &ChartSeries {
        &self.series
    }

    /// Unique radar category names in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for point in &self.series.radar {
            if !seen.contains(&point.name) {
                seen.push(point.name.clone());
            }
        }
        seen
    }

    pub fn headline(&self) -> Headline {
        let total_responses = self
            .series
            .sentiment
            .iter()
            .fold(0u64, |acc, slice| acc.saturating_add(slice.count));

        let mut dominant: Option<&SentimentSlice> = None;
        for slice in &self.series.sentiment {
            if dominant.is_none_or(|best| slice.count > best.count) {
                dominant = Some(slice);
            }
        }

        Headline {
            total_responses,
            dominant_sentiment: dominant.map(|slice| slice.label.clone()),
        }
    }
}

fn count_of(value: &Value) -> u64 {
    value
        .as_u64()
        .or_else(|| value.as_f64().map(|count| count.max(0.0).round() as u64))
        .unwrap_or(0)
}
