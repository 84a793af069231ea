//! Windowed trend comparison over a daily series.

use serde::Serialize;

use socint_core::TimeSeriesPoint;

/// Percent change of the most recent window over the one before it.
///
/// `Undefined` covers the cases the raw formula cannot express: a series
/// shorter than two windows, a zero window, or a zero previous mean. It is
/// a sentinel, never NaN or infinity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "percent", rename_all = "lowercase")]
pub enum Trend {
    Percent(f64),
    Undefined,
}

impl Trend {
    #[must_use]
    pub fn as_percent(self) -> Option<f64> {
        match self {
            Trend::Percent(p) => Some(p),
            Trend::Undefined => None,
        }
    }
}

/// Which series field a trend is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendField {
    Sentiment,
    Mentions,
    Engagement,
}

impl TrendField {
    #[allow(clippy::cast_precision_loss)] // mention counts stay far below 2^52
    fn value(self, point: &TimeSeriesPoint) -> f64 {
        match self {
            TrendField::Sentiment => point.sentiment,
            TrendField::Mentions => point.mentions as f64,
            TrendField::Engagement => point.engagement,
        }
    }
}

/// Compare the mean of the last `window` points against the mean of the
/// `window` points immediately preceding them:
/// `(recent - previous) / previous * 100`.
#[must_use]
pub fn trend(series: &[TimeSeriesPoint], field: TrendField, window: usize) -> Trend {
    if window == 0 || series.len() < window * 2 {
        return Trend::Undefined;
    }

    let recent = mean(&series[series.len() - window..], field);
    let previous = mean(&series[series.len() - window * 2..series.len() - window], field);

    if previous == 0.0 {
        return Trend::Undefined;
    }
    Trend::Percent((recent - previous) / previous * 100.0)
}

#[allow(clippy::cast_precision_loss)] // window sizes are tiny
fn mean(points: &[TimeSeriesPoint], field: TrendField) -> f64 {
    let sum: f64 = points.iter().map(|p| field.value(p)).sum();
    sum / points.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series_from_sentiments(values: &[f64]) -> Vec<TimeSeriesPoint> {
        let start = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, &sentiment)| TimeSeriesPoint {
                date: start + chrono::Duration::days(i64::try_from(i).unwrap()),
                sentiment,
                mentions: 100 + i as u64,
                engagement: 10.0,
                positive: 50.0,
                negative: 20.0,
                neutral: 30.0,
            })
            .collect()
    }

    #[test]
    fn rising_sentiment_yields_the_expected_percent() {
        // Prior 7 days average 60, last 7 average 66 => +10%.
        let mut values = vec![0.0]; // padding; only the last 14 matter
        values.extend(std::iter::repeat(60.0).take(7));
        values.extend(std::iter::repeat(66.0).take(7));
        let series = series_from_sentiments(&values);

        let result = trend(&series, TrendField::Sentiment, 7);
        let percent = result.as_percent().expect("trend should be defined");
        assert!(
            (percent - 10.0).abs() < 1e-9,
            "expected +10%, got {percent}"
        );
    }

    #[test]
    fn falling_series_yields_negative_percent() {
        let mut values: Vec<f64> = std::iter::repeat(80.0).take(7).collect();
        values.extend(std::iter::repeat(60.0).take(7));
        let series = series_from_sentiments(&values);
        let percent = trend(&series, TrendField::Sentiment, 7)
            .as_percent()
            .unwrap();
        assert!((percent + 25.0).abs() < 1e-9, "expected -25%, got {percent}");
    }

    #[test]
    fn short_series_is_undefined() {
        let series = series_from_sentiments(&[60.0; 13]);
        assert_eq!(trend(&series, TrendField::Sentiment, 7), Trend::Undefined);
    }

    #[test]
    fn zero_window_is_undefined() {
        let series = series_from_sentiments(&[60.0; 20]);
        assert_eq!(trend(&series, TrendField::Sentiment, 0), Trend::Undefined);
    }

    #[test]
    fn zero_previous_mean_is_undefined_not_infinite() {
        let mut values = vec![0.0; 7];
        values.extend(std::iter::repeat(50.0).take(7));
        let series = series_from_sentiments(&values);
        assert_eq!(trend(&series, TrendField::Sentiment, 7), Trend::Undefined);
    }

    #[test]
    fn mentions_field_uses_the_count_column() {
        let series = series_from_sentiments(&[50.0; 14]);
        // Mentions ramp linearly, so the trend is positive.
        let percent = trend(&series, TrendField::Mentions, 7)
            .as_percent()
            .unwrap();
        assert!(percent > 0.0, "expected positive mentions trend, got {percent}");
    }

    #[test]
    fn trend_serializes_with_a_kind_tag() {
        let json = serde_json::to_value(Trend::Percent(12.5)).unwrap();
        assert_eq!(json["kind"], "percent");
        assert_eq!(json["percent"], 12.5);

        let json = serde_json::to_value(Trend::Undefined).unwrap();
        assert_eq!(json["kind"], "undefined");
    }

    #[test]
    fn only_the_last_two_windows_are_considered() {
        // Earlier garbage must not affect the comparison.
        let mut values = vec![999.0, 1.0, 999.0];
        values.extend(std::iter::repeat(60.0).take(7));
        values.extend(std::iter::repeat(60.0).take(7));
        let series = series_from_sentiments(&values);
        let percent = trend(&series, TrendField::Sentiment, 7)
            .as_percent()
            .unwrap();
        assert!(percent.abs() < 1e-9, "expected flat trend, got {percent}");
    }
}
