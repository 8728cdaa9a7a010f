//! Figures derived from a snapshot for the analytics panel.

use crate::WeatherSnapshot;

/// Number of hourly points drawn on the temperature chart.
pub const CHART_HOURS: usize = 12;

const CHART_FLOOR: f64 = 40.0;
const CHART_SPAN: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickStats {
    pub avg_temperature: i32,
    pub max_precipitation: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub temperature: i32,
    pub precipitation_pct: u8,
    /// Temperature position on the chart, 0.0 (40°F or below) to 1.0 (90°F or above).
    pub height: f64,
}

/// Returns `None` when the snapshot carries no hourly data.
pub fn quick_stats(snapshot: &WeatherSnapshot) -> Option<QuickStats> {
    if snapshot.hourly.is_empty() {
        return None;
    }

    let total: i32 = snapshot.hourly.iter().map(|h| h.temperature).sum();
    let avg = f64::from(total) / snapshot.hourly.len() as f64;
    let max_precipitation = snapshot.hourly.iter().map(|h| h.precipitation_pct).max()?;

    Some(QuickStats {
        avg_temperature: avg.round() as i32,
        max_precipitation,
    })
}

pub fn temperature_chart(snapshot: &WeatherSnapshot) -> Vec<ChartPoint> {
    snapshot
        .hourly
        .iter()
        .take(CHART_HOURS)
        .map(|hour| ChartPoint {
            label: hour.label(),
            temperature: hour.temperature,
            precipitation_pct: hour.precipitation_pct,
            height: ((f64::from(hour.temperature) - CHART_FLOOR) / CHART_SPAN).clamp(0.0, 1.0),
        })
        .collect()
}
