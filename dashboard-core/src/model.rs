use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Weather category shown next to every reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
    Thunderstorm,
    Snow,
}

impl Condition {
    pub const ALL: [Condition; 6] = [
        Condition::Sunny,
        Condition::PartlyCloudy,
        Condition::Cloudy,
        Condition::Rainy,
        Condition::Thunderstorm,
        Condition::Snow,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::PartlyCloudy => "Partly Cloudy",
            Condition::Cloudy => "Cloudy",
            Condition::Rainy => "Rainy",
            Condition::Thunderstorm => "Thunderstorm",
            Condition::Snow => "Snow",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Condition::Sunny => "☀️",
            Condition::PartlyCloudy => "⛅",
            Condition::Cloudy => "☁️",
            Condition::Rainy => "🌧️",
            Condition::Thunderstorm => "⛈️",
            Condition::Snow => "❄️",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Alert urgency, ordered from least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Moderate,
    High,
    Severe,
}

/// Banner colour used to draw an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Yellow,
    Orange,
    Red,
}

/// Icon drawn in front of an alert title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertIcon {
    Info,
    AlertCircle,
    WarningTriangle,
}

impl AlertIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            AlertIcon::Info => "ℹ",
            AlertIcon::AlertCircle => "●",
            AlertIcon::WarningTriangle => "▲",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityStyle {
    pub accent: Accent,
    pub icon: AlertIcon,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Moderate,
        Severity::High,
        Severity::Severe,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::High => "high",
            Severity::Severe => "severe",
        }
    }

    /// Presentation attributes for an alert banner of this severity.
    pub fn style(&self) -> SeverityStyle {
        match self {
            Severity::Severe => SeverityStyle {
                accent: Accent::Red,
                icon: AlertIcon::WarningTriangle,
            },
            Severity::High => SeverityStyle {
                accent: Accent::Orange,
                icon: AlertIcon::AlertCircle,
            },
            Severity::Moderate => SeverityStyle {
                accent: Accent::Yellow,
                icon: AlertIcon::WarningTriangle,
            },
            Severity::Low => SeverityStyle {
                accent: Accent::Blue,
                icon: AlertIcon::Info,
            },
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub location: String,
    pub temperature: i32,
    pub feels_like: i32,
    pub condition: Condition,
    pub humidity_pct: u8,
    pub wind_speed_mph: u8,
    pub pressure_mb: u16,
    pub visibility_mi: u8,
    pub uv_index: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub high: i32,
    pub low: i32,
    pub condition: Condition,
    pub precipitation_pct: u8,
    pub humidity_pct: u8,
    pub wind_speed_mph: u8,
}

impl DailyForecast {
    pub fn date_label(&self) -> String {
        self.date.format("%-m/%-d/%Y").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecast {
    /// Hour of day, 0 through 23.
    pub hour: u8,
    pub temperature: i32,
    pub condition: Condition,
    pub precipitation_pct: u8,
}

impl HourlyForecast {
    pub fn label(&self) -> String {
        format!("{}:00", self.hour)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherAlert {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub expires: DateTime<Utc>,
}

/// One complete weather bundle for a location.
///
/// Snapshots are never edited in place: every search or refresh produces a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
    /// Five days, tomorrow first.
    pub forecast: Vec<DailyForecast>,
    /// Hours 0 through 23, in order.
    pub hourly: Vec<HourlyForecast>,
    pub alerts: Vec<WeatherAlert>,
    pub generated_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    pub fn location(&self) -> &str {
        &self.current.location
    }
}
