//! Text panels drawn from the provider state.
//!
//! Every function here is a pure `state -> String` transformation so the CLI can redraw on
//! each state change and tests can inspect the output.

use std::fmt::Write;

use chrono::{DateTime, Local, Utc};
use dashboard_core::{
    MapLayer, Phase, ProviderState, WeatherAlert, WeatherSnapshot,
    analytics::{quick_stats, temperature_chart},
    model::Accent,
};

const CHART_WIDTH: f64 = 30.0;
const RAIN_WIDTH: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForecastTab {
    #[default]
    Daily,
    Hourly,
}

impl ForecastTab {
    pub fn toggled(self) -> Self {
        match self {
            ForecastTab::Daily => ForecastTab::Hourly,
            ForecastTab::Hourly => ForecastTab::Daily,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ForecastTab::Daily => "5-Day Forecast",
            ForecastTab::Hourly => "24-Hour Forecast",
        }
    }
}

pub fn header(state: &ProviderState) -> String {
    let location = state.location().unwrap_or("-");
    let status = match state.phase {
        Phase::Loading => "loading...",
        Phase::Ready => "up to date",
        Phase::Error => "error",
    };

    let mut out = format!("== Weather Dashboard | {location} | {status}");
    if let Some(coords) = state.coordinates {
        let _ = write!(out, " | {:.2}, {:.2}", coords.lat, coords.lng);
    }
    out.push('\n');
    out
}

pub fn current(state: &ProviderState) -> String {
    if state.phase == Phase::Error {
        return failed_to_load(state);
    }
    let Some(snapshot) = ready_snapshot(state) else {
        return "Loading current conditions...\n".to_string();
    };
    let c = &snapshot.current;

    let mut out = String::new();
    let _ = writeln!(out, "-- Current Conditions: {}", c.location);
    let _ = writeln!(out, "   {} {}°F  {}", c.condition.icon(), c.temperature, c.condition);
    let metrics = [
        ("Feels Like", format!("{}°F", c.feels_like)),
        ("Humidity", format!("{}%", c.humidity_pct)),
        ("Wind Speed", format!("{} mph", c.wind_speed_mph)),
        ("Pressure", format!("{} mb", c.pressure_mb)),
        ("Visibility", format!("{} mi", c.visibility_mi)),
        ("UV Index", c.uv_index.to_string()),
    ];
    for (label, value) in metrics {
        let _ = writeln!(out, "   {label:<11} {value}");
    }
    out
}

pub fn forecast(state: &ProviderState, tab: ForecastTab) -> String {
    if state.phase == Phase::Error {
        return failed_to_load(state);
    }
    let Some(snapshot) = ready_snapshot(state) else {
        return "Loading forecast...\n".to_string();
    };

    let mut out = String::new();
    let _ = writeln!(out, "-- {} (toggle: {})", tab.title(), tab.toggled().title());
    match tab {
        ForecastTab::Daily => {
            for day in &snapshot.forecast {
                let _ = writeln!(
                    out,
                    "   {:<11} {} {:<14} H {:>3}°F  L {:>3}°F  rain {:>2}%  hum {:>2}%  wind {:>2} mph",
                    day.date_label(),
                    day.condition.icon(),
                    day.condition.label(),
                    day.high,
                    day.low,
                    day.precipitation_pct,
                    day.humidity_pct,
                    day.wind_speed_mph,
                );
            }
        }
        ForecastTab::Hourly => {
            for hour in &snapshot.hourly {
                let _ = writeln!(
                    out,
                    "   {:>5} {} {:<14} {:>3}°F  rain {:>2}%",
                    hour.label(),
                    hour.condition.icon(),
                    hour.condition.label(),
                    hour.temperature,
                    hour.precipitation_pct,
                );
            }
        }
    }
    out
}

/// Alert banners; empty when there is nothing to show.
pub fn alerts(state: &ProviderState, color: bool) -> String {
    let Some(snapshot) = state.snapshot.as_deref() else {
        return String::new();
    };

    snapshot
        .alerts
        .iter()
        .map(|alert| alert_banner(alert, color))
        .collect()
}

fn alert_banner(alert: &WeatherAlert, color: bool) -> String {
    let style = alert.severity.style();
    let expires: DateTime<Local> = alert.expires.with_timezone(&Local);
    let title = format!(
        "{} [{}] {}",
        style.icon.glyph(),
        alert.severity.as_str().to_uppercase(),
        alert.title
    );
    let title = if color { paint(&title, style.accent) } else { title };

    format!(
        "{title}\n   {}\n   Expires: {}\n",
        alert.description,
        expires.format("%Y-%m-%d %H:%M")
    )
}

fn paint(text: &str, accent: Accent) -> String {
    let code = match accent {
        Accent::Blue => "34",
        Accent::Yellow => "33",
        Accent::Orange => "38;5;208",
        Accent::Red => "31",
    };
    format!("\x1b[{code}m{text}\x1b[0m")
}

pub fn analytics(state: &ProviderState) -> String {
    let Some(snapshot) = ready_snapshot(state) else {
        return "Loading analytics...\n".to_string();
    };

    let mut out = String::from("-- Analytics\n");
    if let Some(stats) = quick_stats(snapshot) {
        let _ = writeln!(out, "   Avg Temp     {}°F", stats.avg_temperature);
        let _ = writeln!(out, "   Rain Chance  {}%", stats.max_precipitation);
    }
    let _ = writeln!(out, "   Temperature & precipitation, next 12 hours:");
    for point in temperature_chart(snapshot) {
        let temp_bar = "#".repeat((point.height * CHART_WIDTH).round() as usize);
        let rain_bar =
            "~".repeat((f64::from(point.precipitation_pct) / 100.0 * RAIN_WIDTH).round() as usize);
        let _ = writeln!(
            out,
            "   {:>5} {:>3}°F {:<width$} {:<rain$} {:>2}%",
            point.label,
            point.temperature,
            temp_bar,
            rain_bar,
            point.precipitation_pct,
            width = CHART_WIDTH as usize,
            rain = RAIN_WIDTH as usize,
        );
    }
    out
}

pub fn map(layer: MapLayer, updated: DateTime<Utc>) -> String {
    let mut out = String::from("-- Weather Map\n   Layers:");
    for candidate in MapLayer::ALL {
        if candidate == layer {
            let _ = write!(out, " [{}]", candidate.label());
        } else {
            let _ = write!(out, " {}", candidate.label());
        }
    }
    let _ = writeln!(
        out,
        "\n   Showing {} data for your region",
        layer.label().to_lowercase()
    );
    let _ = writeln!(
        out,
        "   Last updated: {}",
        updated.with_timezone(&Local).format("%H:%M:%S")
    );
    out
}

/// Every panel, in dashboard order.
pub fn dashboard(state: &ProviderState, tab: ForecastTab, layer: MapLayer, color: bool) -> String {
    let updated = state
        .snapshot
        .as_deref()
        .map(|s| s.generated_at)
        .unwrap_or_else(Utc::now);

    [
        header(state),
        alerts(state, color),
        current(state),
        forecast(state, tab),
        map(layer, updated),
        analytics(state),
    ]
    .into_iter()
    .filter(|panel| !panel.is_empty())
    .collect::<Vec<_>>()
    .join("\n")
}

/// The snapshot, unless a fetch cycle is still running.
fn ready_snapshot(state: &ProviderState) -> Option<&WeatherSnapshot> {
    state.snapshot.as_deref().filter(|_| !state.is_loading())
}

fn failed_to_load(state: &ProviderState) -> String {
    let message = state
        .error_message
        .as_deref()
        .unwrap_or("Failed to load weather data");
    format!("{message}. Try searching again or refreshing.\n")
}
