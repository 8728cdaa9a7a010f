use std::{
    future::Future,
    io::{IsTerminal, stdout},
};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use dashboard_core::{
    Config, Coordinates, MapLayer, Phase, WeatherDashboard, config::DEFAULT_LATENCY_MS,
};
use inquire::{Confirm, CustomType, InquireError, Select, Text};

use crate::render::{self, ForecastTab};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-dashboard", version, about = "Weather dashboard in your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the fallback location, device coordinates and simulated latency.
    Configure,

    /// Load weather once and print it.
    Show {
        /// Location to search for after start-up; if absent, show the device position or the fallback.
        #[arg(long)]
        location: Option<String>,

        /// Panel to print.
        #[arg(long, value_enum, default_value_t = View::All)]
        view: View,

        /// Map layer: temperature, precipitation, clouds or wind.
        #[arg(long, default_value = "temperature")]
        layer: String,

        /// Print the raw snapshot as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Interactive dashboard with search and refresh.
    Interactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum View {
    All,
    Current,
    Daily,
    Hourly,
    Alerts,
    Analytics,
    Map,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Search,
    Refresh,
    ToggleForecast,
    MapLayer,
    Quit,
}

impl MenuItem {
    const ALL: [MenuItem; 5] = [
        MenuItem::Search,
        MenuItem::Refresh,
        MenuItem::ToggleForecast,
        MenuItem::MapLayer,
        MenuItem::Quit,
    ];
}

impl std::fmt::Display for MenuItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            MenuItem::Search => "Search location",
            MenuItem::Refresh => "Refresh",
            MenuItem::ToggleForecast => "Switch forecast tab",
            MenuItem::MapLayer => "Change map layer",
            MenuItem::Quit => "Quit",
        })
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show {
                location,
                view,
                layer,
                json,
            } => {
                let layer = MapLayer::try_from(layer.as_str())?;
                show(location, view, layer, json).await
            }
            Command::Interactive => interactive().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let fallback = Text::new("Fallback location:")
        .with_default(config.fallback_location())
        .with_help_message("Shown when no device position is available")
        .prompt()?;
    config.set_fallback_location(&fallback);

    let share_position = Confirm::new("Report a device position?")
        .with_default(config.location.is_some())
        .prompt()?;
    config.location = if share_position {
        let lat = CustomType::<f64>::new("Latitude:")
            .with_error_message("Please enter a number")
            .prompt()?;
        let lng = CustomType::<f64>::new("Longitude:")
            .with_error_message("Please enter a number")
            .prompt()?;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            bail!("Coordinates out of range: {lat}, {lng}");
        }
        Some(Coordinates { lat, lng })
    } else {
        None
    };

    let latency = CustomType::<u64>::new("Simulated latency (ms):")
        .with_default(config.latency_ms.unwrap_or(DEFAULT_LATENCY_MS))
        .with_error_message("Please enter a whole number of milliseconds")
        .prompt()?;
    config.latency_ms = Some(latency);

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(
    location: Option<String>,
    view: View,
    layer: MapLayer,
    json: bool,
) -> anyhow::Result<()> {
    let config = Config::load()?;
    let dashboard = WeatherDashboard::from_config(&config)?;

    load_weather(&dashboard, location.as_deref()).await;

    let state = dashboard.state();
    if json {
        if state.phase == Phase::Error {
            bail!(
                "{}",
                state.error_message.as_deref().unwrap_or("Weather unavailable")
            );
        }
        let snapshot = state.snapshot.context("No weather data loaded")?;
        println!("{}", serde_json::to_string_pretty(&*snapshot)?);
        return Ok(());
    }

    let color = use_color();
    tracing::debug!("Rendering {view:?} view with {layer} layer");
    let out = match view {
        View::All => render::dashboard(&state, ForecastTab::Daily, layer, color),
        View::Current => render::current(&state),
        View::Daily => render::forecast(&state, ForecastTab::Daily),
        View::Hourly => render::forecast(&state, ForecastTab::Hourly),
        View::Alerts => {
            let banners = render::alerts(&state, color);
            if banners.is_empty() {
                "No active weather alerts.\n".to_string()
            } else {
                banners
            }
        }
        View::Analytics => render::analytics(&state),
        View::Map => {
            let updated = state
                .snapshot
                .as_deref()
                .map(|s| s.generated_at)
                .unwrap_or_else(chrono::Utc::now);
            render::map(layer, updated)
        }
    };
    print!("{out}");
    Ok(())
}

async fn interactive() -> anyhow::Result<()> {
    let config = Config::load()?;
    let dashboard = WeatherDashboard::from_config(&config)?;
    let color = use_color();
    let mut tab = ForecastTab::default();
    let mut layer = MapLayer::default();

    run_cycle(&dashboard, dashboard.initialize()).await;

    loop {
        println!("\n{}", render::dashboard(&dashboard.state(), tab, layer, color));

        let choice = match Select::new("What next?", MenuItem::ALL.to_vec()).prompt() {
            Ok(choice) => choice,
            Err(err) if is_cancel(&err) => break,
            Err(err) => return Err(err.into()),
        };

        match choice {
            MenuItem::Search => {
                let query = match Text::new("Search location:").prompt() {
                    Ok(query) => query,
                    Err(err) if is_cancel(&err) => continue,
                    Err(err) => return Err(err.into()),
                };
                if query.trim().is_empty() {
                    continue;
                }
                run_cycle(&dashboard, dashboard.search_location(&query)).await;
            }
            MenuItem::Refresh => run_cycle(&dashboard, dashboard.refresh_weather()).await,
            MenuItem::ToggleForecast => tab = tab.toggled(),
            MenuItem::MapLayer => {
                match Select::new("Map layer:", MapLayer::ALL.to_vec()).prompt() {
                    Ok(selected) => layer = selected,
                    Err(err) if is_cancel(&err) => continue,
                    Err(err) => return Err(err.into()),
                }
            }
            MenuItem::Quit => break,
        }
    }

    Ok(())
}

/// Start-up sequence: resolve the device position, then search for `location` if one was given.
async fn load_weather(dashboard: &WeatherDashboard, location: Option<&str>) {
    run_cycle(dashboard, dashboard.initialize()).await;

    if let Some(query) = location.filter(|q| !q.trim().is_empty()) {
        run_cycle(dashboard, dashboard.search_location(query)).await;
    }
}

/// Drive one dashboard action to completion, reporting the loading phase as it is entered.
async fn run_cycle(dashboard: &WeatherDashboard, action: impl Future<Output = ()>) {
    let mut rx = dashboard.subscribe();
    tokio::pin!(action);

    loop {
        tokio::select! {
            _ = &mut action => break,
            Ok(()) = rx.changed() => {
                if rx.borrow_and_update().is_loading() {
                    eprintln!("Loading weather data...");
                }
            }
        }
    }
}

fn is_cancel(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

fn use_color() -> bool {
    stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}
