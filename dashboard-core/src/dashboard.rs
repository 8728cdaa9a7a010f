//! The weather provider: owns the dashboard state and runs fetch cycles.
//!
//! One [`WeatherDashboard`] is built at start-up and shared (usually behind an `Arc`) with every
//! consumer. Consumers read [`ProviderState`] through [`WeatherDashboard::state`] or a
//! [`watch::Receiver`] from [`WeatherDashboard::subscribe`]; only the dashboard writes it.
//!
//! Each cycle moves the state to [`Phase::Loading`] and then to [`Phase::Ready`] or
//! [`Phase::Error`]. Overlapping cycles are not serialised: whichever finishes last wins.

use std::sync::Arc;
use tokio::sync::watch;

use crate::{
    Config, Coordinates, WeatherSnapshot,
    geolocation::{Geolocator, StaticGeolocator},
    source::{SnapshotSource, source_from_config},
};

/// Label used for snapshots fetched for the device position.
pub const GEOLOCATED_LABEL: &str = "Current Location";

/// Message shown to consumers when a cycle fails.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch weather data";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProviderState {
    pub snapshot: Option<Arc<WeatherSnapshot>>,
    pub phase: Phase,
    pub error_message: Option<String>,
    pub coordinates: Option<Coordinates>,
}

impl ProviderState {
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Location label of the current snapshot, if any.
    pub fn location(&self) -> Option<&str> {
        self.snapshot.as_deref().map(WeatherSnapshot::location)
    }
}

impl Default for ProviderState {
    fn default() -> Self {
        Self {
            snapshot: None,
            phase: Phase::Loading,
            error_message: None,
            coordinates: None,
        }
    }
}

#[derive(Debug)]
pub struct WeatherDashboard {
    source: Arc<dyn SnapshotSource>,
    geolocator: Arc<dyn Geolocator>,
    fallback_location: String,
    state: watch::Sender<ProviderState>,
}

impl WeatherDashboard {
    pub fn new(
        source: Arc<dyn SnapshotSource>,
        geolocator: Arc<dyn Geolocator>,
        fallback_location: impl Into<String>,
    ) -> Self {
        let (state, _) = watch::channel(ProviderState::default());

        Self {
            source,
            geolocator,
            fallback_location: fallback_location.into(),
            state,
        }
    }

    /// Build a dashboard wired to the configured source and position.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let source = source_from_config(config)?;
        let geolocator = Arc::new(StaticGeolocator::from_config(config));

        Ok(Self::new(source, geolocator, config.fallback_location()))
    }

    pub fn fallback_location(&self) -> &str {
        &self.fallback_location
    }

    /// Copy of the latest state.
    pub fn state(&self) -> ProviderState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<ProviderState> {
        self.state.subscribe()
    }

    /// Resolve the device position and load the first snapshot.
    ///
    /// A missing or denied position is not an error; the fallback location is used instead.
    pub async fn initialize(&self) {
        match self.geolocator.current_position().await {
            Ok(coordinates) => {
                tracing::debug!("Got location: {}, {}", coordinates.lat, coordinates.lng);
                self.state.send_modify(|s| s.coordinates = Some(coordinates));
                self.fetch(GEOLOCATED_LABEL).await;
            }
            Err(err) => {
                tracing::debug!("{err}; falling back to '{}'", self.fallback_location);
                self.fetch(&self.fallback_location).await;
            }
        }
    }

    /// Load a snapshot for `query`. Blank queries leave the state untouched.
    pub async fn search_location(&self, query: &str) {
        if query.trim().is_empty() {
            tracing::debug!("Ignoring blank location search");
            return;
        }

        self.fetch(query).await;
    }

    /// Reload the current location. Does nothing until a snapshot exists.
    pub async fn refresh_weather(&self) {
        let location = match self.state.borrow().location() {
            Some(location) => location.to_owned(),
            None => {
                tracing::debug!("Refresh requested before any snapshot; ignoring");
                return;
            }
        };

        self.fetch(&location).await;
    }

    async fn fetch(&self, location: &str) {
        tracing::info!("Fetching weather for '{location}'");
        self.state.send_modify(|s| {
            s.phase = Phase::Loading;
            s.error_message = None;
        });

        match self.source.fetch_snapshot(location).await {
            Ok(snapshot) => {
                tracing::info!(
                    "Weather ready for '{location}': {} ({}°F), {} alert(s)",
                    snapshot.current.condition,
                    snapshot.current.temperature,
                    snapshot.alerts.len(),
                );
                let snapshot = Arc::new(snapshot);
                self.state.send_modify(|s| {
                    s.snapshot = Some(snapshot);
                    s.phase = Phase::Ready;
                });
            }
            Err(err) => {
                tracing::error!("Weather fetch for '{location}' failed: {err}");
                self.state.send_modify(|s| {
                    s.phase = Phase::Error;
                    s.error_message = Some(FETCH_ERROR_MESSAGE.to_string());
                });
            }
        }
    }
}
