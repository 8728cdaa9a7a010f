//! Core library for the weather dashboard.
//!
//! This crate defines:
//! - The weather snapshot model (current conditions, forecasts, alerts)
//! - The sample-data generator and the snapshot-source abstraction over it
//! - The weather provider state machine that consumers read from
//! - Configuration, geolocation and analytics helpers
//!
//! It is used by `dashboard-cli`, but any front end can drive a [`WeatherDashboard`].

pub mod analytics;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod generator;
pub mod geolocation;
pub mod layers;
pub mod model;
pub mod source;

pub use config::Config;
pub use dashboard::{Phase, ProviderState, WeatherDashboard};
pub use error::{GenerationFailure, LocationError};
pub use geolocation::{Geolocator, StaticGeolocator};
pub use layers::MapLayer;
pub use model::{
    Condition, Coordinates, CurrentConditions, DailyForecast, HourlyForecast, Severity,
    WeatherAlert, WeatherSnapshot,
};
pub use source::{SnapshotSource, SourceId};
