//! Platform geolocation capability.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{Config, Coordinates, LocationError};

#[async_trait]
pub trait Geolocator: Send + Sync + Debug {
    async fn current_position(&self) -> Result<Coordinates, LocationError>;
}

/// Geolocator with a predetermined answer.
///
/// Terminal hosts have no position sensor, so the position comes from config (or tests).
#[derive(Debug, Clone)]
pub struct StaticGeolocator {
    outcome: Result<Coordinates, LocationError>,
}

impl StaticGeolocator {
    pub fn at(coordinates: Coordinates) -> Self {
        Self { outcome: Ok(coordinates) }
    }

    pub fn denied() -> Self {
        Self { outcome: Err(LocationError::PermissionDenied) }
    }

    pub fn unavailable() -> Self {
        Self { outcome: Err(LocationError::ServiceUnavailable) }
    }

    pub fn from_config(config: &Config) -> Self {
        match config.location {
            Some(coordinates) => Self::at(coordinates),
            None => Self::unavailable(),
        }
    }
}

#[async_trait]
impl Geolocator for StaticGeolocator {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        self.outcome
    }
}
