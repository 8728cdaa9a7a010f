use async_trait::async_trait;
use std::time::Duration;

use crate::{GenerationFailure, WeatherSnapshot, generator};

use super::SnapshotSource;

/// Sample-data source that waits out a simulated network delay before generating.
#[derive(Debug, Clone)]
pub struct MockSource {
    latency: Duration,
    generate: fn(&str) -> WeatherSnapshot,
}

impl MockSource {
    pub fn new(latency: Duration) -> Self {
        Self::with_generator(latency, generator::generate_snapshot)
    }

    /// Source that builds snapshots with `generate` instead of the sample generator.
    pub fn with_generator(latency: Duration, generate: fn(&str) -> WeatherSnapshot) -> Self {
        Self { latency, generate }
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::DEFAULT_LATENCY_MS))
    }
}

#[async_trait]
impl SnapshotSource for MockSource {
    async fn fetch_snapshot(&self, location: &str) -> Result<WeatherSnapshot, GenerationFailure> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let label = location.to_owned();
        let generate = self.generate;
        // A panic inside the generator surfaces as a JoinError rather than unwinding the caller.
        tokio::task::spawn_blocking(move || generate(&label))
            .await
            .map_err(|err| GenerationFailure::new(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Phase, StaticGeolocator, WeatherDashboard, dashboard::FETCH_ERROR_MESSAGE,
    };
    use std::sync::Arc;
    use tokio::time::Instant;

    fn faulty_generator(_location: &str) -> WeatherSnapshot {
        panic!("sample generator fault");
    }

    #[tokio::test]
    async fn fetch_labels_snapshot_with_location() {
        let source = MockSource::new(Duration::ZERO);
        let snap = source.fetch_snapshot("Lisbon").await.unwrap();
        assert_eq!(snap.location(), "Lisbon");
        assert_eq!(snap.forecast.len(), 5);
        assert_eq!(snap.hourly.len(), 24);
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_waits_for_latency() {
        let source = MockSource::default();

        let started = Instant::now();
        source.fetch_snapshot("Oslo").await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(1));
    }

    #[tokio::test]
    async fn generator_panic_becomes_generation_failure() {
        let source = MockSource::with_generator(Duration::ZERO, faulty_generator);
        let err = source.fetch_snapshot("Oslo").await.unwrap_err();
        assert!(err.to_string().contains("weather generation failed"));
    }

    #[tokio::test]
    async fn generator_panic_puts_dashboard_in_error_phase() {
        let source = Arc::new(MockSource::with_generator(Duration::ZERO, faulty_generator));
        let dashboard =
            WeatherDashboard::new(source, Arc::new(StaticGeolocator::denied()), "New York, NY");

        dashboard.search_location("Oslo").await;

        let state = dashboard.state();
        assert_eq!(state.phase, Phase::Error);
        assert_eq!(state.error_message.as_deref(), Some(FETCH_ERROR_MESSAGE));
        assert!(state.snapshot.is_none());
    }
}
