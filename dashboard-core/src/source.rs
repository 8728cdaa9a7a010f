use crate::{
    Config, GenerationFailure, WeatherSnapshot, config::DEFAULT_LATENCY_MS,
    source::mock::MockSource,
};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc, time::Duration};

pub mod mock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceId {
    Mock,
}

impl SourceId {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceId::Mock => "mock",
        }
    }

    pub const fn all() -> &'static [SourceId] {
        &[SourceId::Mock]
    }
}

impl std::fmt::Display for SourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for SourceId {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "mock" => Ok(SourceId::Mock),
            _ => Err(anyhow::anyhow!(
                "Unknown weather source '{value}'. Supported sources: mock."
            )),
        }
    }
}

/// Anything that can turn a location label into a weather snapshot.
///
/// The dashboard only talks to this trait, so a live feed can replace the sample generator
/// without touching consumers.
#[async_trait]
pub trait SnapshotSource: Send + Sync + Debug {
    async fn fetch_snapshot(&self, location: &str) -> Result<WeatherSnapshot, GenerationFailure>;
}

/// Construct the configured snapshot source.
pub fn source_from_config(config: &Config) -> anyhow::Result<Arc<dyn SnapshotSource>> {
    let id = config.source_id()?;
    let latency = Duration::from_millis(config.latency_ms.unwrap_or(DEFAULT_LATENCY_MS));

    let source: Arc<dyn SnapshotSource> = match id {
        SourceId::Mock => Arc::new(MockSource::new(latency)),
    };

    Ok(source)
}
