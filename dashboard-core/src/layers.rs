/// Overlay shown on the weather map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MapLayer {
    #[default]
    Temperature,
    Precipitation,
    Clouds,
    Wind,
}

impl MapLayer {
    pub const ALL: [MapLayer; 4] = [
        MapLayer::Temperature,
        MapLayer::Precipitation,
        MapLayer::Clouds,
        MapLayer::Wind,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MapLayer::Temperature => "temperature",
            MapLayer::Precipitation => "precipitation",
            MapLayer::Clouds => "clouds",
            MapLayer::Wind => "wind",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MapLayer::Temperature => "Temperature",
            MapLayer::Precipitation => "Precipitation",
            MapLayer::Clouds => "Cloud Cover",
            MapLayer::Wind => "Wind Speed",
        }
    }
}

impl std::fmt::Display for MapLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for MapLayer {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        MapLayer::ALL
            .into_iter()
            .find(|layer| layer.as_str() == lower)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown map layer '{value}'. Supported layers: temperature, precipitation, clouds, wind."
                )
            })
    }
}
