//! External API integrations

pub mod assistant;
pub mod companion;
pub mod nominatim;
pub mod weather;

pub use assistant::AssistantClient;
pub use companion::CompanionClient;
pub use nominatim::NominatimClient;
pub use weather::{ResolvedPlace, WeatherClient};
