//! Business logic services for the EcoClime server

pub mod alerts;
pub mod chat;
pub mod crops;
pub mod dashboard;
pub mod disease;
pub mod geocoding;
pub mod vegetation;
pub mod weather;

pub use alerts::AlertService;
pub use chat::ChatService;
pub use crops::CropService;
pub use dashboard::{DashboardService, DashboardView, MapPointView};
pub use disease::DiseaseService;
pub use geocoding::{GeocodingService, ReverseAddress};
pub use vegetation::VegetationService;
pub use weather::WeatherService;
