//! Domain models for the EcoClime platform

mod alert;
mod chat;
mod crop;
mod disease;
mod vegetation;
mod weather;

pub use alert::*;
pub use chat::*;
pub use crop::*;
pub use disease::*;
pub use vegetation::*;
pub use weather::*;
