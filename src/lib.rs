pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod telemetry;

pub use config::Config;
pub use domain::PointsError;
pub use services::PointsEngine;
