//! HBnB: in-memory REST backend for users, places, amenities and reviews.

pub mod config;
pub mod doc;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use doc::ApiDoc;
pub use error::{AppError, ConfigError, FacadeError};
pub use routes::{api_routes, app, common_routes};
pub use service::Facade;
pub use state::AppState;
