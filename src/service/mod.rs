//! Facade and field validation over the in-memory store.

mod facade;
pub mod validation;
pub use facade::Facade;
