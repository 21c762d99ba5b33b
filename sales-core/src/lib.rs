pub mod calculations;
pub mod catalog;
pub mod models;
pub mod session;

pub use catalog::{CatalogError, DeviceCatalog, builtin_revenue_classes, validate_revenue_classes};
pub use models::*;
pub use session::SalesSession;
