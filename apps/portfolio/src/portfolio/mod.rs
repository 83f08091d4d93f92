// Data store and the pure functions derived from it.
// Everything here is immutable once loaded; derived views are recomputed per request.

pub mod filter;
pub mod models;
pub mod store;
pub mod tags;

pub use filter::{filter_projects, ProjectFilter};
pub use models::{present, Portfolio, Project};
pub use tags::tag_set;
