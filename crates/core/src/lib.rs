pub mod auth;
pub mod export;
pub mod filter;
pub mod model;
pub mod resolver;
pub mod stats;
pub mod store;
pub mod validation;

pub use filter::{menu_sections, MenuFilter, VegFilter};
pub use model::{DashboardData, ResolvedPeriod, TimeWindow, WindowCategory};
pub use resolver::context::ResolutionRequest;
pub use resolver::engine::{resolve, resolve_period};
pub use store::{JsonFileStore, MenuStore, StoreError};
