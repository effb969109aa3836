//! Persistence boundary.
//!
//! The browser original kept everything in local storage under a handful of
//! string keys; here that becomes a store trait plus a JSON-file
//! implementation, with pure mutation helpers that the dashboard operations
//! share regardless of backend.

pub mod json_store;
pub mod mutations;
pub mod seed;

pub use json_store::JsonFileStore;

use thiserror::Error;
use uuid::Uuid;

use crate::model::{AdminData, DashboardData};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("category '{id}' not found")]
    CategoryNotFound { id: Uuid },
    #[error("menu item '{id}' not found")]
    ItemNotFound { id: Uuid },
    #[error("time window '{id}' not found")]
    WindowNotFound { id: Uuid },
    #[error("stored data is corrupt: {message}")]
    Corrupt { message: String },
    #[error("store io failed: {0}")]
    Io(#[from] std::io::Error),
}

pub trait MenuStore {
    /// Load the dashboard blob, seeding defaults when nothing is stored yet.
    fn load_dashboard(&self) -> Result<DashboardData, StoreError>;
    fn save_dashboard(&self, data: &DashboardData) -> Result<(), StoreError>;
    fn load_admin(&self) -> Result<AdminData, StoreError>;
    fn save_admin(&self, data: &AdminData) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}
