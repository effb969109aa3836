use anyhow::Result;
use clap::Parser;
use menucraft_core::store::seed::{default_admin_data, default_dashboard_data};
use menucraft_core::{JsonFileStore, MenuStore};
use std::path::PathBuf;

/// Write seed data to the store
#[derive(Debug, Parser)]
pub struct SeedCommand {
    /// Storage directory
    #[arg(long, value_name = "DIR", default_value = super::DEFAULT_STORE_DIR)]
    pub store: PathBuf,

    /// Overwrite existing data
    #[arg(long)]
    pub force: bool,
}

impl SeedCommand {
    pub fn execute(&self) -> Result<i32> {
        let store = JsonFileStore::new(&self.store);

        if !self.force && store.dashboard_path().exists() {
            eprintln!(
                "Store already contains data: {}\nUse --force to overwrite.",
                store.dashboard_path().display()
            );
            return Ok(2);
        }

        store.save_dashboard(&default_dashboard_data())?;
        store.save_admin(&default_admin_data())?;

        println!("Seeded {}", store.dashboard_path().display());
        println!("Seeded {}", store.admin_path().display());
        Ok(0)
    }
}
