use anyhow::Result;
use clap::Parser;
use menucraft_core::export::{default_export_file_name, restaurants_csv};
use menucraft_core::{JsonFileStore, MenuStore};
use std::path::PathBuf;

/// Export the restaurant fleet as CSV
#[derive(Debug, Parser)]
pub struct ExportCommand {
    /// Storage directory
    #[arg(long, value_name = "DIR", default_value = super::DEFAULT_STORE_DIR)]
    pub store: PathBuf,

    /// Output file (defaults to menucraft-restaurants-<date>.csv)
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

impl ExportCommand {
    pub fn execute(&self) -> Result<i32> {
        let store = JsonFileStore::new(&self.store);
        let admin = store.load_admin()?;

        let out = self.out.clone().unwrap_or_else(|| {
            PathBuf::from(default_export_file_name(
                chrono::Local::now().date_naive(),
            ))
        });

        std::fs::write(&out, restaurants_csv(&admin.restaurants))?;
        println!(
            "Exported {} restaurants to {}",
            admin.restaurants.len(),
            out.display()
        );
        Ok(0)
    }
}
