use anyhow::Result;
use clap::Parser;
use menucraft_core::filter::{menu_sections, MenuFilter, VegFilter};
use menucraft_core::resolver::clock::ClockTime;
use menucraft_core::{resolve_period, JsonFileStore, MenuStore, ResolutionRequest};
use std::path::PathBuf;

/// Show the menu visible at a given time
#[derive(Debug, Parser)]
pub struct MenuCommand {
    /// Time to resolve at, as HH:MM (defaults to the current local time)
    #[arg(long, value_name = "HH:MM")]
    pub at: Option<String>,

    /// Storage directory
    #[arg(long, value_name = "DIR", default_value = super::DEFAULT_STORE_DIR)]
    pub store: PathBuf,

    /// Only vegetarian items
    #[arg(long)]
    pub veg: bool,

    /// Only non-vegetarian items
    #[arg(long, conflicts_with = "veg")]
    pub nonveg: bool,

    /// Filter items by name or description
    #[arg(long, value_name = "TERM")]
    pub search: Option<String>,
}

impl MenuCommand {
    pub fn execute(&self) -> Result<i32> {
        let store = JsonFileStore::new(&self.store);
        let data = store.load_dashboard()?;

        let now = self
            .at
            .clone()
            .unwrap_or_else(|| ClockTime::now_local().to_string());
        let period = resolve_period(&ResolutionRequest::for_restaurant(
            now.clone(),
            &data.restaurant,
        ));

        println!("{} at {now}: {period}", data.restaurant.name);

        if !period.is_open() {
            println!("The restaurant is currently closed.");
            return Ok(0);
        }

        let mut filter = MenuFilter::for_period(period).with_veg(self.veg_filter());
        if let Some(term) = &self.search {
            filter = filter.with_search(term.clone());
        }

        for section in menu_sections(&data, &filter) {
            println!();
            println!("{}", section.category.name);
            for item in &section.items {
                let marker = if item.is_veg { "(veg)" } else { "(non-veg)" };
                println!("  {} {marker} - ₹{:.0}", item.name, item.price);
            }
        }

        Ok(0)
    }

    fn veg_filter(&self) -> VegFilter {
        if self.veg {
            VegFilter::Veg
        } else if self.nonveg {
            VegFilter::Nonveg
        } else {
            VegFilter::All
        }
    }
}
