use anyhow::{bail, Result};
use clap::Parser;
use menucraft_core::resolver::clock::ClockTime;
use menucraft_core::resolver::diagnostics::ResolutionResult;
use menucraft_core::{resolve, JsonFileStore, MenuStore, ResolutionRequest};
use std::path::PathBuf;

/// Resolve the current menu period
#[derive(Debug, Parser)]
pub struct ResolveCommand {
    /// Time to resolve at, as HH:MM (defaults to the current local time)
    #[arg(long, value_name = "HH:MM")]
    pub at: Option<String>,

    /// Storage directory
    #[arg(long, value_name = "DIR", default_value = super::DEFAULT_STORE_DIR)]
    pub store: PathBuf,

    /// Output format (human, json)
    #[arg(long, value_name = "FORMAT", default_value = "human")]
    pub output: String,

    /// Show the per-window evaluation trail
    #[arg(short, long)]
    pub verbose: bool,
}

impl ResolveCommand {
    pub fn execute(&self) -> Result<i32> {
        let store = JsonFileStore::new(&self.store);
        let data = store.load_dashboard()?;

        let now = self
            .at
            .clone()
            .unwrap_or_else(|| ClockTime::now_local().to_string());
        let request = ResolutionRequest::for_restaurant(now, &data.restaurant);
        let result = resolve(&request);

        match self.output.to_ascii_lowercase().as_str() {
            "human" => self.report_human(&data.restaurant.name, &result),
            "json" => println!("{}", serde_json::to_string_pretty(&result)?),
            other => bail!("Unsupported output format: {other}. Use human or json."),
        }

        Ok(0)
    }

    fn report_human(&self, restaurant_name: &str, result: &ResolutionResult) {
        println!("Restaurant: {restaurant_name}");
        println!("Time:       {}", result.diagnostic.evaluated_at);
        println!("Period:     {}", result.period);

        if self.verbose {
            println!();
            println!("Windows:");
            for window in &result.diagnostic.evaluated_windows {
                let symbol = if window.matched { "✓" } else { "✗" };
                println!("  {symbol} {}: {}", window.category, window.reason);
            }
            if let Some(legacy) = &result.diagnostic.legacy {
                println!("Legacy timings: {}", legacy.reason);
            }
        }
    }
}
