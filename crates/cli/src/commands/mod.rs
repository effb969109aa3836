mod export;
mod menu;
mod resolve;
mod seed;
mod test;

pub use export::ExportCommand;
pub use menu::MenuCommand;
pub use resolve::ResolveCommand;
pub use seed::SeedCommand;
pub use test::TestCommand;

/// Default storage directory, the stand-in for the browser's local storage.
pub const DEFAULT_STORE_DIR: &str = ".menucraft";
