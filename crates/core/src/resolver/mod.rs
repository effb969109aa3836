//! Time-slot resolution engine.
//!
//! This module maps the current wall-clock time and a restaurant's configured
//! time windows (or its legacy morning/evening timing record) to the single
//! period the customer menu shows: morning, evening, or closed.
//!
//! # Example
//!
//! ```
//! use menucraft_core::model::{ResolvedPeriod, TimeWindow, WindowCategory};
//! use menucraft_core::resolver::context::ResolutionRequest;
//! use menucraft_core::resolver::engine::resolve;
//!
//! let request = ResolutionRequest::at("20:00")
//!     .with_windows(vec![TimeWindow::new(WindowCategory::Dinner, "19:00", "23:00")]);
//! let result = resolve(&request);
//! assert_eq!(result.period, ResolvedPeriod::Evening);
//! ```
pub mod clock;
pub mod context;
pub mod diagnostics;
pub mod engine;
