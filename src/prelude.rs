//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions from the botforge crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use botforge::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let settings = BotSettings::from_file("path/to/settings.json")?;
//! let routes = parse_routes(&std::fs::read_to_string("path/to/routes.txt")?);
//!
//! let document = WorkflowBuilder::new(settings, routes).build();
//! println!("{}", to_pretty_json(&document)?);
//! # Ok(())
//! # }
//! ```

// Core generation
pub use crate::form::{BotSettings, TIMEZONES, slugify};
pub use crate::routes::{KeywordRoute, parse_routes};
pub use crate::workflow::{WorkflowBuilder, WorkflowDocument, WorkflowNode};

// Export helpers
pub use crate::export::{export_filename, to_pretty_json, write_workflow_file};

// Routing simulation
pub use crate::simulator::{SimulationOutcome, Simulator};

// Error types
pub use crate::error::{ConfigError, ExportError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
