//! # Botforge - Messenger Chatbot Workflow Generator
//!
//! **Botforge** turns a handful of Facebook Messenger chatbot settings (verification
//! token, page access token, webhook path, default reply, keyword routes) into a
//! ready-to-import [n8n](https://n8n.io) workflow document: a JSON graph of seven
//! nodes wiring webhook intake, token verification, keyword matching, and the
//! outbound Graph API reply call.
//!
//! Botforge is purely a templating tool. It never runs a server, never calls the
//! Messenger platform, and never executes the workflow it emits - the generated
//! document only *describes* the pipeline for an external n8n instance.
//!
//! ## Core Workflow
//!
//! 1.  **Collect Settings**: Fill a [`BotSettings`](form::BotSettings) value, either
//!     programmatically or from a saved JSON file.
//! 2.  **Parse Routes**: Turn the freeform `phrase => reply` text into an ordered
//!     route list with [`parse_routes`](routes::parse_routes). Malformed lines are
//!     dropped, never reported.
//! 3.  **Build**: Hand both to the [`WorkflowBuilder`](workflow::WorkflowBuilder).
//!     Every build produces a fresh document with new identifiers and timestamps,
//!     but an otherwise identical node/connection graph for identical inputs.
//! 4.  **Export**: Serialize with [`export::to_pretty_json`] for display, or write
//!     a named file with [`export::write_workflow_file`].
//!
//! The [`Simulator`](simulator::Simulator) mirrors the classification script that
//! the builder embeds into the Code node, so the reply routing contract can be
//! exercised without importing the document anywhere.
//!
//! ## Quick Start
//!
//! ```rust
//! use botforge::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let settings = BotSettings {
//!         automation_name: "Support Bot".to_string(),
//!         verify_token: "my-shared-secret".to_string(),
//!         page_access_token: "EAAG...".to_string(),
//!         ..Default::default()
//!     };
//!
//!     let routes = parse_routes("hours => We are open 9 to 5\nrefund => Refunds take 3 days");
//!
//!     let document = WorkflowBuilder::new(settings, routes).build();
//!     let json = to_pretty_json(&document)?;
//!     println!("{json}");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod export;
pub mod form;
pub mod prelude;
pub mod routes;
pub mod simulator;
pub mod workflow;
