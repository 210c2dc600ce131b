//! Resume Client - client core for a resume analysis service
//!
//! Validates résumé files, uploads them, lists upload history and fetches
//! analysed detail records, with every failure classified into a single
//! user-facing error condition.
//!
//! - [`validator`]: local format and size checks
//! - [`error`]: error taxonomy and the failure classifier
//! - [`gateway`]: the REST API client
//! - [`state`] and [`app`]: session store and view controller
//! - [`view_state`]: snapshots and display helpers for rendering

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod state;
pub mod traits;
pub mod validator;
pub mod view_state;

pub use app::{SessionMessage, Tab, ViewController};
pub use config::ClientConfig;
pub use error::{ErrorCondition, ResumeError, RetryAction};
pub use gateway::ResumeGateway;
