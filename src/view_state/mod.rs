//! View state module for decoupling rendering from session state.
//!
//! A rendering layer reads a [`SessionViewState`] snapshot instead of the
//! controller or store, and uses the helpers in [`format`] for display text.
//!
//! ```text
//! ViewController --view_state()--> SessionViewState --> renderer
//! ```

pub mod format;
mod session_view;

pub use format::{format_rating, format_size_kb, format_timestamp, format_upload_date};
pub use session_view::{HistoryRow, SessionViewState};
