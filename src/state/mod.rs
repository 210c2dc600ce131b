//! Session state for the resume screen
//!
//! - `RequestSlot`: last-initiated-wins tracking for one request target
//! - `SessionStore`: resumes, selections, pending upload and the error slot

mod request_slot;
mod store;

pub use request_slot::{RequestSlot, RequestToken};
pub use store::{Applied, SessionStore};
