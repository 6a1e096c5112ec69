#![doc(test(attr(deny(warnings))))]

//! Ranko Forms provides the edit-details form controller used when a user
//! renames, re-describes, re-categorises, or changes the privacy of a tier
//! list. Hosts own rendering; this crate owns the draft, validation, and the
//! commit-or-revert lifecycle.

pub mod config;
pub mod domain;
pub mod errors;
pub mod forms;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Ranko forms tracing initialized.");
    });
}
