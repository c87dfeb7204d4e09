//! Chat front-end for hosted text-generation models.
//!
//! The library holds everything that does not need a window: the
//! conversation store, the response resolver with its fallback rules, and
//! the per-session state. The dioxus UI lives behind the `dioxus` feature.

pub mod ai;
pub mod config;
pub mod conversation;
pub mod error;
pub mod logging;
pub mod session;
pub mod theme;
pub mod types;

#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;

pub use error::{ChatError, ChatResult};
