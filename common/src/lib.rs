//! # Pregame Common
//!
//! Shared building blocks for the `pregame` workspace.
//!
//! * **[`network`]**: hardware addresses, vendor prefixes and their validation.
//! * **[`config`]**: the immutable run configuration.
//! * **[`error`]**: the error taxonomy shared by every crate.
//! * **[`system`]**, **[`operator`]**, **[`events`]**, **[`vendors`]**: the traits the
//!   core talks through. Implementations live in `pregame-core` and `pregame-cli`.

pub mod config;
pub mod error;
pub mod events;
pub mod log;
pub mod network;
pub mod operator;
pub mod system;
pub mod vendors;

#[doc(hidden)]
pub use tracing;
