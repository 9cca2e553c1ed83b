//! # Pregame Core
//!
//! Address classification and the change workflow.
//!
//! * **[`classifier`]**: GOOD/BAD decisions over vendor prefixes.
//! * **[`generator`]**: replacement addresses on GOOD prefixes.
//! * **[`changer`]**: the down/change/up sequence with bounded retry.
//! * **[`orchestrator`]**: the end-to-end run.
//!
//! OS-facing implementations of the `pregame-common` traits live in [`system`],
//! [`events`] and [`vendors`].

pub mod changer;
pub mod classifier;
pub mod events;
pub mod generator;
pub mod orchestrator;
pub mod system;
pub mod vendors;
