//! State management
//!
//! Global application state and the mirrored API snapshot types.

pub mod global;

pub use global::{provide_global_state, GlobalState};
