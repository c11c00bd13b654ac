//! Parameter Management Module
//!
//! Normalizes caller input into the options bag sent to the transport:
//! - Identifier resolution (`merge_user`, `merge_users`)
//! - Positional argument handling (`extract_options`, `UserArgs`, `IdArgs`)

pub mod args;
pub mod merge;

pub use args::*;
pub use merge::*;
