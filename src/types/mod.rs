//! Core data types.

pub mod cursor;
pub mod identifier;
pub mod options;
pub mod response;
mod timestamp;
pub mod tweet;
pub mod user;

pub use cursor::{Cursor, PageRequest};
pub use identifier::{EntityRef, UserIdentifier};
pub use options::{Options, ParamValue};
pub use response::Response;
pub use tweet::Tweet;
pub use user::User;
