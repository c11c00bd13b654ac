//! # chirp
//!
//! Response materialization and parameter normalization for a
//! social-networking platform's REST API.
//!
#![deny(unsafe_code)]

//! ## Features
//!
//! - **Identifier resolution**: numeric ids, handles, entity references and
//!   profile URLs all normalize into `user_id` / `screen_name` parameters.
//! - **Typed responses**: bodies become [`types::User`], [`types::Tweet`] or any
//!   type implementing [`traits::Entity`].
//! - **Parallel fetches**: one request per identifier, bounded concurrency,
//!   results in input order.
//! - **Cursor pagination**: pages that know how to fetch the page after them.
//! - **Pluggable transport**: a `reqwest` transport by default, any
//!   [`traits::Transport`] for tests or custom stacks.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chirp::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RestClient::builder()
//!         .config(ClientConfig::builder().max_concurrency(4).build())
//!         .build()?;
//!
//!     let users = client
//!         .parallel_user_objects_from_response(
//!             Method::GET,
//!             "/1.1/users/show.json",
//!             UserArgs::new().users(["alice", "bob"]),
//!         )
//!         .await?;
//!     for user in users {
//!         println!("{} ({})", user.screen_name, user.id);
//!     }
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod client;
pub mod config;
pub mod defaults;
pub mod error;
pub mod execution;
pub mod params;
pub mod session;
pub mod traits;
pub mod types;

pub use client::{RestClient, RestClientBuilder};
pub use config::ClientConfig;
pub use error::{RestError, Result};

/// Commonly used items.
pub mod prelude {
    pub use crate::client::{RestClient, RestClientBuilder};
    pub use crate::config::ClientConfig;
    pub use crate::error::{ForbiddenKind, RestError, handle_forbidden_error};
    pub use crate::params::{
        Arg, IdArg, IdArgs, UserArgs, extract_options, merge_user, merge_users,
    };
    pub use crate::session::Session;
    pub use crate::traits::{Entity, Transport};
    pub use crate::types::{
        Cursor, EntityRef, Options, ParamValue, Response, Tweet, User, UserIdentifier,
    };
    pub use reqwest::Method;
}
