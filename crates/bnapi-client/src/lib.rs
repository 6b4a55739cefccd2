//! Battle.net Game Data API gateway client
//!
//! This crate handles the authenticated plumbing shared by every Game Data
//! endpoint: OAuth2 client-credentials token acquisition, region-to-host
//! resolution, namespaced and localized query construction, and a one-shot
//! retry when the API answers with HTTP 429.
//!
//! Typed per-endpoint accessors are deliberately not part of this crate;
//! they call [`BnapiClient::get`] (or [`BnapiClient::get_as`]) with a
//! service path and query parameters and receive parsed JSON back.
//!
//! # Example
//!
//! ```no_run
//! use bnapi_client::{BnapiClient, Locale, Region};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = BnapiClient::new()?;
//!     client
//!         .authenticate("client-key", "client-secret", Region::EU, Locale::EnGb)
//!         .await?;
//!
//!     let token_index = client
//!         .get("data/wow/token/index", &[("namespace", "dynamic")])
//!         .await?;
//!     println!("{token_index}");
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod http;
pub mod locale;
pub mod region;
pub mod session;

pub use error::{Error, Result};
pub use http::BnapiClient;
pub use locale::Locale;
pub use region::{Namespace, Region};
pub use session::Session;
