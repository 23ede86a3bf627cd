//! Client for the [Sberbank ID] identity flow, an OAuth 2.0 profile.
//!
//! The flow is three requests issued in sequence by the same
//! [`SberbankIdClient`]:
//!
//! 1. [`SberbankIdClient::auth_request`] posts the user credentials to the
//!    authorization endpoint and extracts the authorization [`Code`] from the
//!    `Location` header of the response.
//! 2. [`SberbankIdClient::get_token`] exchanges the code for a
//!    [`TokenResponse`](endpoints::token::TokenResponse).
//! 3. [`SberbankIdClient::get_personal_data`] fetches the user's
//!    [`PersonData`](endpoints::userinfo::PersonData).
//!
//! # Modules
//!
//! - [`client`]: The client, its credentials and error types.
//! - [`config`]: Client configuration and environment selection.
//! - [`endpoints`]: Request building and response decoding per endpoint.
//! - [`transport`]: HTTP transport layer and content type encoding.
//! - [`util`]: Query string and random identifier helpers.
//!
//! Validated string types ([`AccessToken`], [`ClientId`], [`Code`],
//! [`Nonce`], [`State`]) are re-exported at the crate root.
//!
//! [Sberbank ID]: https://developer.sberbank.ru/doc/v1/sberbank-id/info
#[cfg(feature = "reqwest")]
pub use reqwest;

pub use http;

pub mod client;
pub mod config;
pub mod endpoints;
pub mod transport;
mod types;
pub mod util;

pub use client::{Credentials, Error, Result, SberbankIdClient};
pub use config::{Config, Endpoint, Environment, env_url};
pub use types::*;
