//! Remote data gateway.
//!
//! [`RemoteGateway`] is the interface the profile screen consumes: identity
//! lookup, user-field reads and writes, dependent-row deletes, blob storage
//! and identity deletion. [`HttpGateway`] implements it against a
//! Supabase-compatible REST backend.

pub(crate) mod auth_user;
pub(crate) mod error;
pub(crate) mod gateway;
pub(crate) mod http;
pub(crate) mod upload_options;


pub use auth_user::AuthUser;
pub use error::{GatewayError, Result as GatewayResult};
pub use gateway::RemoteGateway;
pub use http::http_gateway::HttpGateway;
pub use upload_options::UploadOptions;
