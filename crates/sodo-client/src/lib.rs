//! Client for the Sodo solving service.
//!
//! The service owns the puzzle solution and the per-player session. This
//! crate exposes it through the [`SolverService`] trait and ships the blocking
//! HTTP implementation [`HttpService`].
//!
//! - [`protocol`]: JSON request/reply shapes and their conversion into
//!   `sodo_core` types.
//! - [`level`]: difficulty levels accepted by the bootstrap endpoint.
//! - [`service`]: the [`SolverService`] trait.
//! - [`http`]: [`HttpService`], built on a cookie-keeping blocking `reqwest` client.

pub mod error;
pub mod http;
pub mod level;
pub mod protocol;
pub mod service;

pub use self::{error::ServiceError, http::HttpService, level::Level, service::SolverService};
