//! # recipeshare-http
//!
//! The request/response pipeline every RecipeShare API call goes through.
//!
//! ## Stages
//!
//! 1. [`AuthInjector`] attaches `Authorization: Bearer <token>` before transmission
//! 2. the [`Transport`] sends the request (reqwest in production)
//! 3. [`ResponseSanitizer`] strips markup from every string in a JSON success body
//! 4. [`ErrorNormalizer`] replaces any failure with a fixed, status-keyed message
//!
//! The order is fixed by [`Pipeline`]; [`ApiClient`] layers typed JSON
//! helpers on top of it.

pub mod client;
pub mod interceptor;
pub mod pipeline;
pub mod request;
pub mod response;
pub mod sanitize;
pub mod transport;

pub use client::ApiClient;
pub use interceptor::{AuthInjector, ErrorNormalizer, Interceptor, ResponseSanitizer};
pub use pipeline::Pipeline;
pub use request::ApiRequest;
pub use response::{ApiResponse, Outcome, RawFailure, ResponseBody};
pub use transport::{MockTransport, ReqwestTransport, Transport, TransportError};
