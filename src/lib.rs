//! Uniform response envelopes for axum APIs.
//!
//! [`ApiHelper`] builds success and error envelopes, turns `validator`
//! failures into per-field error details, stamps every error with a debug id
//! for log correlation and resolves messages through a [`Translator`].

pub mod controllers;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::helper::{ApiHelper, ErrorOptions, FieldFailures, FieldLabels, ValidationMessages};
pub use domain::link::{make_link, HypermediaRelation, Link};
pub use domain::response::{normalize_envelope, ApiResponse, ErrorDetail, ErrorKind, NamedError};
pub use error::{ApiError, ApiResult};
pub use infrastructure::i18n::{Catalogue, MessageParams, Translator};
pub use infrastructure::provider::register_api_helper;
