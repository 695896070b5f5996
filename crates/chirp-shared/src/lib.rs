//! # Chirp Shared
//!
//! Wire types shared between clients and the server: the login exchange and
//! the standardized error body. Entity payloads come straight from the
//! domain types in `chirp-core`.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
