//! # Chirp Core
//!
//! The domain layer of the Chirp API.
//! Entities, input validation, the storage port, and the services that own
//! the read-modify-write logic over the backing collections.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{DomainError, StoreError};
