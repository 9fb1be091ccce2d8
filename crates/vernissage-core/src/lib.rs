//! Core domain model for vernissage.
//!
//! This crate defines the `Exhibition` record, the artwork list operations
//! it supports, and the date parsing used when reading exhibition dates
//! from text.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod date;
pub mod error;
pub mod model;

pub use error::{Error, Result};
pub use model::Exhibition;
