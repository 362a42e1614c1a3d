//! Core components of the `image-charts` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The [`ImageCharts`] connection settings and their builder.
//! - The primary [`IcError`] type.
//! - Wire types for the API's error headers and the blocking network layer.

/// The connection settings (`ImageCharts`) and their builder.
pub mod client;
/// The primary error type (`IcError`) for the crate.
pub mod error;
pub(crate) mod net;
pub(crate) mod wire;

pub use client::{ImageCharts, ImageChartsBuilder};
pub use error::{IcError, ValidationIssue};
pub use net::ResponseHeaders;
