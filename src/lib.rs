//! image-charts: fluent, immutable client for the Image-Charts rendering API.
//!
//! Charts are described by chaining one setter per API parameter. Each call returns a new
//! value, so partially built charts can be shared and reused. A terminal call renders the
//! signed URL or performs a blocking fetch.
//!
//! ```no_run
//! use image_charts::ImageCharts;
//!
//! # fn main() -> Result<(), image_charts::IcError> {
//! let client = ImageCharts::builder().secret("my-secret").build()?;
//! let chart = client
//!     .chart()
//!     .cht("bvg")
//!     .chs("300x300")
//!     .chd("a:60,40")
//!     .icac("my-account");
//!
//! println!("{}", chart.to_url());
//! chart.to_file("/tmp/chart.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! Enable the `tracing` feature to get spans around every fetch.

pub mod chart;
pub mod core;

pub use crate::chart::{ChartImage, ChartRequest, PARAMETERS};
pub use crate::core::{IcError, ImageCharts, ImageChartsBuilder, ResponseHeaders, ValidationIssue};
