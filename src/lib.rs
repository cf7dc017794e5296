//! Typograf SOAP client for XML string resources.
//!
//! Sends text to the ArtLebedev Typograf web service (SOAP 1.1 over HTTP)
//! and returns the typographically corrected result, falling back to the
//! original text on any failure.
//!
//! # Features
//!
//! - Fixed-template `ProcessText` envelope construction
//! - Blocking HTTP POST with a bounded timeout
//! - `ProcessTextResult` extraction from the response XML
//! - Total `correct()` boundary: never raises, always returns a string
//! - Caret-offset navigation of `<string>`/`<item>` elements in resource files
//!
//! # Example
//!
//! ```ignore
//! use typograf::{TypografClient, TypografConfig};
//!
//! let client = TypografClient::new(TypografConfig::default())?;
//! let fixed = client.correct("\"Hello\" - world...");
//! ```

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod parser;
pub mod resource;

pub use client::TypografClient;
pub use config::TypografConfig;
pub use error::{FailureReason, TypografError};
