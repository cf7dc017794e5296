//! Configuration types for the Typograf client.

use crate::error::TypografError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration for the Typograf client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TypografConfig {
    /// Config version
    pub version: String,

    /// Remote service settings
    pub service: ServiceConfig,

    /// Fixed ProcessText request parameters
    pub request: RequestParams,

    /// XML resource navigation settings
    pub resource: ResourceConfig,
}

impl Default for TypografConfig {
    fn default() -> Self {
        Self {
            version: "1".to_string(),
            service: ServiceConfig::default(),
            request: RequestParams::default(),
            resource: ResourceConfig::default(),
        }
    }
}

impl TypografConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, TypografError> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| TypografError::Config(format!("{}: {}", path.display(), e)))
    }
}

/// Remote service endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// SOAP endpoint URL
    pub endpoint: String,

    /// SOAPAction header value for the ProcessText operation
    pub soap_action: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// XML-escape the input text before embedding it in the envelope.
    ///
    /// The upstream service has historically been called with raw text, so
    /// this defaults to false; inputs containing `<` or `&` then produce a
    /// request the service may reject, which surfaces as the usual fallback.
    pub escape_text: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://typograf.artlebedev.ru/webservices/typograf.asmx".to_string(),
            soap_action: "http://typograf.artlebedev.ru/webservices/ProcessText".to_string(),
            timeout_secs: 10,
            escape_text: false,
        }
    }
}

/// Fixed parameters of the ProcessText operation.
///
/// These mirror what the service expects for Android-style string resources:
/// HTML entities by number, no line/paragraph markup, French outer quotes and
/// German inner quotes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestParams {
    /// Entity encoding mode
    pub entity_type: u8,

    /// Insert `<br/>` for line breaks (0 = off)
    pub use_br: u8,

    /// Wrap paragraphs in `<p>` (0 = off)
    pub use_p: u8,

    /// Maximum words joined by non-breaking spaces
    pub max_nobr: u8,

    /// Outer quotation mark pair (entity names, space separated)
    pub quot_a: String,

    /// Inner quotation mark pair (entity names, space separated)
    pub quot_b: String,
}

impl Default for RequestParams {
    fn default() -> Self {
        Self {
            entity_type: 3,
            use_br: 0,
            use_p: 0,
            max_nobr: 3,
            quot_a: "laquo raquo".to_string(),
            quot_b: "bdquo ldquo".to_string(),
        }
    }
}

/// XML resource navigation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    /// Tag names whose text content is translatable and correctable
    pub supported_tags: Vec<String>,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            supported_tags: vec!["string".to_string(), "item".to_string()],
        }
    }
}
