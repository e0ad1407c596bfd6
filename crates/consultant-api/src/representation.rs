//! JSON / XML representation of a location collection.
//!
//! The choice of representation for a write is a two-way branch on the
//! request's media subtype: exactly `json` (case-sensitive) selects
//! [`Representation::Json`], anything else (including a missing or
//! unparsable `Content-Type`) selects [`Representation::Xml`]. There is no
//! quality-value parsing and `Accept` is never consulted. Reads are always
//! answered with JSON.
//!
//! XML bodies go through the strict reader in [`crate::xml`]; the serde
//! deserializer is not used for input because it trims field text.

use std::fmt;

use consultant_types::{LocationCollection, LocationsDocument};

/// Declaration prepended to every XML body.
const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Errors from turning bytes into a collection or back.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepresentationError {
    /// The body was not a valid JSON collection.
    #[error("malformed JSON: {0}")]
    JsonDecode(String),

    /// The body was not a valid XML collection.
    #[error("malformed XML: {0}")]
    XmlDecode(String),

    /// JSON serialization failed.
    #[error("JSON encoding failed: {0}")]
    JsonEncode(String),

    /// XML serialization failed.
    #[error("XML encoding failed: {0}")]
    XmlEncode(String),
}

/// Wire representation of a [`LocationCollection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    /// `application/json`, a bare array of records.
    Json,
    /// `application/xml`, a `<consultantLocations>` document.
    Xml,
}

impl Representation {
    /// Pick a representation from a `Content-Type` header value.
    ///
    /// Parameters such as `charset` are ignored and surrounding whitespace
    /// is trimmed; the subtype itself must be exactly `json`. Everything
    /// else falls to XML.
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        let subtype = content_type
            .and_then(|value| value.split(';').next())
            .and_then(|media_type| media_type.split_once('/'))
            .map(|(_, subtype)| subtype.trim());

        match subtype {
            Some("json") => Self::Json,
            _ => Self::Xml,
        }
    }

    /// The `Content-Type` value sent with a body in this representation.
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "application/xml",
        }
    }

    /// Decode a request body into a collection.
    ///
    /// # Errors
    ///
    /// Returns [`RepresentationError::JsonDecode`] or
    /// [`RepresentationError::XmlDecode`] when the body is malformed.
    pub fn decode(self, body: &[u8]) -> Result<LocationCollection, RepresentationError> {
        match self {
            Self::Json => serde_json::from_slice(body)
                .map_err(|e| RepresentationError::JsonDecode(e.to_string())),
            Self::Xml => {
                let text = std::str::from_utf8(body)
                    .map_err(|e| RepresentationError::XmlDecode(e.to_string()))?;
                crate::xml::decode_collection(text).map_err(RepresentationError::XmlDecode)
            }
        }
    }

    /// Encode a collection as a response body.
    ///
    /// # Errors
    ///
    /// Returns [`RepresentationError::JsonEncode`] or
    /// [`RepresentationError::XmlEncode`] if serialization fails.
    pub fn encode(self, collection: &LocationCollection) -> Result<String, RepresentationError> {
        match self {
            Self::Json => serde_json::to_string(collection)
                .map_err(|e| RepresentationError::JsonEncode(e.to_string())),
            Self::Xml => {
                let document = LocationsDocument::from(collection);
                let body = quick_xml::se::to_string(&document)
                    .map_err(|e| RepresentationError::XmlEncode(e.to_string()))?;
                Ok(format!("{XML_DECLARATION}{body}"))
            }
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Xml => f.write_str("xml"),
        }
    }
}
