pub mod json;
pub mod text;
#[cfg(feature = "xml")]
pub mod xml;

use std::fmt::Display;

use serde::Serialize;
use thiserror::Error;

pub use json::JsonEncoder;
pub use text::TextEncoder;
#[cfg(feature = "xml")]
pub use xml::{XmlEncoder, XML_HEADER, XML_ROOT};

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Write error: {0}")]
    Write(#[from] std::fmt::Error),
}

/// Encodes an ordered sequence of values into a response body.
pub trait Encoder<T> {
    fn encode(&self, values: &[T]) -> Result<String, EncodeError>;
}

pub const JSON: JsonEncoder = JsonEncoder;
#[cfg(feature = "xml")]
pub const XML: XmlEncoder = XmlEncoder;
pub const TEXT: TextEncoder = TextEncoder;

/// Response format chosen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    #[cfg(feature = "xml")]
    Xml,
    Text,
}

impl Format {
    pub fn content_type(&self) -> &'static str {
        match self {
            Format::Json => "application/json",
            #[cfg(feature = "xml")]
            Format::Xml => "application/xml",
            Format::Text => "text/plain; charset=utf-8",
        }
    }

    /// Encodes with the matching encoder constant.
    ///
    /// Every variant shares one bound, so `T` must be both `Serialize` and
    /// `Display`. Records without a `Display` impl go through [`JSON`] or
    /// [`XML`] directly.
    pub fn encode<T>(&self, values: &[T]) -> Result<String, EncodeError>
    where
        T: Serialize + Display,
    {
        match self {
            Format::Json => JSON.encode(values),
            #[cfg(feature = "xml")]
            Format::Xml => XML.encode(values),
            Format::Text => TEXT.encode(values),
        }
    }
}

/// Returns the body, or panics with the error as payload.
///
/// Nothing is logged here. The panic is meant to be caught once by
/// [`crate::recovery::recover`], which logs the detail and answers with a
/// generic server error.
pub fn must(result: Result<String, EncodeError>) -> String {
    match result {
        Ok(body) => body,
        Err(e) => std::panic::panic_any(e),
    }
}
