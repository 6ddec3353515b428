use std::fmt::Write;

use quick_xml::se::Serializer;
use serde::Serialize;
use super::{Encoder, EncodeError};

/// Standard XML declaration, written before the root element.
pub const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Root element wrapping every XML response of the albums API.
pub const XML_ROOT: &str = "albums";

/// Produces `<albums>`-rooted XML documents.
///
/// Values are always marshalled as a sequence, so one value and many values
/// share the same framing. A struct value is written as an element named after
/// its type, with one child element per field.
pub struct XmlEncoder;

impl<T> Encoder<T> for XmlEncoder
where
    T: Serialize,
{
    fn encode(&self, values: &[T]) -> Result<String, EncodeError> {
        let mut buffer = String::new();

        buffer.write_str(XML_HEADER)?;
        write!(buffer, "<{}>", XML_ROOT)?;
        for value in values {
            buffer.write_str(&marshal(value)?)?;
        }
        write!(buffer, "</{}>", XML_ROOT)?;

        Ok(buffer)
    }
}

/// Marshals one value. Structs carry their own element name; anything else
/// (strings, numbers, sequences) is wrapped in an element named after `T`.
fn marshal<T: Serialize>(value: &T) -> Result<String, EncodeError> {
    let mut named = String::new();
    if value.serialize(Serializer::new(&mut named)).is_ok() {
        return Ok(named);
    }

    let name = element_name::<T>();
    let mut rooted = String::new();
    let serializer = Serializer::with_root(&mut rooted, Some(name.as_str()))
        .map_err(|e| EncodeError::Serialization(e.to_string()))?;
    value
        .serialize(serializer)
        .map_err(|e| EncodeError::Serialization(e.to_string()))?;
    Ok(rooted)
}

/// Element name derived from the Rust type: `&str` and `String` become
/// `string`, paths and generics are dropped (`alloc::vec::Vec<u8>` -> `Vec`),
/// tuples and slices become `value`.
fn element_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>().trim_start_matches('&').trim_start_matches("mut ");
    if full.starts_with(['(', '[']) {
        return "value".to_string();
    }
    let base = full.split('<').next().unwrap_or(full);
    let last = base.rsplit("::").next().unwrap_or(base);
    let name: String = last
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    match name.as_str() {
        "str" | "String" => "string".to_string(),
        n if n.is_empty() || n.starts_with(|c: char| c.is_ascii_digit()) => "value".to_string(),
        _ => name,
    }
}
