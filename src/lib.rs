pub mod encodings;
pub mod errors;
pub mod recovery;

pub use encodings::{must, EncodeError, Encoder, Format, JsonEncoder, TextEncoder, JSON, TEXT};
#[cfg(feature = "xml")]
pub use encodings::{XmlEncoder, XML, XML_HEADER, XML_ROOT};
pub use errors::ServerError;
pub use recovery::recover;
