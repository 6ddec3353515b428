use std::fmt::{Display, Write};

use super::{Encoder, EncodeError};

/// Writes each value on its own line, in order.
pub struct TextEncoder;

impl<T> Encoder<T> for TextEncoder
where
    T: Display,
{
    fn encode(&self, values: &[T]) -> Result<String, EncodeError> {
        let mut buffer = String::new();
        for value in values {
            writeln!(buffer, "{}", value)?;
        }
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[test]
    fn test_text_encoder_empty() {
        let values: Vec<&str> = vec![];
        assert_eq!(TextEncoder.encode(&values).expect("encode failed"), "");
    }

    #[test]
    fn test_text_encoder_lines() {
        assert_eq!(TextEncoder.encode(&["a", "b"]).expect("encode failed"), "a\nb\n");
        assert_eq!(TextEncoder.encode(&[42]).expect("encode failed"), "42\n");
    }

    struct Broken;
    impl Display for Broken {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_text_encoder_write_error() {
        let result = TextEncoder.encode(&[Broken]);
        assert!(matches!(result, Err(EncodeError::Write(_))));
    }
}
