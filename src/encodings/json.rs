use serde::Serialize;
use super::{Encoder, EncodeError};

pub struct JsonEncoder;

impl<T> Encoder<T> for JsonEncoder
where
    T: Serialize,
{
    fn encode(&self, values: &[T]) -> Result<String, EncodeError> {
        let result = match values {
            // Empty results produce `[]`, never `null`. Non-finite floats are
            // written as `null` by serde_json rather than rejected.
            [] => Ok("[]".to_string()),
            [value] => serde_json::to_string(value),
            _ => serde_json::to_string(values),
        };
        result.map_err(|e| EncodeError::Serialization(e.to_string()))
    }
}
