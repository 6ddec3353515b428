use thiserror::Error;

/// Error handed back to API clients. Carries no internal detail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServerError {
    #[error("Internal Server Error")]
    Internal,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::Internal => 500,
        }
    }
}
