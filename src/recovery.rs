use std::any::Any;
use std::panic::{self, UnwindSafe};

use crate::encodings::EncodeError;
use crate::errors::ServerError;

/// Runs a body-producing handler and turns any panic into a generic
/// [`ServerError::Internal`].
///
/// This is the boundary [`crate::encodings::must`] panics towards: the typed
/// [`EncodeError`] is logged here and never reaches the client.
pub fn recover<F>(handler: F) -> Result<String, ServerError>
where
    F: FnOnce() -> String + UnwindSafe,
{
    panic::catch_unwind(handler).map_err(|payload| {
        log::error!("Request handler failed: {}", describe(payload.as_ref()));
        ServerError::Internal
    })
}

fn describe(payload: &(dyn Any + Send)) -> String {
    if let Some(e) = payload.downcast_ref::<EncodeError>() {
        e.to_string()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
