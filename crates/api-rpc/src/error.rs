//! RPC Error Types
//!
//! Maps queue errors to JSON-RPC error codes.

use jsonrpsee::types::ErrorObjectOwned;
use waitline_core::QueueError;

/// RPC Error Codes
pub mod code {
    pub const VALIDATION_ERROR: i32 = 4000;
    pub const NOT_FOUND: i32 = 4001;
    pub const THROTTLED: i32 = 4003;
    pub const INTERNAL_ERROR: i32 = 5000;
}

/// Convert QueueError to JSON-RPC ErrorObject
///
/// `EmptyQueue` lands in the not-found class: there is nobody at the front
/// to serve, the same way there is nobody at a missing position.
pub fn to_rpc_error(err: QueueError) -> ErrorObjectOwned {
    match err {
        QueueError::InvalidName(_) | QueueError::InvalidServiceType(_) => {
            ErrorObjectOwned::owned(code::VALIDATION_ERROR, err.to_string(), None::<()>)
        }
        QueueError::NotFound(_) | QueueError::EmptyQueue => {
            ErrorObjectOwned::owned(code::NOT_FOUND, err.to_string(), None::<()>)
        }
    }
}

/// Rejection for throttled mutating calls.
pub fn throttled_error() -> ErrorObjectOwned {
    ErrorObjectOwned::owned(
        code::THROTTLED,
        "Rate limit exceeded. Please slow down.",
        None::<()>,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_4000() {
        let err = to_rpc_error(QueueError::InvalidName("name is required".into()));
        assert_eq!(err.code(), code::VALIDATION_ERROR);
    }

    #[test]
    fn missing_position_and_empty_queue_map_to_4001() {
        assert_eq!(to_rpc_error(QueueError::NotFound(3)).code(), code::NOT_FOUND);
        assert_eq!(to_rpc_error(QueueError::EmptyQueue).code(), code::NOT_FOUND);
    }
}
