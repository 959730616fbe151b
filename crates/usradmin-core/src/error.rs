use thiserror::Error;

/// Failure to establish a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Missing credential")]
    MissingCredential,
}

/// Failure reported by the profile store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Service not initialized")]
    NotInitialized,

    #[error("User {id} not found")]
    NotFound { id: String },

    #[error("{message}")]
    Service { message: String },
}

impl ServiceError {
    pub fn service(message: impl Into<String>) -> Self {
        ServiceError::Service {
            message: message.into(),
        }
    }
}

/// Failure on the embedding channel. These are logged and dropped, never shown.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Malformed message: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Message from untrusted origin: {origin}")]
    UntrustedOrigin { origin: String },

    #[error("Bridge I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_messages() {
        assert_eq!(
            ServiceError::NotFound { id: "42".into() }.to_string(),
            "User 42 not found"
        );
        assert_eq!(
            ServiceError::service("backend exploded").to_string(),
            "backend exploded"
        );
        assert_eq!(AuthError::MissingCredential.to_string(), "Missing credential");
    }
}
