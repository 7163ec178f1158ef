use models::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Transient read/write fault in the backing storage.
    #[error("storage io error: {0}")]
    Io(String),
    /// Stored bytes could not be parsed as a preference snapshot.
    #[error("corrupt preferences data: {0}")]
    Corrupt(String),
    /// Any other store failure.
    #[error("store error: {0}")]
    Store(String),
    #[error("decode error: {0}")]
    Decode(#[from] ModelError),
}

impl ServiceError {
    /// Faults that observers recover from by falling back to defaults.
    pub fn is_io(&self) -> bool {
        matches!(self, ServiceError::Io(_) | ServiceError::Corrupt(_))
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(e: std::io::Error) -> Self {
        ServiceError::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_classification() {
        let io: ServiceError = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(io.is_io());
        assert!(ServiceError::Corrupt("bad json".into()).is_io());
        assert!(!ServiceError::Store("closed".into()).is_io());
        assert!(!ServiceError::from(ModelError::UnknownSortOrder("X".into())).is_io());
    }
}
