//! Channel error types
//!
//! Registration and notification never fail on a thread-safe channel. The
//! errors here cover detected misuse of an unsynchronized channel and
//! building a tokio-backed context outside a runtime.

/// Error type for channel and context operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelError {
    /// Another caller was inside an unsynchronized registry at the same time
    ConcurrentAccess {
        /// Registry operation that observed the overlap
        operation: &'static str,
    },
    /// A tokio-backed context was requested outside of a tokio runtime
    NoRuntime,
}

impl std::fmt::Display for ChannelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelError::ConcurrentAccess { operation } => write!(
                f,
                "Concurrent {} on an unsynchronized channel",
                operation
            ),
            ChannelError::NoRuntime => write!(f, "No tokio runtime is running"),
        }
    }
}

impl std::error::Error for ChannelError {}

/// Result alias for channel operations
pub type Result<T> = std::result::Result<T, ChannelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_concurrent_access() {
        let err = ChannelError::ConcurrentAccess { operation: "add" };
        assert_eq!(err.to_string(), "Concurrent add on an unsynchronized channel");
    }

    #[test]
    fn test_display_no_runtime() {
        assert_eq!(ChannelError::NoRuntime.to_string(), "No tokio runtime is running");
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ChannelError::NoRuntime);
        assert!(err.source().is_none());
    }
}
