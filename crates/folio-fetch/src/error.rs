//! Error types for resource fetching

/// Resource fetch failures
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, TLS, body read)
    #[error("HTTP request for {path} failed: {source}")]
    Request {
        /// Requested path
        path: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("{path} returned HTTP {status}")]
    Status {
        /// Requested path
        path: String,
        /// HTTP status code
        status: u16,
    },

    /// Resource does not exist
    #[error("resource not found: {path}")]
    NotFound {
        /// Requested path
        path: String,
    },

    /// Local read failed for a reason other than absence
    #[error("failed to read {path}: {source}")]
    Io {
        /// Requested path
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Path cannot be resolved against the site root
    #[error("invalid resource path {path}: {reason}")]
    InvalidPath {
        /// Requested path
        path: String,
        /// Why resolution failed
        reason: String,
    },

    /// Body was fetched but could not be interpreted
    #[error("could not decode {path}: {message}")]
    Decode {
        /// Requested path
        path: String,
        /// Decoder message
        message: String,
    },

    /// Every source in a fallback chain failed
    #[error("all {} sources failed", attempts.len())]
    Exhausted {
        /// Failures in attempt order
        attempts: Vec<FailedAttempt>,
    },
}

/// One failed source in a fallback chain
#[derive(Debug)]
pub struct FailedAttempt {
    /// Path tried
    pub path: String,
    /// Why it failed
    pub error: FetchError,
}

impl FetchError {
    /// Whether the resource is known to be absent (missing file or HTTP 404)
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::Status { status: 404, .. }
        )
    }

    /// Whether the body was retrieved but unusable
    #[inline]
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Paths tried, for an exhausted chain
    #[must_use]
    pub fn attempted_paths(&self) -> Vec<&str> {
        match self {
            Self::Exhausted { attempts } => attempts.iter().map(|a| a.path.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}
