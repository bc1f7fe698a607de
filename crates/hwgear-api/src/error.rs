// Error taxonomy for device communication.
//
// Three failure classes reach callers from a poll: connection-level trouble
// (refused, reset, DNS, timeout, unexpected HTTP status), rejected
// credentials, and a status document that is not well-formed XML. Anything
// softer than that (missing elements, unknown units, odd field layouts)
// degrades inside the parsers instead of surfacing here.

use thiserror::Error;

/// Failure communicating with an appliance.
#[derive(Debug, Error)]
pub enum Error {
    /// The device could not be reached, or replied with an unexpected HTTP
    /// status. Timeouts land here too: callers react to a slow device and an
    /// absent one the same way.
    #[error("device unreachable: {message}")]
    Connection {
        message: String,
        /// HTTP status when the failure happened above the socket level.
        status: Option<u16>,
    },

    /// The device answered HTTP 401 on a poll endpoint. Stored credentials
    /// are wrong or expired; retrying without reconfiguration is pointless.
    #[error("device rejected the configured credentials")]
    Auth,

    /// The response body is not well-formed XML. Dialect mismatches are not
    /// parse errors; only a document the XML reader itself rejects ends up
    /// here.
    #[error("malformed status document: {0}")]
    Parse(String),

    /// The configured host/port do not form a valid URL.
    #[error("invalid device URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// True when the failure is a credentials problem (HTTP 401).
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth)
    }

    /// True for network-level failures, including timeouts.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }

    /// The HTTP status associated with this failure, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Connection { status, .. } => *status,
            Self::Auth => Some(401),
            Self::Parse(_) | Self::InvalidUrl(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Connection {
            message: err.to_string(),
            status: err.status().map(|s| s.as_u16()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn auth_predicate() {
        assert!(Error::Auth.is_auth());
        assert!(!Error::Parse("oops".into()).is_auth());
    }

    #[test]
    fn status_extraction() {
        let err = Error::Connection {
            message: "HTTP 503".into(),
            status: Some(503),
        };
        assert_eq!(err.status(), Some(503));
        assert_eq!(Error::Auth.status(), Some(401));
        assert_eq!(Error::Parse("bad".into()).status(), None);
    }

    #[test]
    fn invalid_url_from_parse_error() {
        let err: Error = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, Error::InvalidUrl(_)));
        assert!(!err.is_connection());
    }
}
