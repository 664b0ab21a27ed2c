//! Requests a context accepts from its clients.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two requests a [`Context`](crate::Context) forwards to its
/// active state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Request {
    /// Forwarded to `handle1`.
    Request1,
    /// Forwarded to `handle2`.
    Request2,
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request1 => f.write_str("request1"),
            Self::Request2 => f.write_str("request2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_method_names() {
        assert_eq!(Request::Request1.to_string(), "request1");
        assert_eq!(Request::Request2.to_string(), "request2");
    }

    #[test]
    fn request_serializes_as_snake_case() {
        let json = serde_json::to_string(&Request::Request2).unwrap();
        assert_eq!(json, "\"request2\"");
    }
}
