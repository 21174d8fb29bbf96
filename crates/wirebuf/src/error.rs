//! Error types for stream and arena operations.
//!
//! All faults are local, synchronous, and non-recoverable by the
//! stream: nothing is retried or buffered, and every error is raised
//! before the offending byte would have been touched.

use std::error::Error;
use std::fmt;

/// Errors that can occur during stream or arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StreamError {
    /// A read, write, seek, or skip whose required span falls outside
    /// `[0, capacity)`. Raised before any byte is accessed, so a failed
    /// operation alters neither the buffer nor the cursor.
    OutOfRange {
        /// Starting byte offset of the rejected span.
        offset: usize,
        /// Length of the rejected span in bytes.
        len: usize,
        /// Arena capacity at the time of the request.
        capacity: usize,
    },
    /// A variable-length integer decode consumed more continuation
    /// groups than a 32-bit value can produce (corrupt or adversarial
    /// data).
    MalformedVarInt,
    /// A caller-supplied argument is invalid (e.g. a byte-run count
    /// exceeding the source buffer's length).
    InvalidArgument {
        /// Human-readable description of the rejected argument.
        detail: String,
    },
    /// A bulk copy was invoked with its destination inside the source's
    /// forward range, a direction the forward copy cannot handle.
    OverlapViolation {
        /// Distance in bytes from the source to the destination.
        distance: usize,
        /// Length of the rejected copy in bytes.
        len: usize,
    },
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                offset,
                len,
                capacity,
            } => {
                write!(
                    f,
                    "span out of range: {len} bytes at offset {offset} exceed capacity {capacity}"
                )
            }
            Self::MalformedVarInt => {
                write!(f, "malformed varint: continuation past five groups")
            }
            Self::InvalidArgument { detail } => {
                write!(f, "invalid argument: {detail}")
            }
            Self::OverlapViolation { distance, len } => {
                write!(
                    f,
                    "overlapping copy: destination {distance} bytes past source for a {len}-byte copy"
                )
            }
        }
    }
}

impl Error for StreamError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_span() {
        let err = StreamError::OutOfRange {
            offset: 4,
            len: 8,
            capacity: 10,
        };
        let text = err.to_string();
        assert!(text.contains("offset 4"));
        assert!(text.contains("capacity 10"));
    }

    #[test]
    fn errors_are_comparable() {
        assert_eq!(StreamError::MalformedVarInt, StreamError::MalformedVarInt);
        assert_ne!(
            StreamError::MalformedVarInt,
            StreamError::InvalidArgument {
                detail: "x".into()
            }
        );
    }
}
