//! Driver error taxonomy
//!
//! Two kinds of failure, kept distinct so callers can tell a hardware
//! problem from misuse. Fully-clipped-away geometry is neither: drawing
//! outside the panel is harmless and reports success.

/// Errors surfaced by the display driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The transport failed (bus busy, NAK, timeout)
    ///
    /// Recoverable: chip-select has been released and the next operation
    /// may be attempted. Never retried automatically.
    Transport(E),
    /// Operation invoked before bring-up reached the active state
    NotReady,
}

impl<E> Error<E> {
    /// Whether this is a transport-level failure
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Error::Transport(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_classification() {
        let e: Error<&str> = Error::Transport("timeout");
        assert!(e.is_transport());
        let e: Error<&str> = Error::NotReady;
        assert!(!e.is_transport());
    }

    #[test]
    fn test_from_transport_error() {
        let e: Error<u8> = Error::from(7);
        assert_eq!(e, Error::Transport(7));
    }
}
