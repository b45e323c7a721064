//! Error type shared by every container in this crate.

use core::fmt;

/// Failure returned by container operations.
///
/// `Empty`, `OutOfRange`, and `NotFound` are caller errors and are always
/// detected before the container is modified. `Inconsistent` signals a defect
/// in the container itself: the heap array and its position index disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The container holds no elements.
    Empty,
    /// An index outside `[0, len)` was supplied.
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// Length of the container at the time of the call.
        len: usize,
    },
    /// The requested value is not present.
    NotFound,
    /// The position index does not match the heap array at `position`.
    Inconsistent {
        /// Heap slot at which the divergence was detected.
        position: usize,
    },
}

impl Error {
    /// Returns `true` for errors that indicate a bug rather than bad input.
    #[inline]
    pub fn is_internal(&self) -> bool {
        matches!(self, Error::Inconsistent { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Empty => write!(f, "container is empty"),
            Error::OutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            }
            Error::NotFound => write!(f, "value not found"),
            Error::Inconsistent { position } => {
                write!(f, "position index diverged from heap at slot {}", position)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(Error::Empty.to_string(), "container is empty");
        assert_eq!(
            Error::OutOfRange { index: 7, len: 3 }.to_string(),
            "index 7 out of range for length 3"
        );
        assert_eq!(Error::NotFound.to_string(), "value not found");
        assert_eq!(
            Error::Inconsistent { position: 2 }.to_string(),
            "position index diverged from heap at slot 2"
        );
    }

    #[test]
    fn only_inconsistent_is_internal() {
        assert!(Error::Inconsistent { position: 0 }.is_internal());
        assert!(!Error::Empty.is_internal());
        assert!(!Error::NotFound.is_internal());
        assert!(!Error::OutOfRange { index: 0, len: 0 }.is_internal());
    }
}
