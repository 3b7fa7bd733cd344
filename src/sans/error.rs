//! Outcomes of a call to `parse`.

use thiserror::Error;

use super::tag::Tag;

/// Progress reported by a successful call to `parse`.
///
/// Together with [`Error`], this gives each codec three outcomes:
/// `Ok(Success)`, `Ok(Unfinished)`, and `Err(_)` for a failed decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Status {
    /// The value is complete and may be retrieved.
    Success,
    /// The chunk ran out first. Supply the bytes that follow it.
    Unfinished,
}

impl Status {
    /// Whether the value is complete.
    pub const fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }
}

/// Forward [`Status::Unfinished`] to the caller, continuing on success.
macro_rules! ready {
    ($e:expr) => {
        match $e {
            $crate::sans::Status::Success => {}
            $crate::sans::Status::Unfinished => {
                return Ok($crate::sans::Status::Unfinished);
            }
        }
    };
}

pub(crate) use ready;

/// A malformed document.
///
/// Every error is terminal: the decoder must be [reset] before reuse.
///
/// [reset]: super::Codec::reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Found an id with no registered tag.
    #[error("Unknown tag id ({0}).")]
    UnknownTag(u8),
    /// Found a different tag than the one demanded.
    #[error("Expected {expected}, found {found}.")]
    TagMismatch { expected: Tag, found: Tag },
    /// Found an end tag where a value was required.
    #[error("Unexpected end tag.")]
    UnexpectedEnd,
    /// Found a negative element count.
    #[error("Negative length ({0}).")]
    NegativeLength(i32),
    /// Found a non-empty list without an element kind.
    #[error("List of {0} elements has no element kind.")]
    UntypedList(i32),
    /// Nesting exceeded the configured limit.
    #[error("Nesting exceeded the depth limit ({0}).")]
    DepthExceeded(usize),
    /// Called `parse` after a failure without resetting.
    #[error("Decoder previously failed and was not reset.")]
    Poisoned,
}
