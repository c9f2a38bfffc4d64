use thiserror::Error;

/// Errors reported by the containers in this crate.
///
/// Every failure is local and synchronous: it is reported at the offending
/// call, nothing is retried internally, and the container stays valid and
/// usable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// The container holds no elements.
    #[error("container is empty")]
    Empty,
    /// An index or cursor position lies outside the live range.
    #[error("position {index} out of range for length {len}")]
    OutOfRange {
        /// The offending position.
        index: usize,
        /// The container length at the time of the call.
        len: usize,
    },
    /// A handle that was never issued by this pool, or whose slot has
    /// already been returned.
    #[error("invalid handle")]
    InvalidHandle,
}
