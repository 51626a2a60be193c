use core::fmt;

/// A bounds-checked access or mutation was attempted with an index outside the sequence.
///
/// Returning this error never leaves the sequence modified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OutOfRange {
    /// Offending index.
    pub index: usize,
    /// Length of the sequence at the time of the call.
    pub len: usize,
}

impl OutOfRange {
    #[inline]
    pub const fn new(index: usize, len: usize) -> Self {
        Self { index, len }
    }
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { index, len } = self;
        write!(f, "index {index} out of range for sequence of length {len}")
    }
}

impl core::error::Error for OutOfRange {}
