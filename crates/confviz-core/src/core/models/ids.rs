use std::fmt;

/// Stable identifier of a conformer, equal to its zero-based position in the ensemble file.
///
/// The identifier never changes when conformers are re-sorted by energy, so file names
/// derived from it stay the same across runs with different cutoffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConformerId(usize);

impl ConformerId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// File name used when the conformer is written out on its own, e.g. `c3.xyz`.
    pub fn file_name(self) -> String {
        format!("{}.xyz", self)
    }
}

impl fmt::Display for ConformerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}
