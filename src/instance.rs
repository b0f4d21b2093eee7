//! Synthetic LCS inputs.
//!
//! Both instance kinds use a two-symbol alphabet:
//! - worst case: `s1 = A^n`, `s2 = B^m`. No position ever matches, so the
//!   memoized recursion branches at every cell and visits all n·m states.
//! - best case: `s1 = A^n`, `s2 = A^m`. Every comparison matches and the
//!   recursion degenerates into a single diagonal chain of length min(n, m).

/// First alphabet symbol.
pub const SYMBOL_A: u8 = b'A';
/// Second alphabet symbol, disjoint from [`SYMBOL_A`].
pub const SYMBOL_B: u8 = b'B';

/// Which synthetic input to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstanceKind {
    #[default]
    WorstCase,
    BestCase,
}

impl InstanceKind {
    /// Map the numeric mode flag: `0` is worst case, anything else best case.
    pub fn from_flag(flag: i64) -> Self {
        if flag == 0 {
            Self::WorstCase
        } else {
            Self::BestCase
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InstanceKind::WorstCase => "worst",
            InstanceKind::BestCase => "best",
        }
    }
}

/// A pair of sequences `(s1, s2)` with lengths `(n, m)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub s1: Vec<u8>,
    pub s2: Vec<u8>,
}

impl Instance {
    /// Build the instance of the given kind with `|s1| = n`, `|s2| = m`.
    pub fn generate(n: usize, m: usize, kind: InstanceKind) -> Self {
        let second = match kind {
            InstanceKind::WorstCase => SYMBOL_B,
            InstanceKind::BestCase => SYMBOL_A,
        };
        Self {
            s1: vec![SYMBOL_A; n],
            s2: vec![second; m],
        }
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.s1.len()
    }

    #[inline]
    pub fn m(&self) -> usize {
        self.s2.len()
    }
}
