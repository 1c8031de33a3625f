use super::labels::LabeledFragment;
use crate::core::models::atom::AtomInstance;
use std::fmt;

/// Whether a variable connects two atoms of one fragment or atoms of two different fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairScope {
    Intra,
    Inter,
}

/// Unordered pair of atom symbols, stored sorted so `CO` and `OC` are the same tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymmetryTag([char; 2]);

impl SymmetryTag {
    pub fn new(a: char, b: char) -> Self {
        if a <= b { Self([a, b]) } else { Self([b, a]) }
    }
}

impl fmt::Display for SymmetryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

/// One distance variable of the polynomial, between two labeled atom instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariablePair {
    first: AtomInstance,
    second: AtomInstance,
    scope: PairScope,
    tag: SymmetryTag,
}

impl VariablePair {
    pub fn new(first: AtomInstance, second: AtomInstance, scope: PairScope) -> Self {
        Self {
            first,
            second,
            scope,
            tag: SymmetryTag::new(first.symbol, second.symbol),
        }
    }

    pub fn first(&self) -> &AtomInstance {
        &self.first
    }

    pub fn second(&self) -> &AtomInstance {
        &self.second
    }

    pub fn scope(&self) -> PairScope {
        self.scope
    }

    pub fn tag(&self) -> SymmetryTag {
        self.tag
    }

    /// Variable group name used by the generator's filters: `x-intra-AB` or `x-AB`.
    pub fn group(&self) -> String {
        match self.scope {
            PairScope::Intra => format!("x-intra-{}", self.tag),
            PairScope::Inter => format!("x-{}", self.tag),
        }
    }
}

/// Pairs of atoms within each fragment, fragments in order, `i < j` in list order.
///
/// Pairs involving a virtual site are not variables and are skipped.
pub fn intra_pairs(fragments: &[LabeledFragment]) -> Vec<VariablePair> {
    let mut pairs = Vec::new();
    for fragment in fragments {
        for (i, first) in fragment.atoms.iter().enumerate() {
            for second in &fragment.atoms[i + 1..] {
                if first.is_virtual_site() || second.is_virtual_site() {
                    continue;
                }
                pairs.push(VariablePair::new(*first, *second, PairScope::Intra));
            }
        }
    }
    pairs
}

/// Every cross-fragment atom pair: for each fragment pair `f1 < f2`, all atoms of `f1` (outer)
/// against all atoms of `f2` (inner).
///
/// Virtual sites take part here, unlike in [`intra_pairs`].
pub fn inter_pairs(fragments: &[LabeledFragment]) -> Vec<VariablePair> {
    let mut pairs = Vec::new();
    for (i, f1) in fragments.iter().enumerate() {
        for f2 in &fragments[i + 1..] {
            for first in &f1.atoms {
                for second in &f2.atoms {
                    pairs.push(VariablePair::new(*first, *second, PairScope::Inter));
                }
            }
        }
    }
    pairs
}
