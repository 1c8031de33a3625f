use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Separates fragments in a composition string (e.g. `A1B2_A1B2`).
pub const FRAGMENT_DELIMITER: char = '_';

const EXPECTED_GRAMMAR: &str = "every letter followed by a single-digit count from 1 to 9, e.g. 'A1B2'";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompositionError {
    #[error("Malformed fragment '{fragment}': {kind} (expected {grammar})", grammar = EXPECTED_GRAMMAR)]
    MalformedFragment {
        fragment: String,
        kind: FragmentErrorKind,
    },
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FragmentErrorKind {
    #[error("fragment is empty")]
    Empty,
    #[error("the first character must be a letter, not a digit")]
    LeadingDigit,
    #[error("character '{found}' at position {position} is not an atom symbol letter")]
    InvalidSymbol { position: usize, found: char },
    #[error("atom '{symbol}' at position {position} is not followed by a count digit")]
    MissingCount { symbol: char, position: usize },
    #[error("atom '{symbol}' at position {position} has a multi-digit count")]
    MultiDigitCount { symbol: char, position: usize },
    #[error("atom '{symbol}' at position {position} has a count of zero")]
    ZeroCount { symbol: char, position: usize },
}

/// One `(symbol, count)` entry of a fragment, as declared in the composition string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AtomGroup {
    pub symbol: char,
    pub count: u8,
}

/// A single fragment of a molecule, such as `A1B2`.
///
/// The literal text is retained so the generator input can reproduce it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    literal: String,
    groups: Vec<AtomGroup>,
}

impl Fragment {
    /// Parses a fragment that must match `(letter digit)+`.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::MalformedFragment`] describing the first grammar violation.
    pub fn parse(literal: &str) -> Result<Self, CompositionError> {
        let malformed = |kind| CompositionError::MalformedFragment {
            fragment: literal.to_string(),
            kind,
        };

        let chars: Vec<char> = literal.chars().collect();
        match chars.first() {
            None => return Err(malformed(FragmentErrorKind::Empty)),
            Some(c) if c.is_ascii_digit() => {
                return Err(malformed(FragmentErrorKind::LeadingDigit));
            }
            Some(_) => {}
        }

        let mut groups = Vec::with_capacity(chars.len() / 2);
        for position in (0..chars.len()).step_by(2) {
            let symbol = chars[position];
            if !symbol.is_ascii_alphabetic() {
                return Err(malformed(FragmentErrorKind::InvalidSymbol {
                    position,
                    found: symbol,
                }));
            }

            let count = match chars.get(position + 1).and_then(|c| c.to_digit(10)) {
                Some(0) => return Err(malformed(FragmentErrorKind::ZeroCount { symbol, position })),
                Some(d) => d as u8,
                None => {
                    return Err(malformed(FragmentErrorKind::MissingCount { symbol, position }));
                }
            };

            if chars.get(position + 2).is_some_and(|c| c.is_ascii_digit()) {
                return Err(malformed(FragmentErrorKind::MultiDigitCount {
                    symbol,
                    position,
                }));
            }

            groups.push(AtomGroup { symbol, count });
        }

        Ok(Self {
            literal: literal.to_string(),
            groups,
        })
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub fn groups(&self) -> &[AtomGroup] {
        &self.groups
    }

    /// Total number of atoms and virtual sites declared in this fragment.
    pub fn atom_count(&self) -> usize {
        self.groups.iter().map(|g| g.count as usize).sum()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

/// An ordered, immutable sequence of fragments parsed from a composition string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    fragments: Vec<Fragment>,
}

impl Composition {
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl FromStr for Composition {
    type Err = CompositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fragments = s
            .split(FRAGMENT_DELIMITER)
            .map(Fragment::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { fragments })
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, fragment) in self.fragments.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", FRAGMENT_DELIMITER)?;
            }
            write!(f, "{}", fragment)?;
        }
        Ok(())
    }
}
