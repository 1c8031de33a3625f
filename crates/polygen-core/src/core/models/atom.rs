use phf::{Set, phf_set};
use std::fmt;

/// Symbols that mark virtual sites (non-physical points) rather than atoms.
static VIRTUAL_SITE_SYMBOLS: Set<char> = phf_set! { 'X', 'Y', 'Z' };

pub fn is_virtual_site(symbol: char) -> bool {
    VIRTUAL_SITE_SYMBOLS.contains(&symbol)
}

/// The lowercase letter identifying a fragment within one composition.
///
/// Letters are a pure function of the fragment's position: the first fragment is `a`, the second
/// `b`, and so on up to `z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FragmentLetter(u8);

impl FragmentLetter {
    /// Number of fragments the letter scheme can address.
    pub const MAX_FRAGMENTS: usize = 26;

    /// Returns the letter for the fragment at `index`, or `None` past `z`.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < Self::MAX_FRAGMENTS).then(|| Self(b'a' + index as u8))
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for FragmentLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One labeled atom (or virtual site) of a fragment.
///
/// `index` is `None` only for an ordinary atom that appears once in its fragment; virtual sites
/// are always numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AtomInstance {
    pub symbol: char,
    pub index: Option<u8>,
    pub fragment: FragmentLetter,
}

impl AtomInstance {
    pub fn is_virtual_site(&self) -> bool {
        is_virtual_site(self.symbol)
    }

    /// The atom name as the polynomial generator expects it: symbol followed by the index, if any.
    pub fn name(&self) -> String {
        match self.index {
            Some(i) => format!("{}{}", self.symbol, i),
            None => self.symbol.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn virtual_site_symbols_are_x_y_z() {
        assert!(is_virtual_site('X'));
        assert!(is_virtual_site('Y'));
        assert!(is_virtual_site('Z'));
        assert!(!is_virtual_site('A'));
        assert!(!is_virtual_site('x'));
    }

    #[test]
    fn fragment_letters_follow_position() {
        assert_eq!(FragmentLetter::from_index(0).unwrap().as_char(), 'a');
        assert_eq!(FragmentLetter::from_index(1).unwrap().as_char(), 'b');
        assert_eq!(FragmentLetter::from_index(25).unwrap().as_char(), 'z');
    }

    #[test]
    fn fragment_letters_do_not_wrap_past_z() {
        assert_eq!(FragmentLetter::from_index(26), None);
    }

    #[test]
    fn name_omits_missing_index() {
        let a = FragmentLetter::from_index(0).unwrap();
        let lone = AtomInstance {
            symbol: 'O',
            index: None,
            fragment: a,
        };
        let second = AtomInstance {
            symbol: 'H',
            index: Some(2),
            fragment: a,
        };
        assert_eq!(lone.name(), "O");
        assert_eq!(second.name(), "H2");
    }
}
