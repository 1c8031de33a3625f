use crate::core::models::atom::{AtomInstance, FragmentLetter, is_virtual_site};
use crate::core::models::composition::{Composition, Fragment};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LabelError {
    #[error(
        "Composition has {count} fragments, but fragment letters only cover {max} ('a' through 'z')"
    )]
    TooManyFragments { count: usize, max: usize },
}

/// The atom instances of one fragment, in generator order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledFragment {
    pub letter: FragmentLetter,
    pub atoms: Vec<AtomInstance>,
}

/// Expands a fragment into its atom instances.
///
/// Ordinary atoms come first, then virtual sites, each in declared order. An ordinary atom type
/// declared with a count of 1 gets no index; every other atom type, and every virtual site, is
/// numbered from 1.
pub fn label_fragment(fragment: &Fragment, letter: FragmentLetter) -> LabeledFragment {
    let mut atoms = Vec::with_capacity(fragment.atom_count());

    for group in fragment.groups().iter().filter(|g| !is_virtual_site(g.symbol)) {
        if group.count == 1 {
            atoms.push(AtomInstance {
                symbol: group.symbol,
                index: None,
                fragment: letter,
            });
        } else {
            atoms.extend((1..=group.count).map(|i| AtomInstance {
                symbol: group.symbol,
                index: Some(i),
                fragment: letter,
            }));
        }
    }

    for group in fragment.groups().iter().filter(|g| is_virtual_site(g.symbol)) {
        atoms.extend((1..=group.count).map(|i| AtomInstance {
            symbol: group.symbol,
            index: Some(i),
            fragment: letter,
        }));
    }

    LabeledFragment { letter, atoms }
}

/// Labels every fragment of a composition, assigning letters `a`, `b`, ... in order.
///
/// # Errors
///
/// Returns [`LabelError::TooManyFragments`] when the composition has more fragments than letters.
pub fn label_composition(composition: &Composition) -> Result<Vec<LabeledFragment>, LabelError> {
    let too_many = || LabelError::TooManyFragments {
        count: composition.len(),
        max: FragmentLetter::MAX_FRAGMENTS,
    };

    let labeled = composition
        .fragments()
        .iter()
        .enumerate()
        .map(|(i, fragment)| {
            let letter = FragmentLetter::from_index(i).ok_or_else(too_many)?;
            Ok(label_fragment(fragment, letter))
        })
        .collect::<Result<Vec<_>, LabelError>>()?;

    for fragment in &labeled {
        debug!(
            "Fragment '{}' labeled with {} atom instance(s).",
            fragment.letter,
            fragment.atoms.len()
        );
    }

    Ok(labeled)
}
