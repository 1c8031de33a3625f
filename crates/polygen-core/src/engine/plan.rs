use super::config::GenerationConfig;
use super::error::GenerationError;
use crate::core::models::composition::Composition;
use crate::core::symmetry::filter::FilterPolicy;
use crate::core::symmetry::labels::{LabeledFragment, label_composition};
use crate::core::symmetry::variables::{VariablePair, inter_pairs, intra_pairs};

/// Everything one input script contains, fully validated.
///
/// A plan can only be built when the composition, the fragment labels and the filter policy are
/// all valid, so writing it out cannot fail for any reason other than I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    composition: Composition,
    fragments: Vec<LabeledFragment>,
    intra: Vec<VariablePair>,
    inter: Vec<VariablePair>,
    filter: FilterPolicy,
}

impl GenerationPlan {
    pub fn build(composition: &str, config: &GenerationConfig) -> Result<Self, GenerationError> {
        let composition: Composition = composition.parse()?;
        let fragments = label_composition(&composition)?;
        let filter = FilterPolicy::resolve(config.accepted_terms.as_deref(), composition.len())?;

        let intra = intra_pairs(&fragments);
        let inter = inter_pairs(&fragments);

        Ok(Self {
            composition,
            fragments,
            intra,
            inter,
            filter,
        })
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    pub fn fragments(&self) -> &[LabeledFragment] {
        &self.fragments
    }

    pub fn intra_variables(&self) -> &[VariablePair] {
        &self.intra
    }

    pub fn inter_variables(&self) -> &[VariablePair] {
        &self.inter
    }

    /// Intra variables followed by inter variables, the order they appear in the script.
    pub fn variables(&self) -> impl Iterator<Item = &VariablePair> {
        self.intra.iter().chain(self.inter.iter())
    }

    pub fn filter(&self) -> FilterPolicy {
        self.filter
    }
}
