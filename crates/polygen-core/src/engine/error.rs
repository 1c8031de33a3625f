use crate::core::models::composition::CompositionError;
use crate::core::symmetry::filter::FilterError;
use crate::core::symmetry::labels::LabelError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Invalid composition: {source}")]
    Composition {
        #[from]
        source: CompositionError,
    },

    #[error("Fragment labeling failed: {source}")]
    Labeling {
        #[from]
        source: LabelError,
    },

    #[error("Invalid term filter: {source}")]
    Filter {
        #[from]
        source: FilterError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
