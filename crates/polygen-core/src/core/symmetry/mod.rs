//! Symmetry-driven enumeration of polynomial variables.
//!
//! Labeling assigns every atom of every fragment a unique name, variable enumeration pairs those
//! names into intra- and inter-fragment distance variables grouped by a symmetry tag, and the
//! filter decides which polynomial terms the generator keeps.

pub mod filter;
pub mod labels;
pub mod variables;
