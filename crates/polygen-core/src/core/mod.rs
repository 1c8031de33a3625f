//! # Core Module
//!
//! The fundamental building blocks of polynomial input generation.
//!
//! - **Molecular Representation** ([`models`]) - Compositions, fragments and labeled atom instances
//! - **Symmetry Algorithms** ([`symmetry`]) - Fragment labeling, variable enumeration and
//!   accepted-terms filtering
//! - **File I/O** ([`io`]) - Serialization of a generation plan into the generator's input format

pub mod io;
pub mod models;
pub mod symmetry;
