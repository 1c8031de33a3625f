//! Provides output functionality for the polynomial generator's input format.
//!
//! The generator reads a small directive language (`add_molecule`, `add_variable`,
//! `add_filter`). Atom instances are only encoded into that text form here.

pub mod poly_in;
