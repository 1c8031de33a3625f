//! # polygen Core Library
//!
//! Generates input scripts for a permutationally invariant polynomial generator, the tool used to
//! fit molecular potential-energy surfaces. The script is derived entirely from a molecule
//! composition string such as `A1B2_A1B2` and a single filtering setting.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout so that each stage can be tested in isolation.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Composition`, `AtomInstance`), the
//!   symmetry algorithms (labeling, variable enumeration, filter selection) and the script writer.
//!
//! - **[`engine`]: The Plan.** Configuration, the aggregated error type, and the validated
//!   `GenerationPlan` that holds everything a script needs before any output is opened.
//!
//! - **[`workflows`]: The Public API.** Validate-then-write entry points that turn a composition
//!   string into a script on a writer or on disk.

pub mod core;
pub mod engine;
pub mod workflows;
