//! # Workflows Module
//!
//! Top-level entry points for generating polynomial input scripts.
//!
//! Every workflow validates first and writes second: the composition grammar, the fragment
//! letters and the accepted-terms filter are all checked before any output is opened, so a
//! destination file is either never created or written completely.

pub mod generate;
