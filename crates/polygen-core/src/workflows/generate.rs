use crate::core::io::poly_in::PolyInputFile;
use crate::engine::config::GenerationConfig;
use crate::engine::error::GenerationError;
use crate::engine::plan::GenerationPlan;
use std::io::Write;
use std::path::Path;
use tracing::{info, instrument};

/// Builds and validates the plan for `composition` without writing anything.
#[instrument(skip_all, name = "generation_plan", fields(composition = composition))]
pub fn plan(composition: &str, config: &GenerationConfig) -> Result<GenerationPlan, GenerationError> {
    let plan = GenerationPlan::build(composition, config)?;
    info!(
        "Planned {} fragment(s): {} intra and {} inter variable(s), filter '{}'.",
        plan.fragments().len(),
        plan.intra_variables().len(),
        plan.inter_variables().len(),
        plan.filter()
    );
    Ok(plan)
}

/// Generates the input script for `composition` into `writer`.
pub fn run(
    composition: &str,
    config: &GenerationConfig,
    writer: &mut impl Write,
) -> Result<GenerationPlan, GenerationError> {
    let plan = plan(composition, config)?;
    PolyInputFile::write_to(&plan, writer)?;
    Ok(plan)
}

/// Generates the input script for `composition` into the file at `path`.
///
/// The file is only created once the plan is valid; a malformed composition or an invalid filter
/// leaves any existing file untouched.
#[instrument(skip_all, name = "generation_to_path")]
pub fn run_to_path<P: AsRef<Path>>(
    composition: &str,
    config: &GenerationConfig,
    path: P,
) -> Result<GenerationPlan, GenerationError> {
    let path = path.as_ref();
    let plan = plan(composition, config)?;
    info!("Writing polynomial input to {:?}", path);
    PolyInputFile::write_to_path(&plan, path)?;
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::symmetry::filter::FilterError;
    use std::fs;
    use tempfile::tempdir;

    fn config(accepted_terms: &str) -> GenerationConfig {
        GenerationConfig {
            accepted_terms: Some(accepted_terms.to_string()),
        }
    }

    #[test]
    fn run_writes_script_and_returns_plan() {
        let mut buffer = Vec::new();
        let plan = run("A1_A1", &config("purely-inter"), &mut buffer).unwrap();
        assert_eq!(plan.inter_variables().len(), 1);
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.ends_with("add_filter['degree', 'x-intra-**', '1+', '*']"));
    }

    #[test]
    fn run_writes_nothing_on_invalid_input() {
        let mut buffer = Vec::new();
        assert!(run("A1B2_C", &GenerationConfig::default(), &mut buffer).is_err());
        assert!(buffer.is_empty());
    }

    #[test]
    fn malformed_composition_leaves_no_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("poly.in");

        let err = run_to_path("1A1", &GenerationConfig::default(), &path).unwrap_err();

        assert!(matches!(err, GenerationError::Composition { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn filter_mismatch_leaves_existing_file_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("poly.in");
        fs::write(&path, "previous").unwrap();

        let err = run_to_path("A1B2", &config("partly-inter"), &path).unwrap_err();

        assert!(matches!(
            err,
            GenerationError::Filter {
                source: FilterError::FragmentCountMismatch { .. }
            }
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "previous");
    }

    #[test]
    fn identical_inputs_produce_identical_files() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("first.in");
        let second = dir.path().join("second.in");

        run_to_path("A1B2X1_C2", &config("partly-inter"), &first).unwrap();
        run_to_path("A1B2X1_C2", &config("partly-inter"), &second).unwrap();

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }
}
