use crate::core::models::atom::AtomInstance;
use crate::core::symmetry::filter::FilterPolicy;
use crate::core::symmetry::variables::VariablePair;
use crate::engine::plan::GenerationPlan;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

const PURELY_INTER_FILTER: &str = "add_filter['degree', 'x-intra-**', '1+', '*']";
const PARTLY_INTER_FILTER: &str = "add_filter['not', 'degree', 'x-**', '1+', '*']";

/// Writer for polynomial generator input (`.in`) scripts.
pub struct PolyInputFile;

impl PolyInputFile {
    /// Writes a plan as an input script.
    ///
    /// Sections, in order: one `add_molecule` line per fragment, a blank line, every variable
    /// (intra before inter), a blank line, and at most one filter directive. The filter line
    /// carries no trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error only if the writer fails.
    pub fn write_to(plan: &GenerationPlan, writer: &mut impl Write) -> io::Result<()> {
        for fragment in plan.composition().fragments() {
            writeln!(writer, "add_molecule['{}']", fragment.literal())?;
        }
        writeln!(writer)?;

        for variable in plan.variables() {
            writeln!(writer, "{}", variable_directive(variable))?;
        }
        writeln!(writer)?;

        if let Some(directive) = filter_directive(plan.filter()) {
            write!(writer, "{}", directive)?;
        }
        Ok(())
    }

    /// Writes a plan to `path`, creating missing parent directories first.
    ///
    /// # Errors
    ///
    /// Returns an error if the directories or the file cannot be created, or writing fails.
    pub fn write_to_path<P: AsRef<Path>>(plan: &GenerationPlan, path: P) -> io::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(plan, &mut writer)?;
        writer.flush()
    }
}

fn variable_directive(variable: &VariablePair) -> String {
    format!(
        "add_variable[{}, {}, '{}']",
        atom_fields(variable.first()),
        atom_fields(variable.second()),
        variable.group()
    )
}

fn atom_fields(atom: &AtomInstance) -> String {
    format!("'{}', '{}'", atom.name(), atom.fragment)
}

fn filter_directive(policy: FilterPolicy) -> Option<&'static str> {
    match policy {
        FilterPolicy::All => None,
        FilterPolicy::PurelyInter => Some(PURELY_INTER_FILTER),
        FilterPolicy::PartlyInter => Some(PARTLY_INTER_FILTER),
    }
}
