use crate::cli::GenerateArgs;
use crate::config::PartialGenerationConfig;
use crate::error::Result;
use polygen::engine::plan::GenerationPlan;
use polygen::workflows;
use std::io::Write;
use std::path::Path;
use tracing::info;

const STDOUT_PATH: &str = "-";

pub fn run(args: GenerateArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    run_with_console(args, &mut handle)
}

/// Runs the command with `console` standing in for standard output.
///
/// With `-o -` the script itself goes to the console and no summary is printed, so the output
/// can be piped straight into the polynomial generator.
fn run_with_console(args: GenerateArgs, console: &mut impl Write) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialGenerationConfig::from_file(path)?,
        None => PartialGenerationConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;

    if args.output == Path::new(STDOUT_PATH) {
        workflows::generate::run(&args.molecule, &config, console)?;
    } else {
        let plan = workflows::generate::run_to_path(&args.molecule, &config, &args.output)?;
        writeln!(console, "{}", summary(&plan, &args.output))?;
    }
    console.flush()?;
    Ok(())
}

fn summary(plan: &GenerationPlan, output: &Path) -> String {
    format!(
        "✓ Wrote {} fragment(s), {} intra and {} inter variable(s) (filter: {}) to: {}",
        plan.fragments().len(),
        plan.intra_variables().len(),
        plan.inter_variables().len(),
        plan.filter(),
        output.display()
    )
}
