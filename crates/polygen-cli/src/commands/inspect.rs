use crate::cli::InspectArgs;
use crate::error::Result;
use polygen::engine::plan::GenerationPlan;
use polygen::workflows;
use tracing::info;

pub fn run(args: InspectArgs) -> Result<()> {
    let plan = workflows::generate::plan(&args.molecule, &Default::default())?;
    info!("Rendering inspection report for '{}'.", args.molecule);
    print!("{}", render_report(&plan));
    Ok(())
}

fn render_report(plan: &GenerationPlan) -> String {
    let mut report = String::new();
    for (fragment, labeled) in plan
        .composition()
        .fragments()
        .iter()
        .zip(plan.fragments())
    {
        let names: Vec<_> = labeled.atoms.iter().map(|a| a.name()).collect();
        report.push_str(&format!(
            "Fragment {} ({}): {}\n",
            labeled.letter,
            fragment.literal(),
            names.join(" ")
        ));
    }
    report.push_str(&format!(
        "Intra-fragment variables: {}\nInter-fragment variables: {}\nDefault filter: {}\n",
        plan.intra_variables().len(),
        plan.inter_variables().len(),
        plan.filter()
    ));
    report
}
