use crate::cli::RankArgs;
use crate::config::builder::build_rank_config;
use crate::error::{CliError, Result};
use confviz::core::io::traits::EnsembleFile;
use confviz::core::io::xyz::XyzEnsemble;
use confviz::core::models::conformer::RankedConformer;
use confviz::engine::ranking;
use std::fmt::Write;
use tracing::info;

pub fn run(args: RankArgs) -> Result<()> {
    let config = build_rank_config(&args)?;

    info!("Loading conformer ensemble from {:?}", &config.input_path);
    let conformers =
        XyzEnsemble::read_from_path(&config.input_path).map_err(|e| CliError::FileParsing {
            path: config.input_path.clone(),
            source: e.into(),
        })?;
    let parsed = conformers.len();

    let ranked = ranking::rank(conformers, &config.ranking)?;

    print!("{}", render_table(&ranked));
    println!("{} of {} conformers retained.", ranked.len(), parsed);
    Ok(())
}

/// Formats the ranked conformers as a fixed-width text table, one row per conformer.
fn render_table(ranked: &[RankedConformer]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<9} {:>16} {:>14} {:>10} {:>10} {:>10}",
        "Rank", "Conformer", "Energy (Eh)", "ΔE (kcal/mol)", "Pop. rel", "Pop. norm", "Cumul."
    );

    let mut cumulative = 0.0;
    for (rank, conformer) in ranked.iter().enumerate() {
        cumulative += conformer.population_normalized();
        let _ = writeln!(
            out,
            "{:>4}  {:<9} {:>16.8} {:>14.3} {:>10.4} {:>10.4} {:>10.4}",
            rank + 1,
            conformer.id().to_string(),
            conformer.energy_absolute(),
            conformer.energy_relative(),
            conformer.population_relative(),
            conformer.population_normalized(),
            cumulative
        );
    }
    out
}
