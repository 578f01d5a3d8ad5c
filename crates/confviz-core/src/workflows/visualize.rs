use crate::core::io::chimerax::{ChimeraxScript, ScriptEntry};
use crate::core::models::conformer::{Conformer, RankedConformer};
use crate::core::models::ids::ConformerId;
use crate::engine::config::VisualizationConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{ProgressReporter, Stage};
use crate::engine::ranking;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// The retained conformers in display order and the script that shows them.
#[derive(Debug, Clone)]
pub struct VisualizationPlan {
    pub conformers: Vec<RankedConformer>,
    pub script: ChimeraxScript,
}

impl VisualizationPlan {
    /// Yields `(identifier, relative population)` for every retained conformer, in script order.
    pub fn populations(&self) -> impl Iterator<Item = (ConformerId, f64)> + '_ {
        self.conformers
            .iter()
            .map(|c| (c.id(), c.population_relative()))
    }
}

/// Location of a conformer's standalone file inside `dir`.
///
/// Depends only on the parse-order identifier, never on the energy rank.
pub fn structure_path(dir: &Path, id: ConformerId) -> PathBuf {
    dir.join(id.file_name())
}

#[instrument(skip_all, name = "visualization_workflow")]
pub fn run(
    conformers: Vec<Conformer>,
    config: &VisualizationConfig,
    reporter: &ProgressReporter,
) -> Result<VisualizationPlan, EngineError> {
    let total = conformers.len();
    let ranked = reporter.stage(Stage::Ranking, || {
        ranking::rank(conformers, &config.ranking)
    })?;

    if ranked.is_empty() {
        return Err(EngineError::Internal(format!(
            "ranking {} conformers left none to visualize",
            total
        )));
    }
    info!(
        "{} of {} conformers will be visualized.",
        ranked.len(),
        total
    );

    let script = reporter.stage(Stage::Planning, || {
        let entries: Vec<ScriptEntry> = ranked
            .iter()
            .map(|c| ScriptEntry {
                path: structure_path(&config.structure_dir, c.id())
                    .display()
                    .to_string(),
                population_relative: c.population_relative(),
            })
            .collect();
        ChimeraxScript::from_entries(&entries, &config.script)
    });

    Ok(VisualizationPlan {
        conformers: ranked,
        script,
    })
}
