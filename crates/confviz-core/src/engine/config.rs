use crate::core::thermo::boltzmann::{HARTREE_TO_KCAL_PER_MOL, ROOM_TEMPERATURE_K};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankingConfig {
    /// Conformers at or above this relative energy (kcal/mol) are dropped.
    pub energy_cutoff: f64,
    /// Accumulation of normalized populations stops once this value is reached.
    pub population_cutoff: f64,
    /// Temperature in Kelvin.
    pub temperature: f64,
    pub hartree_to_kcal_per_mol: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            energy_cutoff: 6.0,
            population_cutoff: 1.0,
            temperature: ROOM_TEMPERATURE_K,
            hartree_to_kcal_per_mol: HARTREE_TO_KCAL_PER_MOL,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScriptConfig {
    /// Atom specification used by the `align` command (ChimeraX syntax, `*` for all atoms).
    pub refatoms: String,
    /// Transparency in percent given to a conformer with vanishing population.
    pub max_transparency: f64,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            refatoms: "*".to_string(),
            max_transparency: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisualizationConfig {
    pub ranking: RankingConfig,
    pub script: ScriptConfig,
    /// Directory prefix of the per-conformer files as it should appear in `open` commands.
    pub structure_dir: PathBuf,
}

#[derive(Default)]
pub struct VisualizationConfigBuilder {
    energy_cutoff: Option<f64>,
    population_cutoff: Option<f64>,
    temperature: Option<f64>,
    hartree_to_kcal_per_mol: Option<f64>,
    refatoms: Option<String>,
    max_transparency: Option<f64>,
    structure_dir: Option<PathBuf>,
}

impl VisualizationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn energy_cutoff(mut self, cutoff: f64) -> Self {
        self.energy_cutoff = Some(cutoff);
        self
    }
    pub fn population_cutoff(mut self, cutoff: f64) -> Self {
        self.population_cutoff = Some(cutoff);
        self
    }
    pub fn temperature(mut self, kelvin: f64) -> Self {
        self.temperature = Some(kelvin);
        self
    }
    pub fn hartree_to_kcal_per_mol(mut self, factor: f64) -> Self {
        self.hartree_to_kcal_per_mol = Some(factor);
        self
    }
    pub fn refatoms(mut self, refatoms: impl Into<String>) -> Self {
        self.refatoms = Some(refatoms.into());
        self
    }
    pub fn max_transparency(mut self, percent: f64) -> Self {
        self.max_transparency = Some(percent);
        self
    }
    pub fn structure_dir(mut self, dir: PathBuf) -> Self {
        self.structure_dir = Some(dir);
        self
    }

    /// Assembles the configuration.
    ///
    /// Cutoffs, script settings and the structure directory are required; the temperature
    /// and unit conversion fall back to 298.15 K and 625.5 kcal/mol per Hartree.
    /// Values are not range-checked here; the ranking step rejects nonsensical ones.
    pub fn build(self) -> Result<VisualizationConfig, ConfigError> {
        let ranking = RankingConfig {
            energy_cutoff: self
                .energy_cutoff
                .ok_or(ConfigError::MissingParameter("energy_cutoff"))?,
            population_cutoff: self
                .population_cutoff
                .ok_or(ConfigError::MissingParameter("population_cutoff"))?,
            temperature: self.temperature.unwrap_or(ROOM_TEMPERATURE_K),
            hartree_to_kcal_per_mol: self
                .hartree_to_kcal_per_mol
                .unwrap_or(HARTREE_TO_KCAL_PER_MOL),
        };
        let script = ScriptConfig {
            refatoms: self
                .refatoms
                .ok_or(ConfigError::MissingParameter("refatoms"))?,
            max_transparency: self
                .max_transparency
                .ok_or(ConfigError::MissingParameter("max_transparency"))?,
        };
        Ok(VisualizationConfig {
            ranking,
            script,
            structure_dir: self
                .structure_dir
                .ok_or(ConfigError::MissingParameter("structure_dir"))?,
        })
    }
}
