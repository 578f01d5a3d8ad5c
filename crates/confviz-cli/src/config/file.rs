use super::models::OverwritePolicy;
use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileRankingConfig {
    pub energy_cutoff: Option<f64>,
    pub population_cutoff: Option<f64>,
    pub temperature: Option<f64>,
    pub hartree_to_kcal_per_mol: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileScriptConfig {
    pub refatoms: Option<String>,
    pub max_transparency: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileOutputConfig {
    pub directory: Option<PathBuf>,
    pub on_existing: Option<OverwritePolicy>,
    pub summary: Option<bool>,
    pub all_structures: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub ranking: Option<FileRankingConfig>,
    pub script: Option<FileScriptConfig>,
    pub output: Option<FileOutputConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn from_file_reads_all_sections() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("confviz.toml");
        fs::write(
            &path,
            r#"
            [ranking]
            energy-cutoff = 3.0
            population-cutoff = 0.95
            temperature = 310.0

            [script]
            refatoms = "C1,C2,N3"
            max-transparency = 75.0

            [output]
            directory = "structures"
            on-existing = "skip"
            summary = false
            "#,
        )
        .unwrap();

        let config = FileConfig::from_file(&path).unwrap();
        let ranking = config.ranking.unwrap();
        assert_eq!(ranking.energy_cutoff, Some(3.0));
        assert_eq!(ranking.population_cutoff, Some(0.95));
        assert_eq!(ranking.temperature, Some(310.0));
        assert_eq!(ranking.hartree_to_kcal_per_mol, None);

        let script = config.script.unwrap();
        assert_eq!(script.refatoms.as_deref(), Some("C1,C2,N3"));
        assert_eq!(script.max_transparency, Some(75.0));

        let output = config.output.unwrap();
        assert_eq!(output.directory, Some(PathBuf::from("structures")));
        assert_eq!(output.on_existing, Some(OverwritePolicy::Skip));
        assert_eq!(output.summary, Some(false));
    }

    #[test]
    fn from_file_rejects_unknown_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("confviz.toml");
        fs::write(&path, "[ranking]\nenergy = 3.0\n").unwrap();

        let result = FileConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn from_file_reports_missing_file_as_io_error() {
        let dir = tempdir().unwrap();
        let result = FileConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
