use super::defaults::{CONFORMER_DIR_NAME, DefaultsConfig};
use super::file::FileConfig;
use super::models::{ConvertConfig, OverwritePolicy, RankConfig};
use crate::cli::{ConvertArgs, RankArgs, RankingArgs};
use crate::error::{CliError, Result};
use confviz::engine::config::{RankingConfig, VisualizationConfigBuilder};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub fn build_convert_config(args: &ConvertArgs) -> Result<ConvertConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = load_file_config(&args.ranking)?;

    let ranking = merge_ranking(&args.ranking, &mut file_config, &defaults);
    let script_file = file_config.script.take().unwrap_or_default();
    let output_file = file_config.output.take().unwrap_or_default();

    let refatoms = args
        .refatoms
        .clone()
        .or(script_file.refatoms)
        .unwrap_or(defaults.refatoms);
    let max_transparency = args
        .max_transparency
        .or(script_file.max_transparency)
        .unwrap_or(defaults.max_transparency);
    if !(0.0..=100.0).contains(&max_transparency) {
        return Err(CliError::Config(format!(
            "max-transparency must be between 0 and 100 percent (got {})",
            max_transparency
        )));
    }

    let output_dir = args
        .output_dir
        .clone()
        .or(output_file.directory)
        .unwrap_or_else(|| default_output_dir(&args.input));
    let policy = args
        .on_existing
        .or(output_file.on_existing)
        .unwrap_or_default();
    let write_summary = !args.no_summary && output_file.summary.unwrap_or(defaults.write_summary);
    let all_structures = args.all_structures || output_file.all_structures.unwrap_or(false);

    let structure_dir = script_relative_dir(&args.output, &output_dir)?;

    let core_config = VisualizationConfigBuilder::new()
        .energy_cutoff(ranking.energy_cutoff)
        .population_cutoff(ranking.population_cutoff)
        .temperature(ranking.temperature)
        .hartree_to_kcal_per_mol(ranking.hartree_to_kcal_per_mol)
        .refatoms(refatoms)
        .max_transparency(max_transparency)
        .structure_dir(structure_dir)
        .build()?;

    Ok(ConvertConfig {
        input_path: args.input.clone(),
        script_path: args.output.clone(),
        output_dir,
        policy,
        all_structures,
        write_summary,
        core_config,
    })
}

pub fn build_rank_config(args: &RankArgs) -> Result<RankConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = load_file_config(&args.ranking)?;
    let ranking = merge_ranking(&args.ranking, &mut file_config, &defaults);

    Ok(RankConfig {
        input_path: args.input.clone(),
        ranking,
    })
}

fn load_file_config(args: &RankingArgs) -> Result<FileConfig> {
    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };
    apply_set_values(file_config, &args.set_values)
}

fn merge_ranking(
    args: &RankingArgs,
    file_config: &mut FileConfig,
    defaults: &DefaultsConfig,
) -> RankingConfig {
    let file = file_config.ranking.take().unwrap_or_default();
    RankingConfig {
        energy_cutoff: args
            .energy_cutoff
            .or(file.energy_cutoff)
            .unwrap_or(defaults.energy_cutoff),
        population_cutoff: args
            .population_cutoff
            .or(file.population_cutoff)
            .unwrap_or(defaults.population_cutoff),
        temperature: args
            .temperature
            .or(file.temperature)
            .unwrap_or(defaults.temperature),
        hartree_to_kcal_per_mol: file
            .hartree_to_kcal_per_mol
            .unwrap_or(defaults.hartree_to_kcal_per_mol),
    }
}

/// `conformers/` in the directory that holds the ensemble file.
pub fn default_output_dir(input: &Path) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(CONFORMER_DIR_NAME)
}

/// Directory of the conformer files as it should be written into the script.
///
/// ChimeraX resolves relative paths in a command script against the script's own
/// location, so a directory below the script's folder becomes `./<relative path>`;
/// anything else is written as an absolute path.
pub fn script_relative_dir(script_path: &Path, output_dir: &Path) -> Result<PathBuf> {
    let script_path = std::path::absolute(script_path)?;
    let output_dir = std::path::absolute(output_dir)?;
    let script_dir = script_path.parent().unwrap_or_else(|| Path::new("/"));

    Ok(match output_dir.strip_prefix(script_dir) {
        Ok(relative) => Path::new(".").join(relative),
        Err(_) => output_dir,
    })
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value)))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "ranking.energy-cutoff" => {
                config.ranking.get_or_insert_with(Default::default).energy_cutoff =
                    Some(parse_value(key, value_str, "float")?);
            }
            "ranking.population-cutoff" => {
                config
                    .ranking
                    .get_or_insert_with(Default::default)
                    .population_cutoff = Some(parse_value(key, value_str, "float")?);
            }
            "ranking.temperature" => {
                config.ranking.get_or_insert_with(Default::default).temperature =
                    Some(parse_value(key, value_str, "float")?);
            }
            "ranking.hartree-to-kcal-per-mol" => {
                config
                    .ranking
                    .get_or_insert_with(Default::default)
                    .hartree_to_kcal_per_mol = Some(parse_value(key, value_str, "float")?);
            }
            "script.refatoms" => {
                config.script.get_or_insert_with(Default::default).refatoms =
                    Some(value_str.to_string());
            }
            "script.max-transparency" => {
                config
                    .script
                    .get_or_insert_with(Default::default)
                    .max_transparency = Some(parse_value(key, value_str, "float")?);
            }
            "output.directory" => {
                config.output.get_or_insert_with(Default::default).directory =
                    Some(PathBuf::from(value_str));
            }
            "output.on-existing" => {
                config.output.get_or_insert_with(Default::default).on_existing =
                    Some(parse_value::<OverwritePolicy>(key, value_str, "policy")?);
            }
            "output.summary" => {
                config.output.get_or_insert_with(Default::default).summary =
                    Some(parse_value(key, value_str, "boolean")?);
            }
            "output.all-structures" => {
                config
                    .output
                    .get_or_insert_with(Default::default)
                    .all_structures = Some(parse_value(key, value_str, "boolean")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
