use super::config::RankingConfig;
use super::error::EngineError;
use crate::core::models::conformer::{Conformer, RankedConformer};
use crate::core::thermo::boltzmann::{boltzmann_factor, relative_energy};
use tracing::{debug, info, instrument, warn};

/// Ranks an ensemble by Boltzmann population and applies both cutoffs.
///
/// The result is in ascending relative-energy order (ties keep parse order) and always
/// starts with the lowest-energy conformer. Normalized populations refer to the whole
/// input, not to the retained subset.
///
/// # Errors
///
/// Returns [`EngineError::InvalidParameter`] for NaN or non-positive cutoffs, a non-positive
/// or non-finite temperature or conversion factor, and [`EngineError::EmptyEnsemble`] for
/// empty input. An infinite cutoff disables that filter.
#[instrument(skip_all, fields(conformers = conformers.len()))]
pub fn rank(
    conformers: Vec<Conformer>,
    config: &RankingConfig,
) -> Result<Vec<RankedConformer>, EngineError> {
    validate(config)?;
    let weighted = boltzmann_weights(conformers, config)?;
    let total = weighted.len();
    let retained = apply_cutoffs(weighted, config.energy_cutoff, config.population_cutoff);
    info!(
        "Retained {} of {} conformers (energy cutoff {} kcal/mol, population cutoff {}).",
        retained.len(),
        total,
        config.energy_cutoff,
        config.population_cutoff
    );
    Ok(retained)
}

/// Computes relative energies and populations for every conformer and sorts by energy.
///
/// No conformer is dropped here.
pub fn boltzmann_weights(
    conformers: Vec<Conformer>,
    config: &RankingConfig,
) -> Result<Vec<RankedConformer>, EngineError> {
    validate_physics(config)?;

    let reference = conformers
        .iter()
        .map(Conformer::energy_absolute)
        .reduce(f64::min)
        .ok_or(EngineError::EmptyEnsemble)?;

    let energies: Vec<f64> = conformers
        .iter()
        .map(|c| relative_energy(c.energy_absolute(), reference, config.hartree_to_kcal_per_mol))
        .collect();
    let weights: Vec<f64> = energies
        .iter()
        .map(|&e| boltzmann_factor(e, config.temperature))
        .collect();
    let underflowed = weights.iter().filter(|&&w| w == 0.0).count();
    if underflowed > 0 {
        warn!(
            "{} conformer(s) lie so far above the minimum that their Boltzmann population underflows to zero.",
            underflowed
        );
    }
    let partition_sum: f64 = weights.iter().sum();
    debug!(
        "Minimum energy {} Eh, partition sum {:.6}",
        reference, partition_sum
    );

    let mut ranked: Vec<RankedConformer> = conformers
        .into_iter()
        .zip(energies)
        .zip(weights)
        .map(|((conformer, energy), weight)| {
            RankedConformer::new(conformer, energy, weight, weight / partition_sum)
        })
        .collect();
    ranked.sort_by(|a, b| a.energy_relative().total_cmp(&b.energy_relative()));

    for c in &ranked {
        debug!(
            "{}: {:.4} kcal/mol, relative population {:.4}, normalized population {:.4}",
            c.id(),
            c.energy_relative(),
            c.population_relative(),
            c.population_normalized()
        );
    }
    Ok(ranked)
}

/// Applies the energy cutoff and then the cumulative population cutoff to a ranked list.
///
/// A conformer is kept only if its relative energy is strictly below `energy_cutoff`.
/// Normalized populations are then accumulated in order; the conformer whose population
/// makes the running total reach `population_cutoff` is the last one kept. A population
/// cutoff of 1 or more keeps everything that passed the energy cutoff.
///
/// The input must already be sorted by energy. Applying the cutoffs to their own output
/// returns it unchanged.
pub fn apply_cutoffs(
    ranked: Vec<RankedConformer>,
    energy_cutoff: f64,
    population_cutoff: f64,
) -> Vec<RankedConformer> {
    let limit_population = population_cutoff < 1.0;
    let mut cumulative = 0.0;
    let mut retained = Vec::new();

    for conformer in ranked
        .into_iter()
        .filter(|c| c.energy_relative() < energy_cutoff)
    {
        cumulative += conformer.population_normalized();
        retained.push(conformer);
        if limit_population && cumulative >= population_cutoff {
            break;
        }
    }
    retained
}

fn validate(config: &RankingConfig) -> Result<(), EngineError> {
    require_positive_cutoff("energy_cutoff", config.energy_cutoff)?;
    require_positive_cutoff("population_cutoff", config.population_cutoff)?;
    validate_physics(config)
}

// Infinite cutoffs are allowed and simply keep everything.
fn require_positive_cutoff(name: &'static str, value: f64) -> Result<(), EngineError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidParameter {
            name,
            reason: format!("must be a positive number (got {})", value),
        })
    }
}

fn validate_physics(config: &RankingConfig) -> Result<(), EngineError> {
    require_positive("temperature", config.temperature)?;
    require_positive("hartree_to_kcal_per_mol", config.hartree_to_kcal_per_mol)
}

fn require_positive(name: &'static str, value: f64) -> Result<(), EngineError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidParameter {
            name,
            reason: format!("must be a positive, finite number (got {})", value),
        })
    }
}
