use super::ids::ConformerId;

/// A single structure of the ensemble, exactly as it was read.
///
/// The structure block is kept verbatim (atom count line, comment line carrying the
/// energy, and one line per atom) so it can be written back out without any loss.
#[derive(Debug, Clone, PartialEq)]
pub struct Conformer {
    id: ConformerId,
    structure_block: Vec<String>,
    energy_absolute: f64,
}

impl Conformer {
    pub fn new(id: ConformerId, structure_block: Vec<String>, energy_absolute: f64) -> Self {
        Self {
            id,
            structure_block,
            energy_absolute,
        }
    }

    pub fn id(&self) -> ConformerId {
        self.id
    }

    pub fn structure_block(&self) -> &[String] {
        &self.structure_block
    }

    /// Energy taken from the comment line, in Hartree.
    pub fn energy_absolute(&self) -> f64 {
        self.energy_absolute
    }

    pub fn atom_count(&self) -> usize {
        self.structure_block.len().saturating_sub(2)
    }
}

/// A conformer together with the quantities derived for it during ranking.
///
/// `population_relative` is the Boltzmann weight relative to the lowest-energy conformer
/// (which therefore has a value of exactly 1), while `population_normalized` is the share
/// of the total weight of the whole, unfiltered ensemble.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedConformer {
    conformer: Conformer,
    energy_relative: f64,
    population_relative: f64,
    population_normalized: f64,
}

impl RankedConformer {
    pub fn new(
        conformer: Conformer,
        energy_relative: f64,
        population_relative: f64,
        population_normalized: f64,
    ) -> Self {
        Self {
            conformer,
            energy_relative,
            population_relative,
            population_normalized,
        }
    }

    pub fn conformer(&self) -> &Conformer {
        &self.conformer
    }

    pub fn into_conformer(self) -> Conformer {
        self.conformer
    }

    pub fn id(&self) -> ConformerId {
        self.conformer.id
    }

    pub fn energy_absolute(&self) -> f64 {
        self.conformer.energy_absolute
    }

    /// Energy above the ensemble minimum, in kcal/mol.
    pub fn energy_relative(&self) -> f64 {
        self.energy_relative
    }

    pub fn population_relative(&self) -> f64 {
        self.population_relative
    }

    pub fn population_normalized(&self) -> f64 {
        self.population_normalized
    }
}
