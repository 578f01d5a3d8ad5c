/// Molar gas constant in kcal/(mol·K).
pub const GAS_CONSTANT_KCAL_PER_MOL_K: f64 = 1.9872036e-3;
/// Hartree to kcal/mol conversion factor used for CREST energies.
pub const HARTREE_TO_KCAL_PER_MOL: f64 = 625.5;
/// Default temperature in Kelvin.
pub const ROOM_TEMPERATURE_K: f64 = 298.15;

/// Returns `RT` in kcal/mol.
#[inline]
pub fn thermal_energy(temperature: f64) -> f64 {
    GAS_CONSTANT_KCAL_PER_MOL_K * temperature
}

/// Converts an absolute energy into kcal/mol above `reference`.
#[inline]
pub fn relative_energy(energy: f64, reference: f64, hartree_to_kcal_per_mol: f64) -> f64 {
    (energy - reference) * hartree_to_kcal_per_mol
}

/// Boltzmann factor `exp(-ΔE / RT)` of a state `energy_relative` kcal/mol above the minimum.
#[inline]
pub fn boltzmann_factor(energy_relative: f64, temperature: f64) -> f64 {
    (-energy_relative / thermal_energy(temperature)).exp()
}
