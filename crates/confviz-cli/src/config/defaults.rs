use confviz::core::thermo::boltzmann::{HARTREE_TO_KCAL_PER_MOL, ROOM_TEMPERATURE_K};

pub const CONFORMER_DIR_NAME: &str = "conformers";
pub const SUMMARY_FILE_NAME: &str = "populations.csv";

pub struct DefaultsConfig {
    pub energy_cutoff: f64,
    pub population_cutoff: f64,
    pub temperature: f64,
    pub hartree_to_kcal_per_mol: f64,
    pub refatoms: String,
    pub max_transparency: f64,
    pub write_summary: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            energy_cutoff: 6.0,
            population_cutoff: 1.0,
            temperature: ROOM_TEMPERATURE_K,
            hartree_to_kcal_per_mol: HARTREE_TO_KCAL_PER_MOL,
            refatoms: "*".to_string(),
            max_transparency: 100.0,
            write_summary: true,
        }
    }
}
