use crate::core::models::conformer::RankedConformer;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize)]
struct PopulationRecord {
    id: String,
    energy_hartree: f64,
    energy_relative_kcal_mol: f64,
    population_relative: f64,
    population_normalized: f64,
    cumulative_population: f64,
}

fn records(ranked: &[RankedConformer]) -> impl Iterator<Item = PopulationRecord> + '_ {
    ranked.iter().scan(0.0, |cumulative, conformer| {
        *cumulative += conformer.population_normalized();
        Some(PopulationRecord {
            id: conformer.id().to_string(),
            energy_hartree: conformer.energy_absolute(),
            energy_relative_kcal_mol: conformer.energy_relative(),
            population_relative: conformer.population_relative(),
            population_normalized: conformer.population_normalized(),
            cumulative_population: *cumulative,
        })
    })
}

/// Writes one CSV row per ranked conformer, in the order given, with a header row.
pub fn write_summary<W: Write>(ranked: &[RankedConformer], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records(ranked) {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_summary_to_path<P: AsRef<Path>>(
    ranked: &[RankedConformer],
    path: P,
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_path(path)?;
    for record in records(ranked) {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::conformer::Conformer;
    use crate::core::models::ids::ConformerId;
    use tempfile::tempdir;

    fn ranked(index: usize, energy: f64, rel: f64, p_rel: f64, p_norm: f64) -> RankedConformer {
        let block = vec!["1".to_string(), energy.to_string(), "H 0 0 0".to_string()];
        let conformer = Conformer::new(ConformerId::new(index), block, energy);
        RankedConformer::new(conformer, rel, p_rel, p_norm)
    }

    #[test]
    fn write_summary_emits_header_and_cumulative_population() {
        let rows = [
            ranked(2, -10.5, 0.0, 1.0, 0.75),
            ranked(0, -10.499, 0.6255, 0.25, 0.25),
        ];
        let mut buffer = Vec::new();
        write_summary(&rows, &mut buffer).unwrap();

        let mut reader = csv::Reader::from_reader(buffer.as_slice());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            [
                "id",
                "energy_hartree",
                "energy_relative_kcal_mol",
                "population_relative",
                "population_normalized",
                "cumulative_population"
            ]
        );

        let records: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][0], "c2");
        assert_eq!(&records[1][0], "c0");
        assert_eq!(records[1][5].parse::<f64>().unwrap(), 1.0);
    }

    #[test]
    fn write_summary_to_path_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("populations.csv");
        write_summary_to_path(&[ranked(0, -1.0, 0.0, 1.0, 1.0)], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("id,energy_hartree,"));
        assert_eq!(content.lines().count(), 2);
    }
}
