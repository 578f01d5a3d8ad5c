use crate::core::io::traits::EnsembleFile;
use crate::core::models::conformer::Conformer;
use crate::core::models::ids::ConformerId;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Ensemble file is empty")]
    EmptyEnsemble,
    #[error("Invalid atom count on line 1 (value: '{value}'); expected a positive integer")]
    InvalidAtomCount { value: String },
    #[error(
        "Ensemble has {lines} lines, which is not a multiple of the block size {block_size} (truncated or corrupt file)"
    )]
    TruncatedEnsemble { lines: usize, block_size: usize },
    #[error("Block {block} declares '{found}' atoms, expected {expected}")]
    AtomCountMismatch {
        block: usize,
        expected: usize,
        found: String,
    },
    #[error("Invalid energy in block {block} (value: '{value}')")]
    InvalidEnergy { block: usize, value: String },
}

/// Stacked multi-structure XYZ file, as written by CREST (`crest_conformers.xyz`).
///
/// Every structure occupies `N + 2` lines: the atom count `N`, a comment line whose
/// first token is the energy in Hartree, and `N` atom records that are kept verbatim.
pub struct XyzEnsemble;

impl XyzEnsemble {
    /// Splits the lines of an ensemble into conformers.
    ///
    /// Blank lines at the very end of the input are ignored; any other deviation from
    /// the block layout is reported as an error carrying the zero-based block index.
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Conformer>, XyzError> {
        let content_len = lines
            .iter()
            .rposition(|line| !line.as_ref().trim().is_empty())
            .map_or(0, |last| last + 1);
        let lines = &lines[..content_len];

        let first = lines.first().ok_or(XyzError::EmptyEnsemble)?.as_ref();
        let atom_count = parse_atom_count(first).ok_or_else(|| XyzError::InvalidAtomCount {
            value: first.trim().to_string(),
        })?;
        let block_size = atom_count + 2;

        if lines.len() % block_size != 0 {
            return Err(XyzError::TruncatedEnsemble {
                lines: lines.len(),
                block_size,
            });
        }
        let block_count = lines.len() / block_size;
        debug!("{} atoms per structure", atom_count);
        debug!(
            "{} lines in ensemble => {} conformers",
            lines.len(),
            block_count
        );

        lines
            .chunks_exact(block_size)
            .enumerate()
            .map(|(block, chunk)| {
                let header = chunk[0].as_ref();
                if parse_atom_count(header) != Some(atom_count) {
                    return Err(XyzError::AtomCountMismatch {
                        block,
                        expected: atom_count,
                        found: header.trim().to_string(),
                    });
                }

                let energy_line = chunk[1].as_ref();
                let energy = parse_energy(energy_line).ok_or_else(|| XyzError::InvalidEnergy {
                    block,
                    value: energy_line.trim().to_string(),
                })?;

                let id = ConformerId::new(block);
                trace!("Conformer {} with energy {} Eh", id, energy);
                let structure_block = chunk.iter().map(|l| l.as_ref().to_string()).collect();
                Ok(Conformer::new(id, structure_block, energy))
            })
            .collect()
    }
}

fn parse_atom_count(line: &str) -> Option<usize> {
    line.trim().parse::<usize>().ok().filter(|&n| n > 0)
}

fn parse_energy(line: &str) -> Option<f64> {
    line.split_whitespace()
        .next()?
        .parse::<f64>()
        .ok()
        .filter(|e| e.is_finite())
}

impl EnsembleFile for XyzEnsemble {
    type Error = XyzError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Conformer>, Self::Error> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        Self::parse(&lines)
    }

    fn write_conformer(conformer: &Conformer, writer: &mut impl Write) -> Result<(), Self::Error> {
        for line in conformer.structure_block() {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }
}
