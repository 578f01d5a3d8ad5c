use crate::core::models::conformer::Conformer;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading conformer ensembles and writing single conformers.
///
/// Implementors handle the format-specific parsing of a multi-structure file into
/// an ordered list of [`Conformer`]s, and the serialization of one conformer back
/// into a standalone file of the same format.
pub trait EnsembleFile {
    /// The error type for I/O and format errors.
    type Error: Error + From<io::Error>;

    /// Reads every conformer of an ensemble from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    ///
    /// # Return
    ///
    /// Returns the conformers in the order they appear in the input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is malformed or an I/O operation fails.
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Conformer>, Self::Error>;

    /// Writes a single conformer to a writer.
    ///
    /// # Arguments
    ///
    /// * `conformer` - The conformer to write.
    /// * `writer` - The writer to output to.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_conformer(conformer: &Conformer, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads every conformer of an ensemble from a file path.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the ensemble file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Conformer>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a single conformer to a file path, replacing any existing file.
    ///
    /// # Arguments
    ///
    /// * `conformer` - The conformer to write.
    /// * `path` - The path to the file to write.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_conformer_to_path<P: AsRef<Path>>(
        conformer: &Conformer,
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_conformer(conformer, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
