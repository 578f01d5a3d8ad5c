use crate::engine::config::ScriptConfig;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// A single ChimeraX command emitted into a `.cxc` script.
///
/// Models are numbered from 1 in the order they are opened.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Open {
        path: String,
    },
    Transparency {
        model: usize,
        percent: f64,
    },
    Align {
        model: usize,
        reference: usize,
        atoms: String,
    },
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Open { path } => {
                if path.chars().any(char::is_whitespace) {
                    write!(f, "open \"{}\"", path)
                } else {
                    write!(f, "open {}", path)
                }
            }
            Command::Transparency { model, percent } => {
                write!(f, "transparency #{} {:.2} target ab", model, percent)
            }
            Command::Align {
                model,
                reference,
                atoms,
            } => write!(
                f,
                "align #{}@{} toAtoms #{}@{}",
                model, atoms, reference, atoms
            ),
        }
    }
}

/// What the script needs to know about one structure: where it lives and how populated it is.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptEntry {
    pub path: String,
    pub population_relative: f64,
}

/// Maps a relative population onto a transparency percentage.
///
/// The most populated conformer (`population_relative == 1`) is fully opaque, and the
/// transparency rises linearly towards `max_transparency` as the population vanishes.
#[inline]
pub fn transparency_percent(population_relative: f64, max_transparency: f64) -> f64 {
    max_transparency * (1.0 - population_relative)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChimeraxScript {
    commands: Vec<Command>,
}

impl ChimeraxScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the overlay script for `entries`, which must already be in display order.
    ///
    /// Every structure is opened and given a population-dependent transparency; all but
    /// the first are then aligned onto the first one using `config.refatoms`.
    pub fn from_entries(entries: &[ScriptEntry], config: &ScriptConfig) -> Self {
        let mut script = Self::new();
        for (i, entry) in entries.iter().enumerate() {
            let model = i + 1;
            script.push(Command::Open {
                path: entry.path.clone(),
            });
            script.push(Command::Transparency {
                model,
                percent: transparency_percent(entry.population_relative, config.max_transparency),
            });
            if i == 0 {
                continue;
            }
            script.push(Command::Align {
                model,
                reference: 1,
                atoms: config.refatoms.clone(),
            });
        }
        script
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        for command in &self.commands {
            writeln!(writer, "{}", command)?;
        }
        Ok(())
    }

    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()
    }
}

impl fmt::Display for ChimeraxScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for command in &self.commands {
            writeln!(f, "{}", command)?;
        }
        Ok(())
    }
}
