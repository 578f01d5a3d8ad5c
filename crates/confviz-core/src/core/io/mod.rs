//! Provides input/output functionality for conformer ensembles and their visualization.
//!
//! This module contains the reader and writer for stacked XYZ ensembles, the renderer for
//! ChimeraX command scripts, and a CSV writer for population summaries. Ensemble formats
//! share the trait-based interface in [`traits`].

pub mod chimerax;
pub mod summary;
pub mod traits;
pub mod xyz;
