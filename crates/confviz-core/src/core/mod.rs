//! # Core Module
//!
//! Stateless building blocks shared by the ranking engine and the workflows.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Parsed conformers, their stable identifiers, and the
//!   ranked records derived from them
//! - **Statistical Mechanics** ([`thermo`]) - Unit conversion and Boltzmann weighting
//! - **File I/O** ([`io`]) - Stacked XYZ ensembles, ChimeraX scripts, and CSV summaries
//!
//! Nothing in this module touches global process state. Temperatures, conversion
//! factors and output locations are always passed in explicitly.

pub mod io;
pub mod models;
pub mod thermo;
