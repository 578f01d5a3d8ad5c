//! # confviz Core Library
//!
//! Ranks the conformers of a stacked-XYZ ensemble by their Boltzmann populations and
//! plans a ChimeraX script that overlays the retained structures with a transparency
//! that tracks how populated each one is.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture with a strict separation of concerns:
//!
//! - **[`core`]: The Foundation.** Immutable data models (`Conformer`, `RankedConformer`),
//!   the pure Boltzmann statistics in [`core::thermo`], and the file formats (stacked XYZ
//!   ensembles, ChimeraX command scripts, CSV population summaries).
//!
//! - **[`engine`]: The Logic Core.** Ranking configuration and validation, the population
//!   ranking algorithm with its energy and cumulative-population cutoffs, error types, and
//!   progress reporting.
//!
//! - **[`workflows`]: The Public API.** End-to-end procedures that tie `core` and `engine`
//!   together, such as turning a parsed ensemble into a [`workflows::visualize::VisualizationPlan`].
//!
//! File-system side effects (creating output directories, deciding what to do with
//! existing files) are left to the caller; the library only reads and writes through the
//! handles and paths it is given.

pub mod core;
pub mod engine;
pub mod workflows;
