//! # Engine Module
//!
//! Turns parsed conformers into a ranked, filtered population list.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Ranking thresholds, temperature, script settings, and
//!   their builder
//! - **Ranking** ([`ranking`]) - Boltzmann weighting, energy ordering, and the energy and
//!   cumulative-population cutoffs
//! - **Progress Monitoring** ([`progress`]) - Stage and task events for user feedback
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! Normalized populations are always computed over the complete ensemble before any
//! cutoff is applied, so filtering never changes the populations of the survivors.

pub mod config;
pub mod error;
pub mod progress;
pub mod ranking;
