//! # Thermochemistry Module
//!
//! Pure functions for converting electronic energies into relative energies and
//! Boltzmann weights. See [`boltzmann`] for the constants and formulas used.

pub mod boltzmann;
