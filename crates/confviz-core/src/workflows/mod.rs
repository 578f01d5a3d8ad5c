//! # Workflows Module
//!
//! High-level entry points that run the complete pipeline for a parsed ensemble.
//!
//! ## Overview
//!
//! Workflows validate the configuration, rank the conformers, and assemble everything a
//! caller needs to persist the results. They report progress through
//! [`crate::engine::progress::ProgressReporter`] and never touch the file system on
//! their own.
//!
//! - **Visualization Workflow** ([`visualize`]) - Ranking plus ChimeraX script planning

pub mod visualize;
