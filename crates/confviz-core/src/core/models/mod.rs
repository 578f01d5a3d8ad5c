//! # Core Models Module
//!
//! Data structures describing the members of a conformer ensemble.
//!
//! ## Key Components
//!
//! - [`ids`] - The stable, parse-order identifier of a conformer (`c0`, `c1`, ...)
//! - [`conformer`] - The immutable parsed record and the ranked record derived from it
//!
//! Records are never decorated in place. Parsing yields [`conformer::Conformer`] values and
//! ranking yields brand-new [`conformer::RankedConformer`] values that wrap them, so no
//! partially initialized record can ever be observed.

pub mod conformer;
pub mod ids;
