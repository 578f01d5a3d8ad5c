pub mod convert;
pub mod rank;
