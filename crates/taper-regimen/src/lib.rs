//! taper-regimen
//!
//! Inpatient benzodiazepine taper schedules and standard-drink arithmetic.
//! Every drug and severity tier combination has a schedule, derived from one
//! diazepam-milligram base table, so the lookups here are total and nothing
//! returns a Result.

pub mod benzo;
pub mod drinks;
pub mod view;
