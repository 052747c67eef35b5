//! CLI library components for the sales ETL job.

pub mod logging;
pub mod run;
