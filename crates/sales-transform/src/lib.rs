//! Core sales ETL transform.
//!
//! Pure, single-pass, in-memory: schema validation, type coercion and
//! cleaning, KPI derivation, calendar enrichment, deduplication, and the
//! final column projection. I/O lives in `sales-ingest` and
//! `sales-output`; this crate only ever sees in-memory tables.

mod clean;
mod datetime;
mod dedupe;
mod error;
mod kpi;
mod numeric;
mod pipeline;
mod project;
mod schema;
mod text;

pub use clean::{CleanOutcome, CleanReport, clean};
pub use datetime::parse_date;
pub use dedupe::dedupe;
pub use error::{Result, TransformError};
pub use kpi::enrich;
pub use numeric::parse_f64;
pub use pipeline::{PipelineOutput, run};
pub use project::project;
pub use schema::normalize_schema;
pub use text::title_case;
