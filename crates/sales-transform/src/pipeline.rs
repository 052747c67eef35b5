//! The transform pipeline with explicit ordered stages.
//!
//! Stages run strictly left to right, each consuming the previous
//! stage's dataset by value and producing a new one:
//!
//! 1. **Normalize**: lowercase/trim column names, verify required schema
//! 2. **Clean**: parse dates and numerics, drop invalid rows, normalize
//!    categorical text
//! 3. **Enrich**: derive KPI and calendar columns
//! 4. **Dedupe**: first-wins on (`order_id`, `product_id`)
//! 5. **Project**: fixed output column selection and order

use tracing::{info, info_span};

use sales_model::{RawTable, Table};

use crate::clean::{CleanReport, clean};
use crate::dedupe::dedupe;
use crate::error::Result;
use crate::kpi::enrich;
use crate::project::project;
use crate::schema::normalize_schema;

/// Output of a full transform run.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// The projected output table, ready for the writers.
    pub table: Table,
    /// Drop accounting from the cleaning stage.
    pub report: CleanReport,
    /// Rows removed by deduplication.
    pub duplicates_removed: usize,
}

/// Runs the full transform on the combined raw dataset.
///
/// Deterministic: the same input table always produces the same output.
pub fn run(raw: RawTable) -> Result<PipelineOutput> {
    let input_rows = raw.height();

    let normalized = info_span!("normalize_schema").in_scope(|| normalize_schema(raw))?;

    let outcome = info_span!("clean").in_scope(|| clean(normalized))?;
    info!(
        input = input_rows,
        kept = outcome.report.kept,
        dropped = outcome.report.dropped_total(),
        "cleaning complete"
    );

    let enriched = info_span!("enrich").in_scope(|| enrich(outcome.records));

    let (unique, duplicates_removed) = info_span!("dedupe").in_scope(|| dedupe(enriched));
    if duplicates_removed > 0 {
        info!(duplicates_removed, "removed duplicate order/product rows");
    }

    let table = info_span!("project").in_scope(|| project(unique));
    info!(
        rows = table.height(),
        columns = table.columns.len(),
        "cleaned dataset ready"
    );

    Ok(PipelineOutput {
        table,
        report: outcome.report,
        duplicates_removed,
    })
}
