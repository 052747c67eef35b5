//! KPI derivation and calendar enrichment.
//!
//! Attaches derived columns deterministically from existing ones. No row
//! is ever removed here, and no rounding is applied anywhere.

use chrono::Datelike;

use sales_model::{CleanRecord, SalesRecord};

/// Derives KPI and calendar fields for every record.
pub fn enrich(records: Vec<CleanRecord>) -> Vec<SalesRecord> {
    records.into_iter().map(enrich_record).collect()
}

fn enrich_record(record: CleanRecord) -> SalesRecord {
    let gross_sales = record.quantity * record.unit_price;
    let discount_amount = gross_sales * record.discount;
    let net_sales = gross_sales - discount_amount;
    // Division is never attempted on a zero denominator; negative net
    // sales divide normally.
    let margin_pct = if net_sales == 0.0 {
        None
    } else {
        Some(record.profit / net_sales)
    };

    let date = record.order_date;
    let order_year = date.year();
    let order_month = date.month();
    let order_month_name = date.format("%b").to_string();
    let order_quarter = format!("Q{}", ((order_month - 1) / 3) + 1);

    SalesRecord {
        base: record,
        gross_sales,
        discount_amount,
        net_sales,
        margin_pct,
        order_year,
        order_month,
        order_month_name,
        order_quarter,
    }
}
