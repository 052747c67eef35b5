//! Final column selection and ordering.

use sales_model::{ColumnSpec, OUTPUT_COLUMNS, SalesRecord, Table, Value};

/// Builds the output table with the fixed column list, in order.
///
/// A listed column the record type does not expose is silently omitted.
/// With the typed record model this should never happen; the guard keeps
/// the projection total rather than fallible.
pub fn project(records: Vec<SalesRecord>) -> Table {
    let specs: Vec<ColumnSpec> = OUTPUT_COLUMNS
        .iter()
        .filter(|(name, _)| {
            records
                .first()
                .map_or(true, |record| record.value_of(name).is_some())
        })
        .map(|(name, ty)| ColumnSpec::new(*name, *ty))
        .collect();

    let mut table = Table::new(specs);
    for record in records {
        let row: Vec<Value> = table
            .columns
            .iter()
            .filter_map(|spec| record.value_of(&spec.name))
            .collect();
        table.push_row(row);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sales_model::CleanRecord;

    fn record() -> SalesRecord {
        SalesRecord {
            base: CleanRecord {
                order_id: "ORD-1".to_string(),
                order_date: NaiveDate::from_ymd_opt(2024, 4, 15).unwrap(),
                region: "West".to_string(),
                country: "Germany".to_string(),
                customer_id: "C-1".to_string(),
                product_id: "P-1".to_string(),
                category: "Furniture".to_string(),
                sub_category: "Chairs".to_string(),
                quantity: 2.0,
                unit_price: 10.0,
                discount: 0.1,
                profit: 4.0,
                source_file: "a.csv".to_string(),
            },
            gross_sales: 20.0,
            discount_amount: 2.0,
            net_sales: 18.0,
            margin_pct: None,
            order_year: 2024,
            order_month: 4,
            order_month_name: "Apr".to_string(),
            order_quarter: "Q2".to_string(),
        }
    }

    #[test]
    fn emits_all_columns_in_fixed_order() {
        let table = project(vec![record()]);
        let names: Vec<&str> = table.column_names();
        let expected: Vec<&str> = OUTPUT_COLUMNS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, expected);
        assert_eq!(table.height(), 1);
        assert_eq!(table.rows[0].len(), table.columns.len());
    }

    #[test]
    fn first_and_last_cells_match_the_projection_order() {
        let table = project(vec![record()]);
        assert_eq!(table.rows[0][0], Value::Text("ORD-1".to_string()));
        let last = table.rows[0].last().unwrap();
        assert_eq!(*last, Value::Text("a.csv".to_string()));
    }

    #[test]
    fn null_margin_projects_as_null() {
        let table = project(vec![record()]);
        let margin_idx = table
            .columns
            .iter()
            .position(|spec| spec.name == "margin_pct")
            .unwrap();
        assert_eq!(table.rows[0][margin_idx], Value::Null);
    }

    #[test]
    fn empty_input_keeps_the_full_column_list() {
        let table = project(Vec::new());
        assert_eq!(table.columns.len(), OUTPUT_COLUMNS.len());
        assert_eq!(table.height(), 0);
    }
}
