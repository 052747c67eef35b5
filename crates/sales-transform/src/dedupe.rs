//! First-wins deduplication on the (`order_id`, `product_id`) pair.

use std::collections::BTreeSet;

use sales_model::SalesRecord;

/// Removes duplicate (`order_id`, `product_id`) rows, keeping the first
/// occurrence in current row order. Row order is never changed by earlier
/// stages, so "first" means first in file-concatenation order.
///
/// Returns the surviving records and the number removed.
pub fn dedupe(records: Vec<SalesRecord>) -> (Vec<SalesRecord>, usize) {
    let input = records.len();
    let mut seen: BTreeSet<(String, String)> = BTreeSet::new();
    let mut kept = Vec::with_capacity(input);
    for record in records {
        if seen.insert(record.dedup_key()) {
            kept.push(record);
        }
    }
    let removed = input - kept.len();
    (kept, removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sales_model::CleanRecord;

    fn record(order_id: &str, product_id: &str, region: &str) -> SalesRecord {
        SalesRecord {
            base: CleanRecord {
                order_id: order_id.to_string(),
                order_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                region: region.to_string(),
                country: "Germany".to_string(),
                customer_id: "C-1".to_string(),
                product_id: product_id.to_string(),
                category: "Furniture".to_string(),
                sub_category: "Chairs".to_string(),
                quantity: 1.0,
                unit_price: 1.0,
                discount: 0.0,
                profit: 0.0,
                source_file: "a.csv".to_string(),
            },
            gross_sales: 1.0,
            discount_amount: 0.0,
            net_sales: 1.0,
            margin_pct: Some(0.0),
            order_year: 2024,
            order_month: 1,
            order_month_name: "Jan".to_string(),
            order_quarter: "Q1".to_string(),
        }
    }

    #[test]
    fn first_occurrence_wins() {
        let (kept, removed) = dedupe(vec![
            record("ORD-1", "P-1", "West"),
            record("ORD-1", "P-1", "East"),
            record("ORD-1", "P-2", "South"),
        ]);
        assert_eq!(kept.len(), 2);
        assert_eq!(removed, 1);
        assert_eq!(kept[0].base.region, "West");
        assert_eq!(kept[1].base.product_id, "P-2");
    }

    #[test]
    fn same_order_different_product_is_not_a_duplicate() {
        let (kept, removed) = dedupe(vec![
            record("ORD-1", "P-1", "West"),
            record("ORD-1", "P-2", "West"),
            record("ORD-2", "P-1", "West"),
        ]);
        assert_eq!(kept.len(), 3);
        assert_eq!(removed, 0);
    }
}
