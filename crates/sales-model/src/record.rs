use chrono::NaiveDate;

use crate::table::Value;

/// A row that survived schema validation and all cleaning filters.
///
/// Invariants established by the cleaner: `order_date` parsed, all four
/// numeric fields parsed, `quantity > 0`, `unit_price >= 0`, categorical
/// fields trimmed and title-cased.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CleanRecord {
    pub order_id: String,
    pub order_date: NaiveDate,
    pub region: String,
    pub country: String,
    pub customer_id: String,
    pub product_id: String,
    pub category: String,
    pub sub_category: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub discount: f64,
    pub profit: f64,
    pub source_file: String,
}

/// A [`CleanRecord`] enriched with derived KPI and calendar fields.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SalesRecord {
    pub base: CleanRecord,
    pub gross_sales: f64,
    pub discount_amount: f64,
    pub net_sales: f64,
    /// `profit / net_sales`; `None` when `net_sales` is exactly zero.
    pub margin_pct: Option<f64>,
    pub order_year: i32,
    /// 1-based calendar month.
    pub order_month: u32,
    /// Three-letter English month abbreviation, e.g. `"Apr"`.
    pub order_month_name: String,
    /// `"Q1"` through `"Q4"`.
    pub order_quarter: String,
}

impl SalesRecord {
    /// Look up an output column by name.
    ///
    /// Returns `None` for column names this record does not expose, which
    /// lets the projector skip unknown columns instead of failing.
    pub fn value_of(&self, column: &str) -> Option<Value> {
        let value = match column {
            "order_id" => Value::Text(self.base.order_id.clone()),
            "order_date" => Value::Date(self.base.order_date),
            "order_year" => Value::Int(i64::from(self.order_year)),
            "order_quarter" => Value::Text(self.order_quarter.clone()),
            "order_month" => Value::Int(i64::from(self.order_month)),
            "order_month_name" => Value::Text(self.order_month_name.clone()),
            "region" => Value::Text(self.base.region.clone()),
            "country" => Value::Text(self.base.country.clone()),
            "customer_id" => Value::Text(self.base.customer_id.clone()),
            "product_id" => Value::Text(self.base.product_id.clone()),
            "category" => Value::Text(self.base.category.clone()),
            "sub_category" => Value::Text(self.base.sub_category.clone()),
            "quantity" => Value::Float(self.base.quantity),
            "unit_price" => Value::Float(self.base.unit_price),
            "discount" => Value::Float(self.base.discount),
            "gross_sales" => Value::Float(self.gross_sales),
            "discount_amount" => Value::Float(self.discount_amount),
            "net_sales" => Value::Float(self.net_sales),
            "profit" => Value::Float(self.base.profit),
            "margin_pct" => match self.margin_pct {
                Some(pct) => Value::Float(pct),
                None => Value::Null,
            },
            "source_file" => Value::Text(self.base.source_file.clone()),
            _ => return None,
        };
        Some(value)
    }

    /// Dedup key: the (`order_id`, `product_id`) pair.
    pub fn dedup_key(&self) -> (String, String) {
        (self.base.order_id.clone(), self.base.product_id.clone())
    }
}
