//! Category-grouped listing with a running total.
//!
//! Items arrive sorted by name and are partitioned into per-category buckets
//! without re-sorting, so every bucket stays name-ordered. Buckets are then
//! emitted in category display order.

use crate::error::AppError;
use crate::models::{Category, Item};
use rusqlite::Connection;
use std::collections::{HashMap, HashSet};

/// One category section of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub category: Category,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub groups: Vec<CategoryGroup>,
    /// Sum of quantity * price over every item.
    pub total: f64,
}

impl Listing {
    /// Load categories and items from the store and aggregate them.
    pub fn load(conn: &Connection) -> Result<Self, AppError> {
        let categories = Category::find_all(conn)?;
        let items = Item::find_all(conn)?;
        aggregate(categories, items)
    }

    pub fn formatted_total(&self) -> String {
        format_total(self.total)
    }

    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }
}

/// Group `items` under `categories`.
///
/// `categories` must already be in display order and `items` in name order;
/// both orders carry through to the result. A category without items yields
/// an empty group. An item whose category is not in `categories` fails the
/// whole listing with `NotFound`.
pub fn aggregate(categories: Vec<Category>, items: Vec<Item>) -> Result<Listing, AppError> {
    let known: HashSet<i64> = categories.iter().map(|c| c.id).collect();
    let mut buckets: HashMap<i64, Vec<Item>> = HashMap::new();
    let mut total = 0.0;

    for item in items {
        if !known.contains(&item.category_id) {
            log::warn!(
                "Item {} ('{}') references missing category {}",
                item.id,
                item.name,
                item.category_id
            );
            return Err(AppError::NotFound { entity: "Category" });
        }
        total += item.cost();
        buckets.entry(item.category_id).or_default().push(item);
    }

    let groups = categories
        .into_iter()
        .map(|category| {
            let items = buckets.remove(&category.id).unwrap_or_default();
            CategoryGroup { category, items }
        })
        .collect();

    Ok(Listing { groups, total })
}

/// Format an amount with two decimals and comma thousands separators,
/// e.g. `1234.5` becomes `"1,234.50"`.
pub fn format_total(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits = whole.len();
    let mut grouped = String::with_capacity(digits + digits / 3 + 4);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // "-0.00" reads wrong; only keep the sign when something survives rounding
    let negative = amount.is_sign_negative() && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}
