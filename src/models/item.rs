use rusqlite::{params, Connection, OptionalExtension, Result, Row};

/// A purchasable entry belonging to exactly one category.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i64,
    pub quantity: f64,
    pub name: String,
    pub price: f64,
    /// Whether the item has been bought.
    pub done: bool,
    pub category_id: i64,
}

/// Field values for creating or overwriting an item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFields<'a> {
    pub quantity: f64,
    pub name: &'a str,
    pub price: f64,
    pub category_id: i64,
}

impl Item {
    fn from_row(row: &Row<'_>) -> Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            quantity: row.get(1)?,
            name: row.get(2)?,
            price: row.get(3)?,
            done: row.get::<_, i32>(4)? != 0,
            category_id: row.get(5)?,
        })
    }

    /// Line cost: quantity times unit price.
    pub fn cost(&self) -> f64 {
        self.quantity * self.price
    }

    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        conn.query_row(
            "SELECT id, quantity, name, price, done, category_id FROM item WHERE id = ?1",
            params![id],
            Self::from_row,
        )
        .optional()
    }

    /// All items ordered by name.
    pub fn find_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, quantity, name, price, done, category_id FROM item ORDER BY name"
        )?;
        let rows = stmt.query_map([], Self::from_row)?;

        rows.collect()
    }

    /// Insert a new item. New items always start with `done = false`.
    pub fn create(conn: &Connection, fields: &ItemFields<'_>) -> Result<Self> {
        conn.execute(
            "INSERT INTO item (quantity, name, price, done, category_id) VALUES (?1, ?2, ?3, 0, ?4)",
            params![fields.quantity, fields.name, fields.price, fields.category_id],
        )?;
        let id = conn.last_insert_rowid();
        Ok(Self {
            id,
            quantity: fields.quantity,
            name: fields.name.to_string(),
            price: fields.price,
            done: false,
            category_id: fields.category_id,
        })
    }

    /// Overwrite quantity, name, price and category. `done` is left untouched.
    pub fn update(conn: &Connection, id: i64, fields: &ItemFields<'_>) -> Result<bool> {
        let changed = conn.execute(
            "UPDATE item SET quantity = ?1, name = ?2, price = ?3, category_id = ?4 WHERE id = ?5",
            params![fields.quantity, fields.name, fields.price, fields.category_id, id],
        )?;
        Ok(changed > 0)
    }

    pub fn set_done(conn: &Connection, id: i64, done: bool) -> Result<bool> {
        let changed = conn.execute(
            "UPDATE item SET done = ?1 WHERE id = ?2",
            params![i32::from(done), id],
        )?;
        Ok(changed > 0)
    }
}
