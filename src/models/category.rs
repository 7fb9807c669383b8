use rusqlite::{params, Connection, OptionalExtension, Result, Row};

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub description: String,
    /// Display order; lower values are listed first.
    pub priority: i64,
}

impl Category {
    fn from_row(row: &Row<'_>) -> Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            description: row.get(1)?,
            priority: row.get(2)?,
        })
    }

    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        conn.query_row(
            "SELECT id, description, priority FROM category WHERE id = ?1",
            params![id],
            Self::from_row,
        )
        .optional()
    }

    /// All categories in display order (ascending priority, ties by id).
    pub fn find_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, description, priority FROM category ORDER BY priority, id"
        )?;
        let rows = stmt.query_map([], Self::from_row)?;

        rows.collect()
    }

    pub fn create(conn: &Connection, description: &str, priority: i64) -> Result<Self> {
        conn.execute(
            "INSERT INTO category (description, priority) VALUES (?1, ?2)",
            params![description, priority],
        )?;
        let id = conn.last_insert_rowid();
        Ok(Self { id, description: description.to_string(), priority })
    }

    /// Overwrite description and priority. Returns false when no row matched.
    pub fn update(conn: &Connection, id: i64, description: &str, priority: i64) -> Result<bool> {
        let changed = conn.execute(
            "UPDATE category SET description = ?1, priority = ?2 WHERE id = ?3",
            params![description, priority, id],
        )?;
        Ok(changed > 0)
    }
}
