use rusqlite::{Connection, Result};
use super::schema::{ADD_CATEGORY_PRIORITY, ADD_ITEM_DONE, SCHEMA};

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    add_column_if_missing(conn, "category", "priority", ADD_CATEGORY_PRIORITY)?;
    add_column_if_missing(conn, "item", "done", ADD_ITEM_DONE)?;

    // Early schemas declared these columns nullable
    fill_nulls(conn, "category", "priority")?;
    fill_nulls(conn, "item", "quantity")?;
    fill_nulls(conn, "item", "price")?;
    fill_nulls(conn, "item", "done")?;
    Ok(())
}

fn add_column_if_missing(conn: &Connection, table: &str, column: &str, ddl: &str) -> Result<()> {
    let count: i32 = conn.query_row(
        "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2",
        [table, column],
        |row| row.get(0),
    )?;

    if count == 0 {
        log::info!("Adding missing column {table}.{column}");
        conn.execute_batch(ddl)?;
    }
    Ok(())
}

fn fill_nulls(conn: &Connection, table: &str, column: &str) -> Result<()> {
    let updated = conn.execute(&format!("UPDATE {table} SET {column} = 0 WHERE {column} IS NULL"), [])?;

    if updated > 0 {
        log::info!("Set {updated} NULL {table}.{column} values to 0");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::listing::Listing;
    use tempfile::{tempdir, TempDir};

    fn legacy_db(ddl: &str) -> (Database, TempDir) {
        let dir = tempdir().unwrap();
        let db = Database::open(&dir.path().join("test.db")).unwrap();
        db.connection().execute_batch(ddl).unwrap();
        (db, dir)
    }

    #[test]
    fn test_early_schema_is_upgraded() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(&db_path).unwrap();
        db.connection()
            .execute_batch(
                "CREATE TABLE category (id INTEGER PRIMARY KEY, description TEXT NOT NULL UNIQUE);
                 CREATE TABLE item (
                     id INTEGER PRIMARY KEY,
                     quantity REAL,
                     name TEXT NOT NULL UNIQUE,
                     price REAL,
                     category_id INTEGER NOT NULL REFERENCES category(id)
                 );
                 INSERT INTO category (description) VALUES ('Produce');",
            )
            .unwrap();

        run(db.connection()).unwrap();

        let priority: i64 = db.connection()
            .query_row("SELECT priority FROM category WHERE description = 'Produce'", [], |row| row.get(0))
            .unwrap();
        assert_eq!(priority, 0);

        let done_columns: i32 = db.connection()
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('item') WHERE name = 'done'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(done_columns, 1);
    }

    #[test]
    fn test_null_priority_is_filled_before_listing() {
        let (db, _dir) = legacy_db(
            "CREATE TABLE category (id INTEGER PRIMARY KEY, description TEXT NOT NULL UNIQUE, priority INTEGER);
             INSERT INTO category (description, priority) VALUES ('Dairy', 2);
             INSERT INTO category (description, priority) VALUES ('Produce', NULL);",
        );

        run(db.connection()).unwrap();

        let listing = Listing::load(db.connection()).unwrap();
        let order: Vec<(&str, i64)> = listing
            .groups
            .iter()
            .map(|g| (g.category.description.as_str(), g.category.priority))
            .collect();
        assert_eq!(order, [("Produce", 0), ("Dairy", 2)]);
    }

    #[test]
    fn test_null_item_numbers_are_filled_before_listing() {
        let (db, _dir) = legacy_db(
            "CREATE TABLE category (id INTEGER PRIMARY KEY, description TEXT NOT NULL UNIQUE);
             CREATE TABLE item (
                 id INTEGER PRIMARY KEY,
                 quantity REAL,
                 name TEXT NOT NULL UNIQUE,
                 price REAL,
                 done INTEGER,
                 category_id INTEGER NOT NULL REFERENCES category(id)
             );
             INSERT INTO category (description) VALUES ('Produce');
             INSERT INTO item (quantity, name, price, done, category_id) VALUES (2, 'Apple', NULL, NULL, 1);
             INSERT INTO item (quantity, name, price, done, category_id) VALUES (NULL, 'Pear', 3, 1, 1);
             INSERT INTO item (quantity, name, price, done, category_id) VALUES (4, 'Plum', 0.25, 0, 1);",
        );

        run(db.connection()).unwrap();

        let listing = Listing::load(db.connection()).unwrap();
        assert_eq!(listing.item_count(), 3);
        assert_eq!(listing.formatted_total(), "1.00");

        let apple = listing.groups[0].items.iter().find(|i| i.name == "Apple").unwrap();
        assert!(apple.price.abs() < f64::EPSILON);
        assert!(!apple.done);

        // Running again leaves the filled values alone
        run(db.connection()).unwrap();
        assert_eq!(Listing::load(db.connection()).unwrap().formatted_total(), "1.00");
    }
}
