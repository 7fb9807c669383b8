pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS category (
    id INTEGER PRIMARY KEY,
    description TEXT NOT NULL UNIQUE,
    priority INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS item (
    id INTEGER PRIMARY KEY,
    quantity REAL NOT NULL,
    name TEXT NOT NULL UNIQUE,
    price REAL NOT NULL,
    done INTEGER NOT NULL DEFAULT 0,
    category_id INTEGER NOT NULL REFERENCES category(id)
);

CREATE INDEX IF NOT EXISTS idx_item_category ON item(category_id);
"#;

/// Column added after the first release; older databases lack it.
pub const ADD_CATEGORY_PRIORITY: &str =
    "ALTER TABLE category ADD COLUMN priority INTEGER NOT NULL DEFAULT 0";

/// Column added after the first release; older databases lack it.
pub const ADD_ITEM_DONE: &str = "ALTER TABLE item ADD COLUMN done INTEGER NOT NULL DEFAULT 0";
