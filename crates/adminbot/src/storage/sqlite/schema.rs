//! SQLite schema definitions and SQL query constants.

/// SQL statement to create the allow-list table.
pub const CREATE_ADMINS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS admins (
    user_id INTEGER PRIMARY KEY
);
"#;

pub const INSERT_ADMIN: &str = r#"
INSERT OR IGNORE INTO admins (user_id)
VALUES (?1)
"#;

pub const DELETE_ADMIN: &str = r#"
DELETE FROM admins
WHERE user_id = ?1
"#;

pub const SELECT_ADMINS: &str = r#"
SELECT user_id
FROM admins
"#;

pub const SELECT_ADMIN_EXISTS: &str = r#"
SELECT EXISTS (SELECT 1 FROM admins WHERE user_id = ?1)
"#;
