//! Database operations for Roster

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::path::Path;

use crate::error::{DbError, Result};
use crate::types::{Class, Group, Student};

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (or create) the database at `db_path` and apply migrations
    pub async fn new(db_path: &str) -> Result<Self> {
        // Expand path and create parent directories
        let expanded_path = shellexpand::tilde(db_path).to_string();
        let path = Path::new(&expanded_path);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(DbError::IoError)?;
        }

        // Use forward slashes for SQLite URL (works on both Windows and Unix)
        // Use mode=rwc to allow creating the database file if it doesn't exist
        let db_url = format!("sqlite://{}?mode=rwc", expanded_path.replace('\\', "/"));

        Self::connect(&db_url).await
    }

    /// Open a private in-memory database with the full schema
    pub async fn in_memory() -> Result<Self> {
        Self::connect("sqlite::memory:").await
    }

    async fn connect(db_url: &str) -> Result<Self> {
        // One connection for the whole process. An in-memory database lives
        // only as long as its connection, so it must never be recycled.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect(db_url)
            .await
            .map_err(DbError::SqlxError)?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(DbError::MigrationError)?;

        tracing::debug!("Database ready at {}", db_url);

        Ok(Self { pool })
    }

    /// Close the connection. Further calls fail with a pool-closed error.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Insert a student together with its (unassigned) group row
    ///
    /// Both inserts run in a single transaction, so a student never exists
    /// without its group row.
    pub async fn add_student(&self, name: &str, surname: &str) -> Result<Student> {
        let mut tx = self.pool.begin().await.map_err(DbError::SqlxError)?;

        let id = sqlx::query(
            r#"
            INSERT INTO students (name, surname) VALUES (?, ?)
            "#,
        )
        .bind(name)
        .bind(surname)
        .execute(&mut *tx)
        .await
        .map_err(DbError::SqlxError)?
        .last_insert_rowid();

        sqlx::query(
            r#"
            INSERT INTO groups (student_id, name, surname) VALUES (?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(surname)
        .execute(&mut *tx)
        .await
        .map_err(DbError::SqlxError)?;

        tx.commit().await.map_err(DbError::SqlxError)?;

        tracing::debug!(student_id = id, "Added student");

        Ok(Student {
            id,
            name: name.to_string(),
            surname: surname.to_string(),
        })
    }

    /// Insert a class
    pub async fn add_class(&self, year: &str, modifier: &str) -> Result<Class> {
        let id = sqlx::query(
            r#"
            INSERT INTO classes (year, modifier) VALUES (?, ?)
            "#,
        )
        .bind(year)
        .bind(modifier)
        .execute(&self.pool)
        .await
        .map_err(DbError::SqlxError)?
        .last_insert_rowid();

        tracing::debug!(class_id = id, "Added class");

        Ok(Class {
            id,
            year: year.to_string(),
            modifier: modifier.to_string(),
        })
    }

    /// Overwrite the class assignment of one student
    pub async fn assign_class_to_student(
        &self,
        year: &str,
        modifier: &str,
        student_id: i64,
    ) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE groups SET year = ?, modifier = ? WHERE student_id = ?
            "#,
        )
        .bind(year)
        .bind(modifier)
        .bind(student_id)
        .execute(&self.pool)
        .await
        .map_err(DbError::SqlxError)?;

        if result.rows_affected() == 0 {
            return Err(DbError::StudentNotFound(student_id).into());
        }

        tracing::debug!(student_id, "Assigned class {}{}", year, modifier);

        Ok(())
    }

    /// All students in insertion order
    pub async fn students(&self) -> Result<Vec<Student>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, surname FROM students ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DbError::SqlxError)?;

        Ok(rows
            .iter()
            .map(|r| Student {
                id: r.get("id"),
                name: r.get("name"),
                surname: r.get("surname"),
            })
            .collect())
    }

    /// All classes in insertion order
    pub async fn classes(&self) -> Result<Vec<Class>> {
        let rows = sqlx::query(
            r#"
            SELECT id, year, modifier FROM classes ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DbError::SqlxError)?;

        Ok(rows
            .iter()
            .map(|r| Class {
                id: r.get("id"),
                year: r.get("year"),
                modifier: r.get("modifier"),
            })
            .collect())
    }

    /// All group rows, one per student
    pub async fn groups(&self) -> Result<Vec<Group>> {
        let rows = sqlx::query(
            r#"
            SELECT student_id, name, surname, year, modifier
            FROM groups ORDER BY student_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DbError::SqlxError)?;

        Ok(rows
            .iter()
            .map(|r| Group {
                student_id: r.get("student_id"),
                name: r.get("name"),
                surname: r.get("surname"),
                year: r.get("year"),
                modifier: r.get("modifier"),
            })
            .collect())
    }
}
