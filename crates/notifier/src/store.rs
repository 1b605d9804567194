//! Local durable reminder store, backed by SQLite.
//!
//! One row per pending reminder, keyed `"{booking_id}:{slot_token}"`, with
//! secondary indexes on the owning booking id and the due timestamp. The
//! schema carries a version (SQLite `user_version`); opening a store whose
//! version differs drops and recreates the indexes before stamping the new
//! version, as an explicit migration step rather than a side effect.

use chrono::{DateTime, NaiveDate, Utc};
use datebook_core::models::reminder::Reminder;
use eyre::{Result, WrapErr};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{FromRow, Pool, Sqlite};
use tracing::info;
use uuid::Uuid;

/// Bump when the table/index layout changes; mismatched stores rebuild
/// their indexes on open.
pub const SCHEMA_VERSION: i32 = 2;

#[derive(Debug, Clone, FromRow)]
struct DbReminder {
    key: String,
    booking_id: String,
    slot_token: String,
    booked_date: NaiveDate,
    remind_at: DateTime<Utc>,
    title: String,
    body: String,
}

impl DbReminder {
    fn into_reminder(self) -> Result<Reminder> {
        let booking_id = Uuid::parse_str(&self.booking_id)
            .wrap_err("Invalid booking id in reminder store")?;
        Ok(Reminder {
            key: self.key,
            booking_id,
            slot_token: self.slot_token,
            booked_date: self.booked_date,
            remind_at: self.remind_at,
            title: self.title,
            body: self.body,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ReminderStore {
    pool: Pool<Sqlite>,
}

impl ReminderStore {
    pub async fn open(path: &str) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// In-memory store for tests.
    pub async fn open_in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS reminders (
                key TEXT PRIMARY KEY,
                booking_id TEXT NOT NULL,
                slot_token TEXT NOT NULL,
                booked_date TEXT NOT NULL,
                remind_at TEXT NOT NULL,
                title TEXT NOT NULL,
                body TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        let version: i32 = sqlx::query_scalar("PRAGMA user_version")
            .fetch_one(&self.pool)
            .await?;
        if version != SCHEMA_VERSION {
            info!(
                "Reminder store schema version {} != {}, rebuilding indexes",
                version, SCHEMA_VERSION
            );
            sqlx::query("DROP INDEX IF EXISTS idx_reminders_booking_id")
                .execute(&self.pool)
                .await?;
            sqlx::query("DROP INDEX IF EXISTS idx_reminders_remind_at")
                .execute(&self.pool)
                .await?;
            sqlx::query(&format!("PRAGMA user_version = {}", SCHEMA_VERSION))
                .execute(&self.pool)
                .await?;
        }

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_reminders_booking_id ON reminders(booking_id)",
        )
        .execute(&self.pool)
        .await?;
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_reminders_remind_at ON reminders(remind_at)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn put(&self, reminder: &Reminder) -> Result<()> {
        sqlx::query(
            r#"
            INSERT OR REPLACE INTO reminders (key, booking_id, slot_token, booked_date, remind_at, title, body)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&reminder.key)
        .bind(reminder.booking_id.to_string())
        .bind(&reminder.slot_token)
        .bind(reminder.booked_date)
        .bind(reminder.remind_at)
        .bind(&reminder.title)
        .bind(&reminder.body)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// All pending reminders, ordered by due time.
    pub async fn all(&self) -> Result<Vec<Reminder>> {
        let rows = sqlx::query_as::<_, DbReminder>(
            r#"
            SELECT key, booking_id, slot_token, booked_date, remind_at, title, body
            FROM reminders
            ORDER BY remind_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(DbReminder::into_reminder).collect()
    }

    pub async fn for_booking(&self, booking_id: Uuid) -> Result<Vec<Reminder>> {
        let rows = sqlx::query_as::<_, DbReminder>(
            r#"
            SELECT key, booking_id, slot_token, booked_date, remind_at, title, body
            FROM reminders
            WHERE booking_id = ?1
            ORDER BY remind_at ASC
            "#,
        )
        .bind(booking_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(DbReminder::into_reminder).collect()
    }

    /// Batch removal by key, issued after a sweep has made all its decisions.
    pub async fn delete_keys(&self, keys: &[String]) -> Result<()> {
        if keys.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await?;
        for key in keys {
            sqlx::query("DELETE FROM reminders WHERE key = ?1")
                .bind(key)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        Ok(())
    }

    pub async fn delete_for_booking(&self, booking_id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM reminders WHERE booking_id = ?1")
            .bind(booking_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
