use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create bookings table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            date_slots TEXT[] NOT NULL,
            customer_name VARCHAR(255) NOT NULL,
            phone_number VARCHAR(20) NOT NULL,
            price DOUBLE PRECISION NOT NULL,
            notes TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT positive_price CHECK (price > 0),
            CONSTRAINT non_empty_slots CHECK (array_length(date_slots, 1) > 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes; the GIN index backs the token-overlap pre-filter
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_bookings_created_at ON bookings(created_at);
        CREATE INDEX IF NOT EXISTS idx_bookings_date_slots ON bookings USING GIN (date_slots);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
