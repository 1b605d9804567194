use chrono::{DateTime, Utc};
use datebook_core::models::booking::Booking;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub date_slots: Vec<String>,
    pub customer_name: String,
    pub phone_number: String,
    pub price: f64,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbBooking> for Booking {
    fn from(row: DbBooking) -> Self {
        Self {
            id: row.id,
            date_slots: row.date_slots,
            customer_name: row.customer_name,
            phone_number: row.phone_number,
            price: row.price,
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
