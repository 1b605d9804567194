use datebook_core::errors::BookingResult;
use datebook_core::models::booking::{Booking, BookingDraft};
use mockall::mock;
use uuid::Uuid;

// Mock repository for testing
mock! {
    pub BookingRepo {
        pub async fn fetch_all(&self) -> BookingResult<Vec<Booking>>;

        pub async fn fetch_by_id(&self, id: Uuid) -> BookingResult<Booking>;

        pub async fn fetch_overlapping(
            &self,
            tokens: Vec<String>,
        ) -> BookingResult<Vec<Booking>>;

        pub async fn create(&self, draft: BookingDraft) -> BookingResult<Booking>;

        pub async fn update(&self, id: Uuid, draft: BookingDraft) -> BookingResult<Booking>;

        pub async fn delete(&self, id: Uuid) -> BookingResult<()>;
    }
}
