use chrono::NaiveDate;
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbAdminSession, DbBooking};

// Mock repositories for testing
mock! {
    pub BookingRepo {
        pub async fn create_booking(
            &self,
            name: &'static str,
            email: &'static str,
            phone: &'static str,
            slot: &'static str,
            interview_date: NaiveDate,
        ) -> eyre::Result<Option<DbBooking>>;

        pub async fn get_booking_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbBooking>>;

        pub async fn get_booking_by_slot_and_date(
            &self,
            slot: &'static str,
            interview_date: NaiveDate,
        ) -> eyre::Result<Option<DbBooking>>;

        pub async fn get_booked_slots(
            &self,
            interview_date: NaiveDate,
        ) -> eyre::Result<Vec<String>>;

        pub async fn list_bookings(&self) -> eyre::Result<Vec<DbBooking>>;

        pub async fn delete_booking(&self, id: Uuid) -> eyre::Result<bool>;
    }
}

mock! {
    pub AdminRepo {
        pub async fn verify_password(&self, password: &'static str) -> eyre::Result<bool>;
    }
}

mock! {
    pub SessionRepo {
        pub async fn create_session(
            &self,
            username: &'static str,
            ttl_hours: i64,
        ) -> eyre::Result<DbAdminSession>;

        pub async fn get_valid_session(
            &self,
            token: Uuid,
        ) -> eyre::Result<Option<DbAdminSession>>;

        pub async fn delete_session(&self, token: Uuid) -> eyre::Result<()>;
    }
}
