use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct CreateOfferingRequest {
    pub name: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
    pub price_cents: i64,
}

#[derive(Deserialize)]
pub struct UpdateOfferingRequest {
    pub name: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
    pub price_cents: i64,
}

#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub offering_id: String,
    /// Calendar date, "YYYY-MM-DD".
    pub booking_date: String,
    /// Time of day, "HH:MM" or "HH:MM:SS".
    pub start_time: String,
}
