pub mod auth;
pub mod booking;
pub mod offering;
pub mod user;
