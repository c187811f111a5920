use std::sync::Arc;
use crate::config::Config;
use crate::domain::ports::{BookingRepository, OfferingRepository, UserRepository};
use crate::domain::services::auth_service::AuthService;
use crate::domain::services::booking_service::BookingService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub offering_repo: Arc<dyn OfferingRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub auth_service: Arc<AuthService>,
    pub booking_service: Arc<BookingService>,
}
