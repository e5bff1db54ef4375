pub mod alerts;
pub mod districts;
pub mod health;
pub mod notifications;
