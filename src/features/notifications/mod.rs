//! Notification dispatch: composes nothing itself, just publishes an
//! already-built [`models::PushMessage`] to its district topic through FCM.

pub mod models;
pub mod services;

pub use services::{FcmClient, NotificationPublisher};
