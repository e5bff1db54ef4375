mod fcm_client;

pub use fcm_client::{FcmClient, NotificationPublisher};
