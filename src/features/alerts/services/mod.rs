mod alert_service;
pub mod message_builder;

pub use alert_service::AlertService;
pub use message_builder::build_message;
