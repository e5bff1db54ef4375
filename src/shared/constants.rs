/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "suraksha-core";

/// Prefix joining a district slug to its FCM topic.
pub const TOPIC_PREFIX: &str = "district-";

/// Sender id recorded in the data block when the caller omits one.
pub const ANONYMOUS_SENDER: &str = "anonymous";
