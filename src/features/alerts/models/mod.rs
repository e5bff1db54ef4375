mod alert;

pub use alert::{AlertRequest, SenderInfo, SosKind};
