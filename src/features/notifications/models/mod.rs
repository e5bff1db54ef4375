mod payload;

pub use payload::{AndroidOptions, ApnsOptions, PushMessage};
