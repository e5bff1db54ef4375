pub mod sos_handler;

pub use sos_handler::{send_sos, test_sos};
