use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::types::Coordinate;

/// The two alert kinds clients may send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SosKind {
    /// An active emergency.
    SosAlert,
    /// A previously raised emergency has been resolved.
    Stop,
}

impl SosKind {
    /// Value of the `type` key in the notification data block.
    pub fn data_type(&self) -> &'static str {
        match self {
            SosKind::SosAlert => "sos_alert",
            SosKind::Stop => "sos_resolved",
        }
    }
}

impl FromStr for SosKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sos_alert" => Ok(SosKind::SosAlert),
            "stop" => Ok(SosKind::Stop),
            other => Err(format!(
                "Invalid sos_type '{}': must be one of sos_alert, stop",
                other
            )),
        }
    }
}

/// Free-text details the sender supplies about themselves.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SenderInfo {
    pub name: Option<String>,
    /// Self-reported location label shown in the notification body.
    pub location: Option<String>,
    /// District asserted by the client; required under the client strategy.
    pub district: Option<String>,
}

/// A validated alert, ready for resolution and dispatch.
#[derive(Debug, Clone)]
pub struct AlertRequest {
    pub sos_id: String,
    pub kind: SosKind,
    pub coordinate: Option<Coordinate>,
    pub sender: SenderInfo,
    pub timestamp: Option<String>,
    pub sender_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_kinds() {
        assert_eq!("sos_alert".parse::<SosKind>().unwrap(), SosKind::SosAlert);
        assert_eq!("stop".parse::<SosKind>().unwrap(), SosKind::Stop);
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = "foo".parse::<SosKind>().unwrap_err();
        assert!(err.contains("Invalid sos_type 'foo'"));
    }

    #[test]
    fn stop_maps_to_resolved_data_type() {
        assert_eq!(SosKind::Stop.data_type(), "sos_resolved");
        assert_eq!(SosKind::SosAlert.data_type(), "sos_alert");
    }
}
