use std::collections::BTreeMap;

/// Android rendering bundle attached to every push. Presentation detail
/// only; business logic never branches on these fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AndroidOptions {
    pub priority: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub sound: &'static str,
    pub channel_id: &'static str,
}

impl AndroidOptions {
    pub fn alert() -> Self {
        Self {
            priority: "high",
            icon: "ic_sos_alert",
            color: "#d32f2f",
            sound: "sos_alarm",
            channel_id: "sos_alerts",
        }
    }

    pub fn resolved() -> Self {
        Self {
            priority: "high",
            icon: "ic_sos_alert",
            color: "#388e3c",
            sound: "default",
            channel_id: "sos_alerts",
        }
    }
}

/// iOS rendering bundle. Badge is 1 for an active alert, 0 once resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApnsOptions {
    pub sound: &'static str,
    pub badge: u32,
}

impl ApnsOptions {
    pub fn alert() -> Self {
        Self {
            sound: "sos_alarm.caf",
            badge: 1,
        }
    }

    pub fn resolved() -> Self {
        Self {
            sound: "default",
            badge: 0,
        }
    }
}

/// A fully composed push notification, ready for dispatch. Built fresh per
/// request and never persisted.
#[derive(Debug, Clone)]
pub struct PushMessage {
    pub topic: String,
    pub title: String,
    pub body: String,
    pub data: BTreeMap<String, String>,
    pub android: AndroidOptions,
    pub apns: ApnsOptions,
}
