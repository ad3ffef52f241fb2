use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::publish::PublishState;

/// A record belonging to a group where exactly one member is meant to
/// be live at any given time, e.g. the variants of a homepage.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SerialRecord {
    pub id: i64,
    #[serde(flatten)]
    pub state: PublishState,
    /// Use this record if nothing else qualifies as live.
    #[serde(default)]
    pub default_live: bool,
    pub last_modified: DateTime<Utc>,
}

mod impls;
