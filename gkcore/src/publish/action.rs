use serde::{Deserialize, Serialize};

/// The editorial actions that may be taken against a gated record.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    RevertToPending,
    PermanentlyOnline,
    ConditionallyOnline,
    OnlineNow,
    Offline,
}

mod impls;
