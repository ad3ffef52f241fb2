use chrono::{DateTime, Utc};
use crate::publish::PublishState;

/// Any record that carries a publish state.
pub trait Gated {
    fn publish_state(&self) -> &PublishState;
}

/// A gated record that competes with its siblings for being the single
/// live record.
pub trait Serial: Gated {
    fn id(&self) -> i64;
    fn default_live(&self) -> bool;
    /// Only used to order otherwise equal candidates.
    fn last_modified(&self) -> DateTime<Utc>;
}

/// Resolves the publish state of the parent of a given record.
///
/// Hierarchy checks are currently disabled, so nothing consults this
/// yet; it exists so that a backend may be provided once a policy for
/// how `standalone` interacts with an offline parent is settled.
pub trait ParentLookup: Send + Sync {
    fn parent_state(&self, child_id: i64) -> Option<PublishState>;
}

impl Gated for PublishState {
    fn publish_state(&self) -> &PublishState {
        self
    }
}
