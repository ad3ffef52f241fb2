use chrono::{DateTime, Utc};
use crate::{
    publish::{
        Action,
        PublishState,
    },
    traits::{
        Gated,
        Serial,
    },
};
use super::SerialRecord;

impl SerialRecord {
    pub fn new(id: i64, last_modified: DateTime<Utc>) -> Self {
        Self {
            id,
            state: PublishState::default(),
            default_live: false,
            last_modified,
        }
    }

    pub fn with_state(mut self, val: PublishState) -> Self {
        self.state = val;
        self
    }

    pub fn with_default_live(mut self, val: bool) -> Self {
        self.default_live = val;
        self
    }

    /// Applies the action and marks the record as modified at `now`.
    pub fn apply(&mut self, action: Action, now: DateTime<Utc>) {
        self.state.apply(action, now);
        self.last_modified = now;
    }
}

impl Gated for SerialRecord {
    fn publish_state(&self) -> &PublishState {
        &self.state
    }
}

impl Serial for SerialRecord {
    fn id(&self) -> i64 {
        self.id
    }

    fn default_live(&self) -> bool {
        self.default_live
    }

    fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }
}
