use chrono::{DateTime, Utc};
use gkcore::{
    traits::{
        Gated,
        ParentLookup,
        Serial,
    },
    viewer::Viewer,
};
use std::sync::Arc;

use crate::{
    Builder,
    GatekeeperConfig,
    error::Error,
    selector,
    visibility,
};

/// Applies the visibility policy and live record selection with a
/// given configuration.
///
/// Holds no state beyond its configuration, so every call evaluates
/// from scratch and a single instance may be shared across threads.
#[derive(Clone)]
pub struct Gatekeeper {
    pub(crate) config: GatekeeperConfig,
    // Reserved for hierarchy checks; see `is_visible_including_parents`.
    pub(crate) parent_lookup: Option<Arc<dyn ParentLookup>>,
}

impl Default for Gatekeeper {
    fn default() -> Self {
        Builder::new().build()
    }
}

impl Gatekeeper {
    pub fn config(&self) -> &GatekeeperConfig {
        &self.config
    }

    pub fn has_parent_lookup(&self) -> bool {
        self.parent_lookup.is_some()
    }

    pub fn is_visible<R: Gated + ?Sized>(
        &self,
        viewer: Option<&Viewer>,
        record: Option<&R>,
        now: DateTime<Utc>,
    ) -> bool {
        visibility::evaluate(
            viewer,
            record.map(Gated::publish_state),
            self.config.standalone_bypasses_offline,
            now,
        )
    }

    /// As per `is_visible`, but for callers that would also have the
    /// parents of the record checked.
    ///
    /// Hierarchy checks are disabled, so the parents are never looked
    /// up and the result is always identical to `is_visible`.
    pub fn is_visible_including_parents<R: Gated + ?Sized>(
        &self,
        viewer: Option<&Viewer>,
        record: Option<&R>,
        including_parents: bool,
        now: DateTime<Utc>,
    ) -> bool {
        let visible = self.is_visible(viewer, record, now);
        if including_parents && record
            .map(|record| !record.publish_state().standalone)
            .unwrap_or(false)
        {
            log::trace!(
                "parent checks requested for a non-standalone record but are \
                disabled (parent lookup configured: {})",
                self.has_parent_lookup(),
            );
        }
        visible
    }

    pub fn is_visible_to_public<R: Gated + ?Sized>(
        &self,
        record: Option<&R>,
        now: DateTime<Utc>,
    ) -> bool {
        self.is_visible(None, record, now)
    }

    pub fn filter_visible<'a, R, I>(
        &'a self,
        viewer: Option<&Viewer>,
        records: I,
        now: DateTime<Utc>,
    ) -> impl Iterator<Item = &'a R> + 'a
    where
        R: Gated + 'a,
        I: IntoIterator<Item = &'a R>,
        I::IntoIter: 'a,
    {
        let viewer = Viewer::or_anonymous(viewer);
        records.into_iter()
            .filter(move |record| self.is_visible(Some(&viewer), Some(*record), now))
    }

    pub fn select_live<'a, R, I>(
        &self,
        candidates: I,
        now: DateTime<Utc>,
    ) -> Option<&'a R>
    where
        R: Serial + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        selector::select_live(candidates, now)
    }

    pub fn select_live_or_default<'a, R, I>(
        &self,
        candidates: I,
        explicit_id: Option<i64>,
        requester_is_privileged: bool,
        now: DateTime<Utc>,
    ) -> Result<&'a R, Error>
    where
        R: Serial + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        selector::select_live_or_default(candidates, explicit_id, requester_is_privileged, now)
    }

    pub fn is_live<'a, R, I>(
        &self,
        candidates: I,
        record: &R,
        now: DateTime<Utc>,
    ) -> bool
    where
        R: Serial + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        selector::is_live(candidates, record, now)
    }
}

#[cfg(test)]
mod test {
    use chrono::{TimeZone, Utc};
    use gkcore::{
        publish::PublishState,
        viewer::Viewer,
    };
    use super::*;

    #[test]
    fn standalone_offline_switch() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let staff = Viewer::staff();
        let standalone = PublishState::always_off().with_standalone(true);
        let offline = PublishState::always_off();

        let gatekeeper = Gatekeeper::default();
        assert!(gatekeeper.is_visible(Some(&staff), Some(&standalone), now));
        assert!(!gatekeeper.is_visible(Some(&staff), Some(&offline), now));
        assert!(!gatekeeper.is_visible_to_public(Some(&standalone), now));

        let gatekeeper = Builder::new()
            .standalone_bypasses_offline(false)
            .build();
        assert!(!gatekeeper.is_visible(Some(&staff), Some(&standalone), now));
        assert!(!gatekeeper.is_visible(Some(&staff), Some(&offline), now));

        let states = [standalone, offline, PublishState::pending()];
        assert_eq!(gatekeeper.filter_visible(Some(&staff), &states, now).count(), 1);
        assert_eq!(Gatekeeper::default().filter_visible(Some(&staff), &states, now).count(), 2);
    }

    #[test]
    fn including_parents_is_inert() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let gatekeeper = Gatekeeper::default();
        let live = PublishState::scheduled(now);
        for including_parents in [false, true] {
            assert!(gatekeeper.is_visible_including_parents(
                None, Some(&live), including_parents, now,
            ));
            assert!(!gatekeeper.is_visible_including_parents(
                None, Some(&PublishState::pending()), including_parents, now,
            ));
            assert!(!gatekeeper.is_visible_including_parents::<PublishState>(
                None, None, including_parents, now,
            ));
        }
    }
}
