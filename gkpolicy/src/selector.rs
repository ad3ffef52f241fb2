use chrono::{DateTime, Utc};
use gkcore::{
    publish::{
        PublishState,
        PublishStatus,
    },
    traits::Serial,
};
use std::fmt;

use crate::error::Error;

/// The rule that produced a live record.  Rules are tried in the order
/// they are declared here.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rule {
    /// The scheduled record with the most recent `live_as_of`.
    ScheduledLive,
    /// The most recently modified record that is always on.
    AlwaysOn,
    /// The most recently modified record flagged as the default.
    DefaultLive,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection<'a, R> {
    pub record: &'a R,
    pub rule: Rule,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Rule::ScheduledLive => "scheduled live",
            Rule::AlwaysOn => "always on",
            Rule::DefaultLive => "default live",
        })
    }
}

// Records that are off, or scheduled for the future, cannot play.
fn eligible(state: &PublishState, now: DateTime<Utc>) -> bool {
    state.status != PublishStatus::AlwaysOff
        && state.live_as_of
            .map(|live_as_of| live_as_of <= now)
            .unwrap_or(true)
}

fn recency<R: Serial>(record: &R) -> (DateTime<Utc>, i64) {
    (record.last_modified(), record.id())
}

fn scheduled_live<'a, R: Serial>(pool: &[&'a R]) -> Option<&'a R> {
    pool.iter()
        .copied()
        .filter_map(|record| match record.publish_state() {
            PublishState {
                status: PublishStatus::Scheduled,
                live_as_of: Some(live_as_of),
                ..
            } => Some((*live_as_of, recency(record), record)),
            _ => None,
        })
        .max_by_key(|(live_as_of, key, _)| (*live_as_of, *key))
        .map(|(_, _, record)| record)
}

fn most_recent<'a, R, P>(pool: &[&'a R], predicate: P) -> Option<&'a R>
where
    R: Serial,
    P: Fn(&R) -> bool,
{
    pool.iter()
        .copied()
        .filter(|record| predicate(*record))
        .max_by_key(|record| recency(*record))
}

/// Selects the live record out of the candidates, along with the rule
/// that selected it.
pub fn select<'a, R, I>(
    candidates: I,
    now: DateTime<Utc>,
) -> Option<Selection<'a, R>>
where
    R: Serial + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let pool = candidates.into_iter()
        .filter(|record| eligible(record.publish_state(), now))
        .collect::<Vec<_>>();
    log::trace!("{} eligible candidate(s) at {now}", pool.len());

    let selection = scheduled_live(&pool)
        .map(|record| Selection { record, rule: Rule::ScheduledLive })
        .or_else(|| most_recent(
            &pool,
            |record| record.publish_state().status == PublishStatus::AlwaysOn,
        ).map(|record| Selection { record, rule: Rule::AlwaysOn }))
        .or_else(|| most_recent(
            &pool,
            |record| record.default_live(),
        ).map(|record| Selection { record, rule: Rule::DefaultLive }));

    match &selection {
        Some(Selection { record, rule }) => log::debug!(
            "record {} selected as live by the {rule} rule", record.id()
        ),
        None => log::debug!("no live record among candidates"),
    }
    selection
}

/// Selects the single record that should currently be live.
///
/// A scheduled record whose `live_as_of` has passed wins over records
/// that are always on, which in turn win over the default record.  Ties
/// go to the latest `live_as_of` (for scheduled records), then the
/// latest `last_modified`, then the highest id.
pub fn select_live<'a, R, I>(
    candidates: I,
    now: DateTime<Utc>,
) -> Option<&'a R>
where
    R: Serial + 'a,
    I: IntoIterator<Item = &'a R>,
{
    select(candidates, now).map(|selection| selection.record)
}

/// Returns the record identified by `explicit_id` for a privileged
/// requester, bypassing selection entirely; otherwise returns the live
/// record.
pub fn select_live_or_default<'a, R, I>(
    candidates: I,
    explicit_id: Option<i64>,
    requester_is_privileged: bool,
    now: DateTime<Utc>,
) -> Result<&'a R, Error>
where
    R: Serial + 'a,
    I: IntoIterator<Item = &'a R>,
{
    match explicit_id {
        Some(id) if requester_is_privileged => {
            log::trace!("explicit lookup of record {id}");
            candidates.into_iter()
                .find(|record| record.id() == id)
                .ok_or(Error::NotFound(id))
        }
        _ => select_live(candidates, now).ok_or(Error::NoLiveRecord),
    }
}

/// Whether `record` is the one currently selected as live.
pub fn is_live<'a, R, I>(
    candidates: I,
    record: &R,
    now: DateTime<Utc>,
) -> bool
where
    R: Serial + 'a,
    I: IntoIterator<Item = &'a R>,
{
    select_live(candidates, now)
        .map(|live| live.id() == record.id())
        .unwrap_or(false)
}

#[cfg(test)]
mod test {
    use chrono::{
        Duration,
        TimeZone,
        Utc,
    };
    use gkcore::{
        publish::PublishState,
        serial::SerialRecord,
    };
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn precedence() {
        let now = now();
        let modified = now - Duration::days(1);
        let scheduled = SerialRecord::new(1, modified - Duration::days(10))
            .with_state(PublishState::scheduled(now - Duration::days(3)));
        let always_on = SerialRecord::new(2, modified)
            .with_state(PublishState::always_on());
        let fallback = SerialRecord::new(3, modified)
            .with_default_live(true);

        let candidates = [fallback.clone(), always_on.clone(), scheduled.clone()];
        let selection = select(&candidates, now).expect("a selection");
        assert_eq!(selection.record, &scheduled);
        assert_eq!(selection.rule, Rule::ScheduledLive);

        let candidates = [fallback.clone(), always_on.clone()];
        let selection = select(&candidates, now).expect("a selection");
        assert_eq!(selection.record, &always_on);
        assert_eq!(selection.rule, Rule::AlwaysOn);

        let candidates = [fallback.clone()];
        let selection = select(&candidates, now).expect("a selection");
        assert_eq!(selection.record, &fallback);
        assert_eq!(selection.rule, Rule::DefaultLive);
    }

    #[test]
    fn scheduled_tie_breaks() {
        let now = now();
        let live_as_of = now - Duration::days(2);
        let older = now - Duration::days(5);
        let newer = now - Duration::days(1);
        let candidates = [
            SerialRecord::new(1, older)
                .with_state(PublishState::scheduled(live_as_of)),
            SerialRecord::new(2, newer)
                .with_state(PublishState::scheduled(live_as_of)),
            SerialRecord::new(3, older)
                .with_state(PublishState::scheduled(live_as_of)),
        ];
        assert_eq!(select_live(&candidates, now).map(|r| r.id), Some(2));

        let candidates = [
            SerialRecord::new(4, newer)
                .with_state(PublishState::scheduled(live_as_of)),
            SerialRecord::new(7, newer)
                .with_state(PublishState::scheduled(live_as_of)),
            SerialRecord::new(5, newer)
                .with_state(PublishState::scheduled(live_as_of)),
        ];
        assert_eq!(select_live(&candidates, now).map(|r| r.id), Some(7));

        // later live_as_of beats later last_modified
        let candidates = [
            SerialRecord::new(8, newer)
                .with_state(PublishState::scheduled(live_as_of)),
            SerialRecord::new(9, older)
                .with_state(PublishState::scheduled(live_as_of + Duration::hours(1))),
        ];
        assert_eq!(select_live(&candidates, now).map(|r| r.id), Some(9));
    }

    #[test]
    fn always_on_and_default_tie_breaks() {
        let now = now();
        let modified = now - Duration::days(1);
        let candidates = [
            SerialRecord::new(1, modified)
                .with_state(PublishState::always_on()),
            SerialRecord::new(2, modified)
                .with_state(PublishState::always_on()),
            SerialRecord::new(3, modified - Duration::days(1))
                .with_state(PublishState::always_on()),
        ];
        assert_eq!(select_live(&candidates, now).map(|r| r.id), Some(2));

        let candidates = [
            SerialRecord::new(4, modified).with_default_live(true),
            SerialRecord::new(5, modified - Duration::days(1)).with_default_live(true),
            SerialRecord::new(6, modified + Duration::hours(1)),
        ];
        assert_eq!(select_live(&candidates, now).map(|r| r.id), Some(4));
    }

    #[test]
    fn ineligible_candidates() {
        let now = now();
        let modified = now - Duration::days(1);
        let past = now - Duration::days(2);
        let future = now + Duration::days(2);

        let empty: [SerialRecord; 0] = [];
        assert_eq!(select_live(&empty, now), None);

        // offline records never play, even as the default
        let candidates = [
            SerialRecord::new(1, modified)
                .with_state(PublishState::always_off().with_live_as_of(Some(past)))
                .with_default_live(true),
            SerialRecord::new(2, modified)
                .with_state(PublishState::always_off()),
        ];
        assert_eq!(select_live(&candidates, now), None);

        // a future live_as_of excludes the record whatever its status
        let candidates = [
            SerialRecord::new(3, modified)
                .with_state(PublishState::scheduled(future))
                .with_default_live(true),
            SerialRecord::new(4, modified)
                .with_state(PublishState::always_on().with_live_as_of(Some(future))),
        ];
        assert_eq!(select_live(&candidates, now), None);

        // a pending record only plays as the default
        let candidates = [
            SerialRecord::new(5, modified),
        ];
        assert_eq!(select_live(&candidates, now), None);
        let candidates = [
            SerialRecord::new(5, modified).with_default_live(true),
        ];
        assert_eq!(select_live(&candidates, now).map(|r| r.id), Some(5));
    }

    #[test]
    fn explicit_lookup() {
        let now = now();
        let modified = now - Duration::days(1);
        let candidates = [
            SerialRecord::new(1, modified)
                .with_state(PublishState::always_off()),
            SerialRecord::new(2, modified)
                .with_state(PublishState::always_on()),
        ];

        let record = select_live_or_default(&candidates, Some(1), true, now)
            .expect("privileged lookup bypasses selection");
        assert_eq!(record.id, 1);
        assert!(matches!(
            select_live_or_default(&candidates, Some(3), true, now),
            Err(Error::NotFound(3)),
        ));

        // explicit id is ignored for everyone else
        let record = select_live_or_default(&candidates, Some(1), false, now)
            .expect("falls back to selection");
        assert_eq!(record.id, 2);
        let record = select_live_or_default(&candidates, None, true, now)
            .expect("falls back to selection");
        assert_eq!(record.id, 2);

        assert!(matches!(
            select_live_or_default(&candidates[..1], None, false, now),
            Err(Error::NoLiveRecord),
        ));
    }

    #[test]
    fn live_flag() {
        let now = now();
        let modified = now - Duration::days(1);
        let candidates = [
            SerialRecord::new(1, modified)
                .with_state(PublishState::always_on()),
            SerialRecord::new(2, modified)
                .with_state(PublishState::scheduled(now - Duration::hours(1))),
        ];
        assert!(!is_live(&candidates, &candidates[0], now));
        assert!(is_live(&candidates, &candidates[1], now));
    }
}
