use chrono::{
    DateTime,
    Duration,
    Utc,
};
use gkcore::{
    publish::{
        PublishState,
        PublishStatus,
    },
    serial::SerialRecord,
    traits::Gated,
};

/// Instants relative to some reference `now`.
#[derive(Clone, Copy, Debug)]
pub struct Moments {
    pub now: DateTime<Utc>,
    pub last_week: DateTime<Utc>,
    pub earlier: DateTime<Utc>,
    pub later: DateTime<Utc>,
    pub wayback: DateTime<Utc>,
}

impl From<DateTime<Utc>> for Moments {
    fn from(now: DateTime<Utc>) -> Self {
        Self {
            now,
            last_week: now - Duration::days(7),
            earlier: now - Duration::days(15),
            later: now + Duration::days(7),
            wayback: now - Duration::days(30),
        }
    }
}

/// An independently gated record.
#[derive(Clone, Debug, PartialEq)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub state: PublishState,
}

impl Gated for Article {
    fn publish_state(&self) -> &PublishState {
        &self.state
    }
}

fn article(id: i64, title: &str, state: PublishState) -> Article {
    Article {
        id,
        title: title.to_string(),
        state,
    }
}

/// Five articles, of which two are visible to the public and four to
/// staff:
///
/// 1. pending
/// 2. scheduled for next week
/// 3. scheduled since last week
/// 4. always on
/// 5. taken offline
pub fn articles(now: DateTime<Utc>) -> Vec<Article> {
    let m = Moments::from(now);
    vec![
        article(1, "pending", PublishState::pending()),
        article(2, "next week", PublishState::scheduled(m.later)),
        article(3, "last week", PublishState::scheduled(m.last_week)),
        article(4, "always on", PublishState {
            status: PublishStatus::AlwaysOn,
            live_as_of: Some(m.earlier),
            standalone: false,
        }),
        article(5, "offline", PublishState {
            status: PublishStatus::AlwaysOff,
            live_as_of: Some(m.earlier),
            standalone: false,
        }),
    ]
}

/// Six homepage variants, of which the fifth should be live:
///
/// 1. pending
/// 2. always on, and the default
/// 3. taken offline
/// 4. scheduled earlier, superseded
/// 5. scheduled last week
/// 6. scheduled for next week
pub fn homepages(now: DateTime<Utc>) -> Vec<SerialRecord> {
    let m = Moments::from(now);
    let modified = m.wayback;
    vec![
        SerialRecord::new(1, modified),
        SerialRecord::new(2, modified)
            .with_state(PublishState::always_on())
            .with_default_live(true),
        SerialRecord::new(3, modified)
            .with_state(PublishState::always_off().with_live_as_of(Some(m.earlier))),
        SerialRecord::new(4, modified)
            .with_state(PublishState::scheduled(m.earlier)),
        SerialRecord::new(5, modified)
            .with_state(PublishState::scheduled(m.last_week)),
        SerialRecord::new(6, modified)
            .with_state(PublishState::scheduled(m.later)),
    ]
}
