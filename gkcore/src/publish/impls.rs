use chrono::{DateTime, Utc};
use num_enum::TryFromPrimitiveError;
use std::{
    fmt,
    str::FromStr,
};
use crate::error::ValueError;
use super::*;

impl PublishStatus {
    /// Converts a stored status code, rejecting anything outside of the
    /// three known codes.
    pub fn from_code(code: i64) -> Result<Self, ValueError> {
        Self::try_from(code).map_err(|e| {
            log::warn!("rejected publish status code {code}");
            e.into()
        })
    }

    pub fn code(self) -> i64 {
        self.into()
    }
}

// Not derived, so that unknown codes never fall back to a default.
impl Default for PublishStatus {
    fn default() -> Self {
        PublishStatus::Scheduled
    }
}

impl From<TryFromPrimitiveError<PublishStatus>> for ValueError {
    fn from(e: TryFromPrimitiveError<PublishStatus>) -> Self {
        ValueError::InvalidStatus(e.number)
    }
}

impl fmt::Display for PublishStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", <&'static str>::from(*self))
    }
}

impl From<PublishStatus> for &'static str {
    fn from(status: PublishStatus) -> &'static str {
        match status {
            PublishStatus::AlwaysOff => "always_off",
            PublishStatus::Scheduled => "scheduled",
            PublishStatus::AlwaysOn => "always_on",
        }
    }
}

impl FromStr for PublishStatus {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_ref() {
            "always_off" | "-1" => Ok(PublishStatus::AlwaysOff),
            "scheduled" | "0" => Ok(PublishStatus::Scheduled),
            "always_on" | "1" => Ok(PublishStatus::AlwaysOn),
            s => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}

impl PublishState {
    /// A record that is still being worked on.
    pub fn pending() -> Self {
        Self::default()
    }

    pub fn scheduled(live_as_of: DateTime<Utc>) -> Self {
        Self {
            status: PublishStatus::Scheduled,
            live_as_of: Some(live_as_of),
            standalone: false,
        }
    }

    pub fn always_on() -> Self {
        Self {
            status: PublishStatus::AlwaysOn,
            .. Default::default()
        }
    }

    pub fn always_off() -> Self {
        Self {
            status: PublishStatus::AlwaysOff,
            .. Default::default()
        }
    }

    /// Builds a state from the raw stored values.
    pub fn from_raw(
        status: i64,
        live_as_of: Option<DateTime<Utc>>,
        standalone: bool,
    ) -> Result<Self, ValueError> {
        Ok(Self {
            status: PublishStatus::from_code(status)?,
            live_as_of,
            standalone,
        })
    }

    pub fn with_live_as_of(mut self, val: Option<DateTime<Utc>>) -> Self {
        self.live_as_of = val;
        self
    }

    pub fn with_standalone(mut self, val: bool) -> Self {
        self.standalone = val;
        self
    }

    /// Applies an editorial action to this state.  Persisting the
    /// result is up to the caller.
    pub fn apply(&mut self, action: Action, now: DateTime<Utc>) {
        log::trace!("applying {action} to {:?}", self);
        match action {
            Action::RevertToPending => {
                self.status = PublishStatus::Scheduled;
                self.live_as_of = None;
            }
            Action::PermanentlyOnline => {
                self.status = PublishStatus::AlwaysOn;
            }
            Action::ConditionallyOnline => {
                self.status = PublishStatus::Scheduled;
            }
            Action::OnlineNow => {
                self.status = PublishStatus::Scheduled;
                self.live_as_of = Some(now);
            }
            Action::Offline => {
                self.status = PublishStatus::AlwaysOff;
            }
        }
    }

    pub fn phase(&self, now: DateTime<Utc>) -> Phase {
        match (self.status, self.live_as_of) {
            (PublishStatus::AlwaysOn, _) => Phase::AlwaysAvailable,
            (PublishStatus::AlwaysOff, _) => Phase::NeverAvailable,
            (PublishStatus::Scheduled, None) => Phase::NeverPublished,
            (PublishStatus::Scheduled, Some(at)) if at > now => Phase::GoesLive(at),
            (PublishStatus::Scheduled, Some(at)) => Phase::Live(at),
        }
    }
}
