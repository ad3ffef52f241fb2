use chrono::{DateTime, Utc};
use num_enum::{
    IntoPrimitive,
    TryFromPrimitive,
};
use serde::{Deserialize, Serialize};

mod action;
mod display;
mod impls;

pub use action::Action;

/// The publish status code stored against every gated record.
///
/// Serialized as the integer code; any other integer is rejected when
/// deserializing.
#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq,
    IntoPrimitive, TryFromPrimitive, Deserialize, Serialize,
)]
#[serde(try_from = "i64", into = "i64")]
#[repr(i64)]
pub enum PublishStatus {
    /// Never available to the public.
    AlwaysOff = -1,
    /// Available once `live_as_of` is set and has passed.
    Scheduled = 0,
    /// Available regardless of `live_as_of`.
    AlwaysOn = 1,
}

/// The publication state of a gated record.
///
/// The default value is what a freshly created record starts out as:
/// scheduled without a `live_as_of`, i.e. still in preparation.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct PublishState {
    pub status: PublishStatus,
    /// Only meaningful when `status` is `Scheduled`.
    #[serde(default)]
    pub live_as_of: Option<DateTime<Utc>>,
    /// Exempts the record from hierarchy checks.
    #[serde(default)]
    pub standalone: bool,
}

/// A summary of where a record sits in its publication lifecycle at
/// some given instant.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    AlwaysAvailable,
    NeverAvailable,
    NeverPublished,
    GoesLive(DateTime<Utc>),
    Live(DateTime<Utc>),
}
