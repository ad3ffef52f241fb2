//! Visibility policy and live record selection for gated content.
//!
//! The free functions apply the default policy.  A [`Gatekeeper`]
//! built through a [`Builder`] applies a configured one.

mod builder;
pub mod error;
mod gatekeeper;
pub mod selector;
pub mod visibility;

pub use crate::{
    builder::{
        Builder,
        GatekeeperConfig,
    },
    gatekeeper::Gatekeeper,
    selector::{
        is_live,
        select,
        select_live,
        select_live_or_default,
        Rule,
        Selection,
    },
    visibility::{
        filter_visible,
        is_visible,
        is_visible_to_public,
    },
};
