use chrono::{DateTime, Utc};
use gkcore::{
    publish::{
        PublishState,
        PublishStatus,
    },
    traits::Gated,
    viewer::Viewer,
};

/// Whether the record may be shown to the viewer at `now`.
///
/// An absent viewer is the anonymous public visitor, and an absent
/// record is never visible.  Privileged viewers see everything except
/// records that are always off and not standalone; everyone else only
/// sees records that are always on, or scheduled with a `live_as_of`
/// that has been reached.
pub fn is_visible<R: Gated + ?Sized>(
    viewer: Option<&Viewer>,
    record: Option<&R>,
    now: DateTime<Utc>,
) -> bool {
    evaluate(viewer, record.map(Gated::publish_state), true, now)
}

/// Whether the record may be shown to the anonymous public.
///
/// This is for read-only contexts such as templates rendered after the
/// page was already gated; gate with [`is_visible`] and the actual
/// viewer instead.
pub fn is_visible_to_public<R: Gated + ?Sized>(
    record: Option<&R>,
    now: DateTime<Utc>,
) -> bool {
    is_visible(None, record, now)
}

/// Keeps only the records visible to the viewer, as a listing page
/// would.
pub fn filter_visible<'a, R, I>(
    viewer: Option<&Viewer>,
    records: I,
    now: DateTime<Utc>,
) -> impl Iterator<Item = &'a R>
where
    R: Gated + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let viewer = Viewer::or_anonymous(viewer);
    records.into_iter()
        .filter(move |record| is_visible(Some(&viewer), Some(*record), now))
}

pub(crate) fn evaluate(
    viewer: Option<&Viewer>,
    state: Option<&PublishState>,
    standalone_bypasses_offline: bool,
    now: DateTime<Utc>,
) -> bool {
    let Some(state) = state else {
        log::trace!("no record; not visible");
        return false;
    };
    let viewer = Viewer::or_anonymous(viewer);

    if viewer.privileged {
        let exempt = state.standalone && standalone_bypasses_offline;
        let visible = state.status != PublishStatus::AlwaysOff || exempt;
        log::trace!("privileged viewer; {state:?} visible: {visible}");
        return visible;
    }

    let visible = match state.status {
        PublishStatus::AlwaysOn => true,
        PublishStatus::AlwaysOff => false,
        PublishStatus::Scheduled => state.live_as_of
            .map(|live_as_of| live_as_of <= now)
            .unwrap_or(false),
    };
    log::trace!("public viewer; {state:?} visible: {visible}");
    visible
}
