/// Both variants map to a not found response for the requester.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("record {0} not found")]
    NotFound(i64),
    #[error("no live record available")]
    NoLiveRecord,
}
