use serde::{Deserialize, Serialize};

/// The minimal description of whoever is requesting a page.
///
/// The default is the anonymous public visitor.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct Viewer {
    /// Staff or administrator.
    #[serde(default)]
    pub privileged: bool,
    #[serde(default)]
    pub authenticated: bool,
}

mod impls;
