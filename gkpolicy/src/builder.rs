use gkcore::traits::ParentLookup;
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    sync::Arc,
};
use crate::Gatekeeper;

/// The serializable subset of the options a [`Builder`] accepts.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GatekeeperConfig {
    /// Whether privileged viewers may see standalone records that have
    /// been taken offline.
    ///
    /// Enabled by default; it is not settled whether this is intended,
    /// so it remains switchable rather than removed.
    pub standalone_bypasses_offline: bool,
}

impl Default for GatekeeperConfig {
    fn default() -> Self {
        Self {
            standalone_bypasses_offline: true,
        }
    }
}

/// Builds a [`Gatekeeper`].
///
/// Methods can be chained in order to set the configuration values.
/// The `Gatekeeper` is constructed by calling [`build`](Builder::build).
#[derive(Clone, Default)]
pub struct Builder {
    pub(crate) config: GatekeeperConfig,
    pub(crate) parent_lookup: Option<Arc<dyn ParentLookup>>,
}

impl Builder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn config(mut self, val: GatekeeperConfig) -> Self {
        self.config = val;
        self
    }

    pub fn standalone_bypasses_offline(mut self, val: bool) -> Self {
        self.config.standalone_bypasses_offline = val;
        self
    }

    pub fn parent_lookup(mut self, val: impl ParentLookup + 'static) -> Self {
        self.parent_lookup = Some(Arc::new(val));
        self
    }

    pub fn build(&self) -> Gatekeeper {
        log::trace!("building a Gatekeeper with {:?}", self);
        Gatekeeper {
            config: self.config.clone(),
            parent_lookup: self.parent_lookup.clone(),
        }
    }
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("config", &self.config)
            .field("parent_lookup", &self.parent_lookup.is_some())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn config() -> anyhow::Result<()> {
        let config: GatekeeperConfig = serde_json::from_str("{}")?;
        assert_eq!(config, GatekeeperConfig::default());
        assert!(config.standalone_bypasses_offline);

        let config: GatekeeperConfig = serde_json::from_str(r#"{
            "standalone_bypasses_offline": false
        }"#)?;
        let gatekeeper = Builder::new()
            .config(config)
            .build();
        assert!(!gatekeeper.config().standalone_bypasses_offline);

        let gatekeeper = Builder::new()
            .standalone_bypasses_offline(false)
            .standalone_bypasses_offline(true)
            .build();
        assert!(gatekeeper.config().standalone_bypasses_offline);
        assert!(!gatekeeper.has_parent_lookup());
        Ok(())
    }
}
