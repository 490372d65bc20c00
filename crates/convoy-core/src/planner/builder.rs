//! Builder for creating and configuring TripPlanner instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;

use super::TripPlanner;
use crate::{
    eld::{Clock, SystemClock},
    error::{Result, TripError},
    policy::HosPolicy,
};

const APP_PREFIX: &str = "convoy";
const POLICY_FILE: &str = "policy.json";

/// Builder for creating and configuring TripPlanner instances.
///
/// The policy is resolved in this order:
///
/// 1. a policy passed with [`with_policy`](Self::with_policy)
/// 2. a JSON file passed with [`with_policy_file`](Self::with_policy_file)
/// 3. `$XDG_CONFIG_HOME/convoy/policy.json`, if it exists and user
///    configuration is enabled
/// 4. [`HosPolicy::default`]
#[derive(Debug, Clone)]
pub struct TripPlannerBuilder {
    policy: Option<HosPolicy>,
    policy_path: Option<PathBuf>,
    user_config: bool,
    clock: Option<Arc<dyn Clock>>,
}

impl TripPlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            policy: None,
            policy_path: None,
            user_config: true,
            clock: None,
        }
    }

    /// Uses the given policy.
    pub fn with_policy(mut self, policy: HosPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Sets a policy file path.
    pub fn with_policy_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.policy_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Enables or disables the lookup of the user's XDG policy file.
    pub fn with_user_config(mut self, enabled: bool) -> Self {
        self.user_config = enabled;
        self
    }

    /// Sets the clock logs start from. Defaults to the system clock.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `TripError::FileSystem` if the policy file cannot be read
    /// Returns `TripError::Serialization` if the policy file is not valid JSON
    /// Returns `TripError::InvalidInput` if the policy fails validation
    pub fn build(self) -> Result<TripPlanner> {
        let policy = match (self.policy, self.policy_path) {
            (Some(policy), _) => {
                policy.validate()?;
                policy
            }
            (None, Some(path)) => {
                debug!("Loading policy from {}", path.display());
                HosPolicy::from_file(&path)?
            }
            (None, None) if self.user_config => match Self::find_user_policy() {
                Some(path) => {
                    debug!("Loading user policy from {}", path.display());
                    HosPolicy::from_file(&path)?
                }
                None => HosPolicy::default(),
            },
            (None, None) => HosPolicy::default(),
        };

        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        Ok(TripPlanner::new(policy, clock))
    }

    fn find_user_policy() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix(APP_PREFIX).find_config_file(POLICY_FILE)
    }
}

impl Default for TripPlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the user policy path following the XDG Base Directory
/// specification, creating its parent directory.
pub fn user_policy_path() -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix(APP_PREFIX)
        .place_config_file(POLICY_FILE)
        .map_err(|e| TripError::XdgDirectory(e.to_string()))
}
