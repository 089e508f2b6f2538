//! Platform-dispatching machine identity provider.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::{
    BrowserEnvironment, Environment, HostProbe, MachineError, Platform, SystemProbe, browser,
    linux, macos, windows,
};

/// Upper bound on a single platform query.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Resolves the machine identity string for one selected platform.
///
/// The platform is fixed at construction; each call performs one fresh
/// lookup and nothing is cached.
#[derive(Clone)]
pub struct MachineIdentityProvider {
    platform: Platform,
    probe: Arc<dyn SystemProbe>,
    browser: Option<BrowserEnvironment>,
    machine_id_path: PathBuf,
    timeout: Duration,
}

impl MachineIdentityProvider {
    /// Provider for `platform` using `probe` for OS access.
    pub fn new(platform: Platform, probe: Arc<dyn SystemProbe>) -> Self {
        Self {
            platform,
            probe,
            browser: None,
            machine_id_path: PathBuf::from(linux::MACHINE_ID_PATH),
            timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }

    /// Provider for the running host.
    pub fn detect() -> Result<Self, MachineError> {
        Self::from_environment(Environment::host(), Arc::new(HostProbe))
    }

    /// Selects the platform from `env` once and builds the provider.
    pub fn from_environment(
        env: Environment,
        probe: Arc<dyn SystemProbe>,
    ) -> Result<Self, MachineError> {
        let platform = env.select()?;
        let mut provider = Self::new(platform, probe);
        provider.browser = env.browser;
        Ok(provider)
    }

    /// Browser provider over `env`; no OS access is performed.
    pub fn browser(env: BrowserEnvironment) -> Self {
        let mut provider = Self::new(Platform::Browser, Arc::new(HostProbe));
        provider.browser = Some(env);
        provider
    }

    /// Overrides the Linux machine-id file location.
    pub fn with_machine_id_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.machine_id_path = path.into();
        self
    }

    /// Overrides the per-query time limit.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn machine_id_path(&self) -> &Path {
        &self.machine_id_path
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the raw machine identity string for the selected platform.
    pub async fn machine_identity(&self) -> Result<String, MachineError> {
        let identity = match self.platform {
            Platform::Windows => {
                let args = windows::query_args();
                let output = self
                    .guarded(self.probe.run_command(windows::REG_PROGRAM, &args))
                    .await?;
                windows::parse_registry_output(&output)?
            }
            Platform::Linux => {
                let contents = self
                    .guarded(self.probe.read_file(&self.machine_id_path))
                    .await?;
                linux::parse_machine_id_file(&contents)?
            }
            Platform::MacOs => {
                let output = self
                    .guarded(
                        self.probe
                            .run_command(macos::IOREG_PROGRAM, &macos::IOREG_ARGS),
                    )
                    .await?;
                macos::parse_ioreg_output(&output)?
            }
            Platform::Browser => {
                let env = self.browser.as_ref().ok_or_else(|| {
                    MachineError::UnsupportedEnvironment(
                        "browser platform selected without browser properties".into(),
                    )
                })?;
                browser::browser_fingerprint(env)
            }
        };

        debug!(
            platform = %self.platform,
            len = identity.len(),
            "machine identity resolved"
        );
        Ok(identity)
    }

    async fn guarded<F>(&self, query: F) -> Result<String, MachineError>
    where
        F: Future<Output = Result<String, MachineError>>,
    {
        tokio::time::timeout(self.timeout, query)
            .await
            .map_err(|_| MachineError::Timeout(self.timeout))?
    }
}

impl std::fmt::Debug for MachineIdentityProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MachineIdentityProvider")
            .field("platform", &self.platform)
            .field("machine_id_path", &self.machine_id_path)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
