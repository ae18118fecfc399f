//! Configuration module
//!
//! Resolves the platform endpoint and credential for one CLI invocation into
//! an explicit value that is handed to the platform client.

use clap::ValueEnum;

/// Platform deployment a job is launched to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PlatformVersion {
    Dev,
    Test,
    #[default]
    Release,
}

impl PlatformVersion {
    /// Base URL of this deployment
    pub fn default_url(self) -> &'static str {
        match self {
            PlatformVersion::Dev => "https://open-dev.fedml.ai",
            PlatformVersion::Test => "https://open-test.fedml.ai",
            PlatformVersion::Release => "https://open.fedml.ai",
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the platform API
    pub platform_url: String,

    /// User API key, if one was given
    pub api_key: Option<String>,

    /// Deployment the URL was derived from
    pub version: PlatformVersion,
}

impl Config {
    /// Builds the configuration for one invocation
    ///
    /// An explicit platform URL wins over the one implied by `version`.
    pub fn resolve(
        platform_url: Option<String>,
        version: PlatformVersion,
        api_key: Option<String>,
    ) -> Self {
        let platform_url = platform_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| version.default_url().to_string());

        Self {
            platform_url,
            api_key: api_key.filter(|key| !key.is_empty()),
            version,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.platform_url.is_empty() {
            anyhow::bail!("platform_url cannot be empty");
        }

        if !self.platform_url.starts_with("http://") && !self.platform_url.starts_with("https://")
        {
            anyhow::bail!("platform_url must start with http:// or https://");
        }

        Ok(())
    }
}
