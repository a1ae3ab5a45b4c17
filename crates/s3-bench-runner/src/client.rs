//! AWS configuration context for the runner
//!
//! Provides `AwsContext` for loading AWS SDK configuration once and
//! creating the S3 client reused across every iteration.

use anyhow::{Context, Result};
use aws_config::profile::ProfileFileCredentialsProvider;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use aws_runtime::env_config::file::EnvConfigFiles as ProfileFiles;
use tracing::{debug, info};

/// Profile name to apply, if any.
///
/// Blank or whitespace-only names are treated as absent so the default
/// credential chain is used. Any other name is applied exactly as given.
pub fn effective_profile(profile: Option<&str>) -> Option<&str> {
    profile.filter(|p| !p.trim().is_empty())
}

/// Loaded AWS configuration bound to a region and optional profile
#[derive(Clone)]
pub struct AwsContext {
    config: SdkConfig,
    region: String,
    profile: Option<String>,
}

impl AwsContext {
    /// Load AWS configuration for `region`, optionally using a named profile.
    ///
    /// A named profile is the only credential source: environment variables
    /// and instance roles are not consulted. Its credentials are resolved
    /// immediately, so a missing or broken profile fails here instead of on
    /// the first download.
    pub async fn with_profile(region: &str, profile: Option<&str>) -> Result<Self> {
        Self::load(region, profile, None).await
    }

    /// Same as [`AwsContext::with_profile`], reading profiles from
    /// `profile_files` instead of `~/.aws/config` and `~/.aws/credentials`.
    pub(crate) async fn load(
        region: &str,
        profile: Option<&str>,
        profile_files: Option<ProfileFiles>,
    ) -> Result<Self> {
        let profile = effective_profile(profile).map(str::to_string);

        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(region.to_string()));

        if let Some(files) = &profile_files {
            loader = loader.profile_files(files.clone());
        }

        if let Some(name) = &profile {
            info!(profile = %name, "Using AWS profile");
            let credentials = profile_credentials(name, profile_files).await?;
            loader = loader.profile_name(name).credentials_provider(credentials);
        }

        Ok(Self {
            config: loader.load().await,
            region: region.to_string(),
            profile,
        })
    }

    /// Get the underlying SDK config.
    pub fn sdk_config(&self) -> &SdkConfig {
        &self.config
    }

    #[cfg(test)]
    fn region(&self) -> &str {
        &self.region
    }

    #[cfg(test)]
    fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    /// Create an S3 client from this context.
    pub fn s3_client(&self) -> aws_sdk_s3::Client {
        aws_sdk_s3::Client::new(self.sdk_config())
    }
}

impl std::fmt::Debug for AwsContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsContext")
            .field("region", &self.region)
            .field("profile", &self.profile)
            .finish_non_exhaustive()
    }
}

/// Credentials provider reading only `profile`, checked once before use
async fn profile_credentials(
    profile: &str,
    profile_files: Option<ProfileFiles>,
) -> Result<SharedCredentialsProvider> {
    let mut builder = ProfileFileCredentialsProvider::builder().profile_name(profile);
    if let Some(files) = profile_files {
        builder = builder.profile_files(files);
    }
    let provider = SharedCredentialsProvider::new(builder.build());

    provider
        .provide_credentials()
        .await
        .with_context(|| format!("Failed to load credentials for AWS profile '{profile}'"))?;

    debug!(profile, "Credentials resolved from profile");
    Ok(provider)
}

/// Build an S3 client bound to `region`, applying `profile` if non-blank.
pub async fn create_client(region: &str, profile: Option<&str>) -> Result<aws_sdk_s3::Client> {
    let ctx = AwsContext::with_profile(region, profile).await?;
    Ok(ctx.s3_client())
}
