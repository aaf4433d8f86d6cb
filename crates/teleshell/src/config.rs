//! Session configuration.
//!
//! A session is the region, profile and endpoint commands run against. Values
//! come from, in order of precedence:
//!
//! 1. command line flags (or their environment variables),
//! 2. a TOML defaults file,
//! 3. the standard AWS configuration chain.
//!
//! ```toml
//! region = "us-west-2"
//! profile-name = "search-admin"
//! endpoint-url = "http://localhost:4566"
//! ```
use std::path::{Path, PathBuf};

use aws_config::{BehaviorVersion, Region, SdkConfig};
use snafu::prelude::*;

use crate::{failure::Endpoint, ConfigParseSnafu, ConfigReadSnafu, Error};

/// Defaults file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = ".teleshell.toml";

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
}

impl Session {
    /// Fill every unset value of `self` from `fallback`.
    pub fn or(self, fallback: Session) -> Session {
        Session {
            region: self.region.or(fallback.region),
            profile_name: self.profile_name.or(fallback.profile_name),
            endpoint_url: self.endpoint_url.or(fallback.endpoint_url),
        }
    }

    pub fn from_toml(path: impl AsRef<Path>, contents: &str) -> Result<Self, Error> {
        toml::from_str(contents).context(ConfigParseSnafu {
            path: path.as_ref().to_path_buf(),
        })
    }

    /// Load a defaults file.
    ///
    /// An explicitly given path must exist. Without one, [`DEFAULT_CONFIG_FILE`]
    /// is read from `dir` if it is there, and `Ok(None)` is returned if not.
    pub fn load(explicit: Option<&Path>, dir: impl AsRef<Path>) -> Result<Option<Self>, Error> {
        let path: PathBuf = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = dir.as_ref().join(DEFAULT_CONFIG_FILE);
                if !path.exists() {
                    log::trace!("no defaults file at {path:?}");
                    return Ok(None);
                }
                path
            }
        };
        log::debug!("reading session defaults from {path:?}");
        let contents = std::fs::read_to_string(&path).context(ConfigReadSnafu { path: &path })?;
        Self::from_toml(&path, &contents).map(Some)
    }

    /// Build the SDK configuration, letting the AWS default chain resolve
    /// anything this session leaves unset.
    pub async fn sdk_config(&self) -> SdkConfig {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &self.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile_name) = &self.profile_name {
            loader = loader.profile_name(profile_name);
        }
        if let Some(endpoint_url) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        loader.load().await
    }

    /// The endpoint diagnostic for failures, preferring what the SDK resolved.
    pub fn endpoint(&self, sdk_config: &SdkConfig) -> Endpoint {
        Endpoint {
            region: sdk_config
                .region()
                .map(|region| region.to_string())
                .or_else(|| self.region.clone()),
            url: sdk_config
                .endpoint_url()
                .map(str::to_owned)
                .or_else(|| self.endpoint_url.clone()),
        }
    }
}
