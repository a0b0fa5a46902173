use std::env;
use std::path::PathBuf;

use log::debug;

use crate::credential::{CredentialStore, Credentials, FileStore};
use crate::errors::*;

/// Preference domain the credentials are stored under.
pub const BUNDLE_ID: &str = "com.github.wrobson.s3-auth";

pub const S3AUTH_CONFIG_FILE: &str = "S3AUTH_CONFIG_FILE";
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const AWS_REGION: &str = "AWS_REGION";

/// Config for loading credentials.
#[derive(Clone)]
#[cfg_attr(test, derive(Debug))]
pub struct Config {
    /// `config_file` will be loaded from:
    ///
    /// - env value: [`S3AUTH_CONFIG_FILE`]
    /// - default to: `~/.s3auth/com.github.wrobson.s3-auth.toml`
    pub config_file: String,
    /// `access_key` will be loaded from:
    ///
    /// - env value: [`AWS_ACCESS_KEY_ID`]
    /// - the credential store: `AccessKey`
    pub access_key: Option<String>,
    /// `secret_key` will be loaded from:
    ///
    /// - env value: [`AWS_SECRET_ACCESS_KEY`]
    /// - the credential store: `SecretKey`
    pub secret_key: Option<String>,
    /// `region` will be loaded from:
    ///
    /// - env value: [`AWS_REGION`]
    /// - the credential store: `Region`
    pub region: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_file: format!("~/.s3auth/{}.toml", BUNDLE_ID),
            access_key: None,
            secret_key: None,
            region: None,
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self) -> Self {
        if let Some(v) = non_empty_var(S3AUTH_CONFIG_FILE) {
            self.config_file = v;
        }
        if let Some(v) = non_empty_var(AWS_ACCESS_KEY_ID) {
            self.access_key = Some(v);
        }
        if let Some(v) = non_empty_var(AWS_SECRET_ACCESS_KEY) {
            self.secret_key = Some(v);
        }
        if let Some(v) = non_empty_var(AWS_REGION) {
            self.region = Some(v);
        }
        self
    }

    /// Path of the credential file with `~` expanded.
    pub fn config_path(&self) -> Result<PathBuf> {
        expand_homedir(&self.config_file)
            .map(PathBuf::from)
            .ok_or_else(|| format!("cannot expand home directory in {}", self.config_file).into())
    }

    /// The file store at [`Config::config_path`].
    pub fn file_store(&self) -> Result<FileStore> {
        Ok(FileStore::new(self.config_path()?))
    }

    /// Merge the overrides held by this config with what `store` has saved.
    ///
    /// Fields missing from both stay empty; the result is not checked for
    /// completeness.
    pub fn credentials(&self, store: &dyn CredentialStore) -> Result<Credentials> {
        let stored = store.load()?.unwrap_or_default();
        let pick = |over: &Option<String>, stored: String| over.clone().unwrap_or(stored);
        let creds = Credentials {
            access_key: pick(&self.access_key, stored.access_key),
            secret_key: pick(&self.secret_key, stored.secret_key),
            region: pick(&self.region, stored.region),
        };
        debug!("resolved credentials: {:?}", creds);
        Ok(creds)
    }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_homedir(path: &str) -> Option<String> {
    if !path.starts_with("~/") && !path.starts_with("~\\") {
        Some(path.to_string())
    } else {
        home::home_dir().map(|home| path.replacen('~', &home.to_string_lossy(), 1))
    }
}
