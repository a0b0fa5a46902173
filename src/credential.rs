//! Credentials and the stores they are persisted in.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::*;

/// Access key, secret key and region used to sign one request.
///
/// An empty field counts as absent.
#[derive(Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "AccessKey", default)]
    pub access_key: String,
    #[serde(rename = "SecretKey", default)]
    pub secret_key: String,
    #[serde(rename = "Region", default)]
    pub region: String,
}

impl Credentials {
    pub fn new(access_key: &str, secret_key: &str, region: &str) -> Self {
        Self {
            access_key: access_key.to_string(),
            secret_key: secret_key.to_string(),
            region: region.to_string(),
        }
    }

    /// Fail with `MissingCredentials` naming the first empty field.
    pub fn ensure_complete(&self) -> Result<()> {
        if self.access_key.is_empty() {
            bail!(ErrorKind::MissingCredentials("access key"));
        }
        if self.secret_key.is_empty() {
            bail!(ErrorKind::MissingCredentials("secret key"));
        }
        if self.region.is_empty() {
            bail!(ErrorKind::MissingCredentials("region"));
        }
        Ok(())
    }
}

// Keep the secret out of logs and panic messages.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("region", &self.region)
            .finish()
    }
}

/// Somewhere credentials can be loaded from and saved to.
pub trait CredentialStore {
    /// Load stored credentials.
    ///
    /// - If something is stored, return `Ok(Some(creds))`; fields that were
    ///   never set are empty.
    /// - If nothing is stored, return `Ok(None)`.
    /// - If the store cannot be read, return `Err(err)`.
    fn load(&self) -> Result<Option<Credentials>>;

    /// Replace the stored credentials.
    fn save(&self, creds: &Credentials) -> Result<()>;
}

// -----------------------------------------------------------------------------
/// Credentials kept in a TOML file with `AccessKey`, `SecretKey` and
/// `Region` keys.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileStore {
    fn load(&self) -> Result<Option<Credentials>> {
        if !self.path.exists() {
            debug!("credential file {} does not exist", self.path.display());
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)
            .chain_err(|| format!("error reading {}", self.path.display()))?;
        let creds: Credentials = toml::from_str(&content)
            .chain_err(|| format!("error parsing {}", self.path.display()))?;
        debug!("loaded credentials from {}", self.path.display());
        Ok(Some(creds))
    }

    fn save(&self, creds: &Credentials) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .chain_err(|| format!("error creating {}", parent.display()))?;
            }
        }
        let content = toml::to_string(creds)?;
        write_private(&self.path, content.as_bytes())
            .chain_err(|| format!("error writing {}", self.path.display()))?;
        debug!("saved credentials to {}", self.path.display());
        Ok(())
    }
}

/// Write `content` to `path`, readable by the owner only.
///
/// A new file is created with mode 0600; an existing file is narrowed to
/// 0600 before it is truncated and rewritten.
fn write_private(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }
    file.set_len(0)?;
    file.write_all(content)?;
    file.sync_all()
}

// -----------------------------------------------------------------------------
/// Credentials held in memory, for callers that source them elsewhere.
#[derive(Debug, Default)]
pub struct MemoryStore {
    creds: Mutex<Option<Credentials>>,
}

impl MemoryStore {
    pub fn new(creds: Option<Credentials>) -> Self {
        Self {
            creds: Mutex::new(creds),
        }
    }
}

impl CredentialStore for MemoryStore {
    fn load(&self) -> Result<Option<Credentials>> {
        let creds = self
            .creds
            .lock()
            .map_err(|_| Error::from("credential store lock poisoned"))?;
        Ok(creds.clone())
    }

    fn save(&self, creds: &Credentials) -> Result<()> {
        let mut lock = self
            .creds
            .lock()
            .map_err(|_| Error::from("credential store lock poisoned"))?;
        *lock = Some(creds.clone());
        Ok(())
    }
}
