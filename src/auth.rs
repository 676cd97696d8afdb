use crate::error::LcuError;
use base64::Engine;
use std::fmt;
use std::path::{Path, PathBuf};

/// Connection details advertised by the running client.
///
/// The lockfile holds a single line of the form
/// `name:pid:port:password:protocol`; only the last three fields are kept.
#[derive(Clone, PartialEq, Eq)]
pub struct LockfileData {
    pub port: u16,
    pub password: String,
    pub protocol: String,
}

impl LockfileData {
    pub fn read(path: impl AsRef<Path>) -> Result<Self, LcuError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LcuError::LockfileRead {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "read lockfile");

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, LcuError> {
        let text = content.trim();
        let parts: Vec<&str> = text.split(':').collect();
        let &[_name, _pid, port, password, protocol] = parts.as_slice() else {
            return Err(LcuError::LockfileMalformed(text.to_string()));
        };

        let port = match port.trim().parse::<u16>() {
            Ok(0) | Err(_) => return Err(LcuError::InvalidPort(port.to_string())),
            Ok(port) => port,
        };

        Ok(LockfileData {
            port,
            password: password.to_string(),
            protocol: protocol.to_string(),
        })
    }

    /// `(protocol, port, password)`
    pub fn into_parts(self) -> (String, u16, String) {
        (self.protocol, self.port, self.password)
    }
}

impl fmt::Debug for LockfileData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LockfileData")
            .field("port", &self.port)
            .field("password", &"<redacted>")
            .field("protocol", &self.protocol)
            .finish()
    }
}

/// Install location of the lockfile for a default client setup.
pub fn default_lockfile_path() -> PathBuf {
    if cfg!(target_os = "macos") {
        PathBuf::from("/Applications/League of Legends.app/Contents/LoL/lockfile")
    } else {
        PathBuf::from("C:/Riot Games/League of Legends/lockfile")
    }
}

/// `Authorization` value for the local API: Basic auth as user `riot`.
pub fn basic_auth_header(password: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(format!("riot:{}", password));
    format!("Basic {}", encoded)
}
