//! Tunable defaults for the path operations and the codec.
//!
//! The free functions in `fs_op` and `codec` always use
//! `Settings::default()`. Applications that want other modes or levels
//! load a `Settings` (usually from TOML) and go through its methods.

use std::io::Write;
use std::path::{Path, PathBuf};

use directories_next::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codec::{self, CodecWriter, DEFAULT_GZIP_LEVEL};
use crate::fs_op::{self, FsOpError, COPY_BUFFER_SIZE, DEFAULT_DIR_MODE, DEFAULT_FILE_MODE};

/// Errors returned when loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read settings: {0}")]
    Read(#[from] FsOpError),

    #[error("invalid settings file `{}`: {}", path.display(), source)]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Mode for files created by `write`.
    pub file_mode: u32,
    /// Mode for directories created on behalf of `write` and `copy`.
    pub dir_mode: u32,
    pub copy_buffer_size: usize,
    /// Gzip level, 0 (store) to 9 (best).
    pub gzip_level: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            file_mode: DEFAULT_FILE_MODE,
            dir_mode: DEFAULT_DIR_MODE,
            copy_buffer_size: COPY_BUFFER_SIZE,
            gzip_level: DEFAULT_GZIP_LEVEL,
        }
    }
}

impl Settings {
    /// Parse settings from a TOML string. Missing keys keep their defaults.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let p = path.as_ref();
        let raw = fs_op::read(p)?;
        let text = String::from_utf8_lossy(&raw);
        let settings = Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: p.to_path_buf(),
            source,
        })?;
        tracing::debug!("loaded settings from {}", p.display());
        Ok(settings)
    }

    /// Like `load`, but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Read(e)) if e.is_not_found() => Ok(Self::default()),
            other => other,
        }
    }

    /// Conventional per-user location: `<config dir>/statefile/settings.toml`.
    /// `None` when no home directory can be determined.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "statefile").map(|d| d.config_dir().join("settings.toml"))
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// `fs_op::write` with these modes.
    pub fn write(&self, path: impl AsRef<Path>, data: &[u8]) -> Result<(), FsOpError> {
        fs_op::write::write_with(path.as_ref(), data, self.file_mode, self.dir_mode, false)
    }

    /// `fs_op::copy` with this buffer size and directory mode.
    pub fn copy(&self, old: impl AsRef<Path>, new: impl AsRef<Path>) -> Result<u64, FsOpError> {
        fs_op::copy::copy_with(old.as_ref(), new.as_ref(), self.copy_buffer_size, self.dir_mode)
    }

    /// `codec::compress` at this gzip level.
    pub fn compress<W: Write>(&self, name: impl AsRef<Path>, writer: W) -> CodecWriter<W> {
        codec::compress_with_level(name, writer, self.gzip_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn partial_toml_keeps_defaults() {
        let s = Settings::from_toml("gzip_level = 9\n").unwrap();
        assert_eq!(s.gzip_level, 9);
        assert_eq!(s.file_mode, DEFAULT_FILE_MODE);
        assert_eq!(s.copy_buffer_size, COPY_BUFFER_SIZE);
    }

    #[test]
    fn toml_round_trips() {
        let s = Settings { file_mode: 0o600, ..Settings::default() };
        let text = s.to_toml().unwrap();
        assert_eq!(Settings::from_toml(&text).unwrap(), s);
    }

    #[test]
    fn load_reports_parse_errors_with_path() {
        let td = tempdir().unwrap();
        let p = td.path().join("settings.toml");
        std::fs::write(&p, "file_mode = \"rw\"").unwrap();
        let err = Settings::load(&p).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { ref path, .. } if path == &p));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let td = tempdir().unwrap();
        let s = Settings::load_or_default(td.path().join("absent.toml")).unwrap();
        assert_eq!(s, Settings::default());
        assert!(matches!(
            Settings::load(td.path().join("absent.toml")),
            Err(ConfigError::Read(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn write_uses_configured_directory_mode() {
        use std::os::unix::fs::PermissionsExt;
        let td = tempdir().unwrap();
        let s = Settings { dir_mode: 0o700, ..Settings::default() };
        s.write(td.path().join("private/state"), b"x").unwrap();
        let mode = std::fs::metadata(td.path().join("private")).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o700);
    }

    #[test]
    fn compress_level_zero_still_decodes() {
        use std::io::Read;
        let s = Settings { gzip_level: 0, ..Settings::default() };
        let mut w = s.compress("a.gz", Vec::new());
        w.write_all(b"stored").unwrap();
        let bytes = w.finish().unwrap();
        let mut out = Vec::new();
        codec::decompress("a.gz", &bytes[..]).unwrap().read_to_end(&mut out).unwrap();
        assert_eq!(out, b"stored");
    }
}
