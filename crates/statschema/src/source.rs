//! Locating schema documents on disk.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Provides the on-disk location of an app's schema document
pub trait SchemaSource {
    fn schema_path(&self, app_id: u32) -> Result<PathBuf>;
}

/// File name of the cached schema for `app_id`
pub fn schema_file_name(app_id: u32) -> String {
    format!("UserGameStatsSchema_{}.bin", app_id)
}

/// A game client installation directory.
///
/// Schemas are cached under `<root>/appcache/stats/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteamInstall {
    root: PathBuf,
}

impl SteamInstall {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Find the installation from the system registry
    pub fn locate() -> Result<Self> {
        let root = read_install_path()?;
        debug!("Located installation at {}", root.display());
        Ok(Self::new(root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn stats_dir(&self) -> PathBuf {
        self.root.join("appcache").join("stats")
    }
}

impl SchemaSource for SteamInstall {
    fn schema_path(&self, app_id: u32) -> Result<PathBuf> {
        let path = self.stats_dir().join(schema_file_name(app_id));
        if !path.is_file() {
            return Err(Error::DocumentNotFound(path));
        }
        Ok(path)
    }
}

/// Reads `HKLM\Software\Valve\Steam\InstallPath`.
#[cfg(target_os = "windows")]
fn read_install_path() -> Result<PathBuf> {
    use windows::Win32::System::Registry::{HKEY_LOCAL_MACHINE, RRF_RT_REG_SZ, RegGetValueW};
    use windows::core::HSTRING;

    let subkey = HSTRING::from(r"Software\Valve\Steam");
    let value_name = HSTRING::from("InstallPath");

    let mut size: u32 = 0;
    // SAFETY: RegGetValueW with null buffer queries the required size.
    unsafe {
        RegGetValueW(
            HKEY_LOCAL_MACHINE,
            &subkey,
            &value_name,
            RRF_RT_REG_SZ,
            None,
            None,
            Some(&mut size),
        )
        .ok()
        .map_err(|e| Error::InstallNotFound(format!("registry value missing: {e}")))?;
    }

    let mut buffer = vec![0u16; (size as usize) / 2];
    // SAFETY: buffer holds `size` bytes as reported by the previous call.
    unsafe {
        RegGetValueW(
            HKEY_LOCAL_MACHINE,
            &subkey,
            &value_name,
            RRF_RT_REG_SZ,
            None,
            Some(buffer.as_mut_ptr().cast()),
            Some(&mut size),
        )
        .ok()
        .map_err(|e| Error::InstallNotFound(format!("failed to read registry value: {e}")))?;
    }

    while buffer.last() == Some(&0) {
        buffer.pop();
    }

    let install_path = String::from_utf16(&buffer)
        .map_err(|e| Error::InstallNotFound(format!("invalid UTF-16 in registry value: {e}")))?;
    if install_path.is_empty() {
        return Err(Error::InstallNotFound("registry value is empty".to_string()));
    }

    Ok(PathBuf::from(install_path))
}

#[cfg(not(target_os = "windows"))]
fn read_install_path() -> Result<PathBuf> {
    Err(Error::InstallNotFound(
        "registry lookup is only supported on Windows".to_string(),
    ))
}
