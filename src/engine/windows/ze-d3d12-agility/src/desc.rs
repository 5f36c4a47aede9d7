use crate::error::AgilityError;
use crate::sdk::{CORE_LIBRARY_NAME, SDK_PATH, SDK_VERSION};
use std::ffi::{CStr, CString};
use std::path::{Path, PathBuf};

/// Agility SDK revision and redistributable location requested from the runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgilitySdkDesc {
    pub version: u32,
    pub path: CString,
}

impl AgilitySdkDesc {
    pub fn new(version: u32, path: &str) -> Result<Self, AgilityError> {
        let path = CString::new(path).map_err(|_| AgilityError::InvalidPath)?;
        Ok(Self { version, path })
    }

    pub fn path(&self) -> &CStr {
        &self.path
    }

    /// Where `D3D12Core.dll` is expected when the runtime resolves the path against `base`.
    /// Absolute paths ignore `base`.
    pub fn core_library_path(&self, base: &Path) -> PathBuf {
        let relative = self.path.to_string_lossy();
        if Path::new(&*relative).is_absolute() {
            return Path::new(&*relative).join(CORE_LIBRARY_NAME);
        }

        let mut path = base.to_path_buf();
        for component in relative.split(['\\', '/']) {
            match component {
                "" | "." => {}
                ".." => {
                    path.pop();
                }
                component => path.push(component),
            }
        }
        path.push(CORE_LIBRARY_NAME);
        path
    }
}

impl Default for AgilitySdkDesc {
    fn default() -> Self {
        Self {
            version: SDK_VERSION,
            path: SDK_PATH.to_owned(),
        }
    }
}
