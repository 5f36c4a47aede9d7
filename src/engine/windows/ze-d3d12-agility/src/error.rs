use crate::interface::HResult;
use std::fmt;
use thiserror::Error;

/// Status code returned by the D3D12 runtime, classified the COM way.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Status(pub HResult);

impl Status {
    pub const OK: Status = Status(0);

    /// Negative codes are failures; zero and positive codes are (possibly qualified) successes.
    pub const fn is_ok(self) -> bool {
        self.0 >= 0
    }

    pub fn ok(self) -> Result<Status, Status> {
        if self.is_ok() {
            Ok(self)
        } else {
            Err(self)
        }
    }
}

impl From<HResult> for Status {
    fn from(code: HResult) -> Self {
        Self(code)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#010x}", self.0 as u32)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgilityError {
    /// SDK path cannot be passed as a C string.
    #[error("Agility SDK path contains an interior nul byte")]
    InvalidPath,

    /// `D3D12GetInterface` could not provide `ID3D12SDKConfiguration1`.
    #[error("D3D12 SDK configuration unavailable (status {0})")]
    ConfigurationUnavailable(Status),

    /// `CreateDeviceFactory` failed or produced no object.
    #[error("Failed to create D3D12 device factory (status {0})")]
    DeviceFactoryCreation(Status),
}
