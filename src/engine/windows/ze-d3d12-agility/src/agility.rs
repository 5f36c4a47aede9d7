use crate::desc::AgilitySdkDesc;
use crate::error::{AgilityError, Status};
use crate::interface::SdkConfiguration1;
use crate::shim;
use windows::core::Interface;
use windows::Win32::Foundation::E_POINTER;
use windows::Win32::Graphics::Direct3D12::*;
use ze_core::{ze_error, ze_info, ze_verbose, ze_warn};

/// Entry point to the Agility SDK exposed by the D3D12 runtime.
pub struct AgilitySdk {
    configuration: ID3D12SDKConfiguration1,
}

impl AgilitySdk {
    pub fn new() -> Result<AgilitySdk, AgilityError> {
        let configuration = unsafe {
            let mut configuration: Option<ID3D12SDKConfiguration1> = None;
            match D3D12GetInterface(&CLSID_D3D12SDKConfiguration, &mut configuration) {
                Ok(()) => configuration,
                Err(error) => {
                    let status = Status::from(error.code().0);
                    ze_error!("Failed to get D3D12 SDK configuration ({})", status);
                    return Err(AgilityError::ConfigurationUnavailable(status));
                }
            }
        };

        match configuration {
            Some(configuration) => Ok(AgilitySdk { configuration }),
            None => {
                ze_error!("D3D12 SDK configuration interface is null");
                Err(AgilityError::ConfigurationUnavailable(Status::from(
                    E_POINTER.0,
                )))
            }
        }
    }

    /// Create a device factory bound to the SDK described by `desc`.
    pub fn create_device_factory(
        &self,
        desc: &AgilitySdkDesc,
    ) -> Result<ID3D12DeviceFactory, AgilityError> {
        Self::check_redistributable(desc);

        ze_info!(
            "Using Agility SDK {} from {:?}",
            desc.version,
            desc.path().to_string_lossy()
        );

        let factory = unsafe {
            let configuration = &*(self.configuration.as_raw() as *const SdkConfiguration1);
            shim::create_device_factory(configuration, desc, &ID3D12DeviceFactory::IID)
        };

        match factory {
            Ok(factory) => Ok(unsafe { ID3D12DeviceFactory::from_raw(factory.as_ptr()) }),
            Err(error) => {
                ze_error!("{}", error);
                Err(error)
            }
        }
    }

    /// Unload SDK versions no longer referenced by any device factory.
    pub fn free_unused_sdks(&self) {
        unsafe {
            self.configuration.FreeUnusedSDKs();
        }
        ze_verbose!("Released unused Agility SDKs");
    }

    fn check_redistributable(desc: &AgilitySdkDesc) {
        let Some(exe_dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
        else {
            return;
        };

        let core_library = desc.core_library_path(&exe_dir);
        if !core_library.is_file() {
            ze_warn!(
                "{} not found, the runtime will fall back to the system D3D12",
                core_library.display()
            );
        }
    }
}
