//! Native entry point forwarding to `ID3D12SDKConfiguration1::CreateDeviceFactory`.
//!
//! Foreign hosts that only hold a raw interface pointer call [`D3D12_Impl_CreateDeviceFactory`].
//! It validates, logs and translates nothing: the driver's status comes back as-is and the output
//! slot is only ever written by the driver. Rust callers go through [`create_device_factory`],
//! which turns the status and the produced pointer into a `Result`.

use crate::desc::AgilitySdkDesc;
use crate::error::{AgilityError, Status};
use crate::interface::{HResult, SdkConfiguration1};
use std::ffi::{c_char, c_void};
use std::ptr::{self, NonNull};
use windows_core::GUID;

/// Forward to `configuration->CreateDeviceFactory(sdk_version, sdk_path, riid, factory)`.
///
/// # Safety
/// `configuration` must point to a live `ID3D12SDKConfiguration1`. `sdk_path` and `factory` are
/// passed through untouched, so they must meet the driver's requirements.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn D3D12_Impl_CreateDeviceFactory(
    configuration: &SdkConfiguration1,
    sdk_version: u32,
    sdk_path: *const c_char,
    riid: &GUID,
    factory: *mut *mut c_void,
) -> HResult {
    configuration.create_device_factory(sdk_version, sdk_path, riid, factory)
}

/// Create a factory implementing `riid` for the SDK described by `desc`.
///
/// A failing status, or a successful one that produced nothing, is a
/// [`AgilityError::DeviceFactoryCreation`]. The returned reference is owned by the caller.
///
/// # Safety
/// `configuration` must be a live `ID3D12SDKConfiguration1`.
pub unsafe fn create_device_factory(
    configuration: &SdkConfiguration1,
    desc: &AgilitySdkDesc,
    riid: &GUID,
) -> Result<NonNull<c_void>, AgilityError> {
    let mut factory: *mut c_void = ptr::null_mut();
    let status = Status::from(D3D12_Impl_CreateDeviceFactory(
        configuration,
        desc.version,
        desc.path().as_ptr(),
        riid,
        &mut factory,
    ));

    let status = status.ok().map_err(AgilityError::DeviceFactoryCreation)?;
    NonNull::new(factory).ok_or(AgilityError::DeviceFactoryCreation(status))
}
