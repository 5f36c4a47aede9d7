//! C layout of the `ID3D12SDKConfiguration1` vtable the shim calls through.
//!
//! The layout mirrors `d3d12.h` and does not depend on the Windows bindings, so the shim
//! builds (and is tested) on every platform.

use std::ffi::{c_char, c_void};
use windows_core::GUID;

/// Raw COM status code (`HRESULT`).
pub type HResult = i32;

/// Vtable of `ID3D12SDKConfiguration1`: `IUnknown`, then `ID3D12SDKConfiguration`, then its own methods.
#[repr(C)]
pub struct SdkConfiguration1Vtbl {
    pub query_interface: unsafe extern "system" fn(
        this: *mut SdkConfiguration1,
        riid: *const GUID,
        object: *mut *mut c_void,
    ) -> HResult,
    pub add_ref: unsafe extern "system" fn(this: *mut SdkConfiguration1) -> u32,
    pub release: unsafe extern "system" fn(this: *mut SdkConfiguration1) -> u32,
    pub set_sdk_version: unsafe extern "system" fn(
        this: *mut SdkConfiguration1,
        sdk_version: u32,
        sdk_path: *const c_char,
    ) -> HResult,
    pub create_device_factory: unsafe extern "system" fn(
        this: *mut SdkConfiguration1,
        sdk_version: u32,
        sdk_path: *const c_char,
        riid: *const GUID,
        factory: *mut *mut c_void,
    ) -> HResult,
    pub free_unused_sdks: unsafe extern "system" fn(this: *mut SdkConfiguration1),
}

/// Borrowed `ID3D12SDKConfiguration1` object.
///
/// Only ever handled behind a reference: instances are owned by the D3D12 runtime (or by
/// whoever implemented the interface) and this crate never adds or releases references.
#[repr(C)]
pub struct SdkConfiguration1 {
    pub vtable: *const SdkConfiguration1Vtbl,
}

impl SdkConfiguration1 {
    /// Call `CreateDeviceFactory` and return its status untouched.
    ///
    /// # Safety
    /// `self` must be a live object with a valid vtable. `sdk_path` and `factory` are handed to the
    /// implementation as-is and must satisfy whatever it requires of them.
    #[inline]
    pub unsafe fn create_device_factory(
        &self,
        sdk_version: u32,
        sdk_path: *const c_char,
        riid: &GUID,
        factory: *mut *mut c_void,
    ) -> HResult {
        let this = self as *const Self as *mut Self;
        ((*self.vtable).create_device_factory)(this, sdk_version, sdk_path, riid, factory)
    }
}
