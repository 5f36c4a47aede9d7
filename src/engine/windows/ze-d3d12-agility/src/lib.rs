//! Agility SDK plumbing for the D3D12 backend.
//!
//! The crate is built both as a native library exporting the surface the D3D12 runtime and
//! foreign hosts expect (`D3D12SDKVersion`, `D3D12SDKPath`, `D3D12_Impl_CreateDeviceFactory`)
//! and as a Rust library exposing the same pieces with typed handles.

pub mod desc;
pub mod error;
pub mod interface;
pub mod sdk;
pub mod shim;

cfg_if::cfg_if! {
    if #[cfg(windows)] {
        pub mod agility;

        pub use agility::AgilitySdk;
    }
}

pub use desc::AgilitySdkDesc;
pub use error::{AgilityError, Status};
pub use interface::SdkConfiguration1;

/// Publish `D3D12SDKVersion` and `D3D12SDKPath` from the image invoking the macro.
///
/// The D3D12 runtime only looks for these in the process executable, so a Rust host must expand
/// this in its binary crate (and depend on this crate with `default-features = false`).
#[macro_export]
macro_rules! ze_d3d12_agility_sdk_statics {
    () => {
        #[no_mangle]
        #[used]
        #[allow(non_upper_case_globals)]
        pub static D3D12SDKVersion: u32 = $crate::sdk::SDK_VERSION;

        #[no_mangle]
        #[used]
        #[allow(non_upper_case_globals)]
        pub static D3D12SDKPath: &[u8; $crate::sdk::SDK_PATH_LEN] = $crate::sdk::SDK_PATH_BYTES;
    };
}

#[cfg(feature = "native-exports")]
ze_d3d12_agility_sdk_statics!();
