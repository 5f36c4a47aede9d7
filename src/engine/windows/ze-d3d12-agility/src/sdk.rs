use std::ffi::CStr;

/// Agility SDK revision the redistributable shipped with the engine was built against.
pub const SDK_VERSION: u32 = 615;

/// Directory, relative to the executable, holding `D3D12Core.dll` and `d3d12SDKLayers.dll`.
pub const SDK_PATH: &CStr = c".\\D3D12\\";

pub const SDK_PATH_LEN: usize = SDK_PATH_BYTES.len();

/// [`SDK_PATH`] as the NUL-terminated byte array exported through `D3D12SDKPath`.
pub const SDK_PATH_BYTES: &[u8; 9] = b".\\D3D12\\\0";

/// Name of the core runtime library looked up inside [`SDK_PATH`].
pub const CORE_LIBRARY_NAME: &str = "D3D12Core.dll";
