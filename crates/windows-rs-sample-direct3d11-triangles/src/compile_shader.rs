use std::path::Path;
use tracing::debug;
use windows::core::*;
use windows::Win32::Foundation::*;
use windows::Win32::Graphics::Direct3D::Fxc::*;
use windows::Win32::Graphics::Direct3D::*;

use crate::sample_config::ShaderStage;
use crate::shader_error::ShaderCompileError;

/// Compiles one entry point of an HLSL file.
pub fn compile_shader(
    hlsl_path: &Path,
    stage: &ShaderStage,
    flags: u32,
) -> std::result::Result<ID3DBlob, ShaderCompileError> {
    let path = HSTRING::from(hlsl_path);
    let mut shader_blob = None;
    let mut error_blob = None;
    let result = unsafe {
        D3DCompileFromFile(
            &path,
            None, // Defines
            None, // Include handler
            PCSTR(stage.entry_point.as_ptr().cast()),
            PCSTR(stage.target.as_ptr().cast()),
            flags,
            0, // Effect flags
            &mut shader_blob,
            Some(&mut error_blob),
        )
    };

    match (result, shader_blob) {
        (Ok(()), Some(blob)) => {
            debug!(
                "Compiled {} ({}) from {}: {} bytes",
                stage.entry_point_str(),
                stage.target_str(),
                hlsl_path.display(),
                blob_len(&blob)
            );
            Ok(blob)
        }
        (Err(e), _) if is_missing_file(e.code()) => Err(ShaderCompileError::FileNotFound {
            path: hlsl_path.to_path_buf(),
        }),
        (result, _) => {
            let fallback = match result {
                Err(e) => e.message().to_string(),
                Ok(()) => "compiler returned no bytecode".to_string(),
            };
            let diagnostics = error_blob.as_ref().map(|blob| unsafe { blob_bytes(blob) });
            Err(ShaderCompileError::from_compiler_output(
                stage.entry_point_str(),
                stage.target_str(),
                diagnostics,
                fallback,
            ))
        }
    }
}

fn is_missing_file(code: HRESULT) -> bool {
    code == ERROR_FILE_NOT_FOUND.to_hresult() || code == ERROR_PATH_NOT_FOUND.to_hresult()
}

fn blob_len(blob: &ID3DBlob) -> usize {
    unsafe { blob.GetBufferSize() }
}

/// # Safety
/// The slice borrows the blob's memory and must not outlive it.
pub unsafe fn blob_bytes(blob: &ID3DBlob) -> &[u8] {
    std::slice::from_raw_parts(blob.GetBufferPointer() as *const u8, blob.GetBufferSize())
}
