use tracing::info;
use tracing::warn;
use windows::core::*;
use windows::Win32::Foundation::*;
use windows::Win32::Graphics::Direct3D::*;
use windows::Win32::Graphics::Direct3D11::*;
use windows::Win32::Graphics::Dxgi::*;

use crate::init_error::InitError;
use crate::sample_config::SampleConfig;
use crate::windy_error::init_failure;
use crate::windy_error::init_stage_failed;
use crate::windy_error::MyResult;

/// Hardware device at feature level 11.0, upgraded to the 11.1 interfaces.
pub fn create_device(config: &SampleConfig) -> MyResult<(ID3D11Device1, ID3D11DeviceContext1)> {
    let mut flags = D3D11_CREATE_DEVICE_BGRA_SUPPORT;
    if config.debug_layer {
        flags |= D3D11_CREATE_DEVICE_DEBUG;
    }
    let feature_levels = [D3D_FEATURE_LEVEL_11_0];

    let mut device: Option<ID3D11Device> = None;
    let mut context: Option<ID3D11DeviceContext> = None;
    unsafe {
        D3D11CreateDevice(
            None,
            D3D_DRIVER_TYPE_HARDWARE,
            HMODULE::default(),
            flags,
            Some(&feature_levels),
            D3D11_SDK_VERSION,
            Some(&mut device),
            None,
            Some(&mut context),
        )
    }
    .map_err(|e| init_failure(InitError::CreateDevice, e))?;
    let (Some(device), Some(context)) = (device, context) else {
        return Err(init_stage_failed(InitError::CreateDevice));
    };

    // Every 11.1 runtime exposes these; a failure here means a broken install, not a missing GPU.
    let device: ID3D11Device1 = device.cast()?;
    let context: ID3D11DeviceContext1 = context.cast()?;

    if config.debug_layer {
        match break_on_validation_errors(&device) {
            Ok(()) => info!("D3D11 Debug Layer Enabled"),
            Err(e) => warn!("Warning: D3D11 info queue unavailable: {e}"),
        }
    }
    Ok((device, context))
}

fn break_on_validation_errors(device: &ID3D11Device1) -> Result<()> {
    let debug: ID3D11Debug = device.cast()?;
    let info_queue: ID3D11InfoQueue = debug.cast()?;
    unsafe {
        info_queue.SetBreakOnSeverity(D3D11_MESSAGE_SEVERITY_CORRUPTION, true)?;
        info_queue.SetBreakOnSeverity(D3D11_MESSAGE_SEVERITY_ERROR, true)?;
    }
    Ok(())
}

/// Walks device → adapter → factory, logging the adapter on the way.
pub fn get_dxgi_factory(device: &ID3D11Device1) -> MyResult<IDXGIFactory2> {
    let dxgi_device: IDXGIDevice1 = device.cast()?;
    let adapter = unsafe { dxgi_device.GetAdapter() }?;
    let desc = unsafe { adapter.GetDesc() }?;
    let adapter_name = String::from_utf16_lossy(&desc.Description);
    info!("Graphics Device: {}", adapter_name.trim_end_matches('\0'));
    Ok(unsafe { adapter.GetParent::<IDXGIFactory2>() }?)
}
