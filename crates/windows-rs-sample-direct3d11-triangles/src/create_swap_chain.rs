use tracing::info;
use windows::Win32::Foundation::*;
use windows::Win32::Graphics::Direct3D11::*;
use windows::Win32::Graphics::Dxgi::Common::*;
use windows::Win32::Graphics::Dxgi::*;

use crate::create_device::get_dxgi_factory;
use crate::init_error::InitError;
use crate::sample_config::SampleConfig;
use crate::windy_error::created;
use crate::windy_error::init_failure;
use crate::windy_error::MyResult;

/// Flip-model swap chains reject sRGB buffer formats; the view applies it instead.
const BACK_BUFFER_FORMAT: DXGI_FORMAT = DXGI_FORMAT_B8G8R8A8_UNORM;
const RENDER_TARGET_FORMAT: DXGI_FORMAT = DXGI_FORMAT_B8G8R8A8_UNORM_SRGB;

pub fn create_swap_chain(
    device: &ID3D11Device1,
    hwnd: HWND,
    config: &SampleConfig,
) -> MyResult<IDXGISwapChain1> {
    let dxgi_factory = get_dxgi_factory(device)?;

    let swap_chain_desc = DXGI_SWAP_CHAIN_DESC1 {
        Width: 0, // use window width
        Height: 0, // use window height
        Format: BACK_BUFFER_FORMAT,
        SampleDesc: DXGI_SAMPLE_DESC {
            Count: 1,
            Quality: 0,
        },
        BufferUsage: DXGI_USAGE_RENDER_TARGET_OUTPUT,
        BufferCount: config.swap_chain_buffer_count,
        Scaling: DXGI_SCALING_STRETCH,
        SwapEffect: DXGI_SWAP_EFFECT_FLIP_DISCARD,
        AlphaMode: DXGI_ALPHA_MODE_UNSPECIFIED,
        Flags: 0,
        ..Default::default()
    };

    let swap_chain =
        unsafe { dxgi_factory.CreateSwapChainForHwnd(device, hwnd, &swap_chain_desc, None, None) }
            .map_err(|e| init_failure(InitError::CreateSwapChain, e))?;

    unsafe { dxgi_factory.MakeWindowAssociation(hwnd, DXGI_MWA_NO_ALT_ENTER) }?;

    info!(
        "Swap chain created with {} buffers",
        config.swap_chain_buffer_count
    );
    Ok(swap_chain)
}

/// View over back buffer 0. The texture reference is released before returning.
pub fn create_render_target_view(
    device: &ID3D11Device1,
    swap_chain: &IDXGISwapChain1,
) -> MyResult<ID3D11RenderTargetView> {
    let back_buffer: ID3D11Texture2D = unsafe { swap_chain.GetBuffer(0) }?;
    let desc = D3D11_RENDER_TARGET_VIEW_DESC {
        Format: RENDER_TARGET_FORMAT,
        ViewDimension: D3D11_RTV_DIMENSION_TEXTURE2D,
        Anonymous: D3D11_RENDER_TARGET_VIEW_DESC_0 {
            Texture2D: D3D11_TEX2D_RTV { MipSlice: 0 },
        },
    };
    let mut render_target_view = None;
    unsafe { device.CreateRenderTargetView(&back_buffer, Some(&desc), Some(&mut render_target_view)) }?;
    created(render_target_view, "CreateRenderTargetView")
}
