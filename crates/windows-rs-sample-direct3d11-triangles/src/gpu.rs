use tracing::info;
use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Direct3D::*;
use windows::Win32::Graphics::Direct3D11::*;
use windows::Win32::Graphics::Dxgi::Common::*;
use windows::Win32::Graphics::Dxgi::*;

use crate::create_device::create_device;
use crate::create_pipeline::Pipeline;
use crate::create_swap_chain::create_render_target_view;
use crate::create_swap_chain::create_swap_chain;
use crate::frame::FrameCommands;
use crate::frame::Viewport;
use crate::renderable::Renderable;
use crate::resize_state::SwapChainTarget;
use crate::sample_config::SampleConfig;
use crate::windy_error::MyResult;

/// Device, immediate context, swap chain and the view over its back buffer.
///
/// Fields drop top to bottom, so the view goes first and the device last.
pub struct Gpu {
    render_target_view: Option<ID3D11RenderTargetView>,
    swap_chain: IDXGISwapChain1,
    context: ID3D11DeviceContext1,
    device: ID3D11Device1,
}

impl Gpu {
    pub fn new(hwnd: HWND, config: &SampleConfig) -> MyResult<Self> {
        let (device, context) = create_device(config)?;
        let swap_chain = create_swap_chain(&device, hwnd, config)?;
        let render_target_view = create_render_target_view(&device, &swap_chain)?;
        Ok(Self {
            render_target_view: Some(render_target_view),
            swap_chain,
            context,
            device,
        })
    }

    pub fn device(&self) -> &ID3D11Device1 {
        &self.device
    }

    /// Unbinds everything from the pipeline so the objects below can be released.
    pub fn clear_state(&self) {
        unsafe { self.context.ClearState() };
    }
}

impl SwapChainTarget for Gpu {
    fn unbind_render_targets(&mut self) {
        unsafe { self.context.OMSetRenderTargets(None, None) };
    }

    fn release_render_target_view(&mut self) {
        self.render_target_view = None;
    }

    fn resize_back_buffers(&mut self) -> MyResult<()> {
        // Zero keeps the buffer count and format and takes the size from the client area.
        unsafe {
            self.swap_chain
                .ResizeBuffers(0, 0, 0, DXGI_FORMAT_UNKNOWN, DXGI_SWAP_CHAIN_FLAG(0))
        }?;
        Ok(())
    }

    fn rebuild_render_target_view(&mut self) -> MyResult<()> {
        self.render_target_view = Some(create_render_target_view(&self.device, &self.swap_chain)?);
        let desc = unsafe { self.swap_chain.GetDesc1() }?;
        info!("Back buffers resized to {}x{}", desc.Width, desc.Height);
        Ok(())
    }
}

impl FrameCommands for Gpu {
    type Pipeline = Pipeline;
    type Buffer = ID3D11Buffer;

    fn clear_render_target(&mut self, color: &[f32; 4]) {
        if let Some(render_target_view) = &self.render_target_view {
            unsafe { self.context.ClearRenderTargetView(render_target_view, color) };
        }
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        let viewport = D3D11_VIEWPORT {
            TopLeftX: 0.0,
            TopLeftY: 0.0,
            Width: viewport.width as f32,
            Height: viewport.height as f32,
            MinDepth: 0.0,
            MaxDepth: 1.0,
        };
        unsafe { self.context.RSSetViewports(Some(&[viewport])) };
    }

    fn bind_render_target(&mut self) {
        unsafe {
            self.context
                .OMSetRenderTargets(Some(&[self.render_target_view.clone()]), None)
        };
    }

    fn bind_pipeline(&mut self, pipeline: &Pipeline) {
        unsafe {
            self.context
                .IASetPrimitiveTopology(D3D11_PRIMITIVE_TOPOLOGY_TRIANGLELIST);
            self.context.IASetInputLayout(&pipeline.input_layout);
            self.context.VSSetShader(&pipeline.vertex_shader, None);
            self.context.PSSetShader(&pipeline.pixel_shader, None);
        }
    }

    fn draw(&mut self, triangle: &Renderable<ID3D11Buffer>) {
        unsafe {
            self.context.IASetVertexBuffers(
                0,
                1,
                Some(&Some(triangle.buffer.clone())),
                Some(&triangle.stride),
                Some(&triangle.offset),
            );
            self.context.Draw(triangle.vertex_count, 0);
        }
    }

    fn present(&mut self, sync_interval: u32) -> MyResult<()> {
        unsafe { self.swap_chain.Present(sync_interval, DXGI_PRESENT::default()) }.ok()?;
        Ok(())
    }
}
