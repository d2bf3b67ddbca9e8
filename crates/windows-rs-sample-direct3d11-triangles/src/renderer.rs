use tracing::debug;
use tracing::info;
use windows::Win32::Graphics::Direct3D11::ID3D11Buffer;

use crate::create_pipeline::create_pipeline;
use crate::create_pipeline::Pipeline;
use crate::create_vertex_buffer::create_triangles;
use crate::create_window::Window;
use crate::frame::idle_tick;
use crate::frame::FrameSettings;
use crate::frame::Viewport;
use crate::gpu::Gpu;
use crate::renderable::Scene;
use crate::resize_state::ResizeState;
use crate::sample_config::SampleConfig;
use crate::vertex::TRIANGLES;
use crate::windy_error::MyResult;

/// Owns every GPU object the sample creates.
///
/// The scene is declared before the GPU so buffers, layout and shaders are released
/// before the swap chain, context and device.
pub struct Renderer {
    scene: Scene<Pipeline, ID3D11Buffer>,
    gpu: Gpu,
    settings: FrameSettings,
}

impl Renderer {
    /// Any failure drops what was already created, in reverse order, before returning.
    pub fn bind_to_window(window: &Window, config: &SampleConfig) -> MyResult<Self> {
        let gpu = Gpu::new(window.hwnd(), config)?;
        let pipeline = create_pipeline(gpu.device(), config)?;
        let triangles = create_triangles(gpu.device(), &TRIANGLES)?;
        info!("Uploaded {} triangles", triangles.len());
        Ok(Self {
            scene: Scene {
                triangles,
                pipeline,
            },
            gpu,
            settings: config.frame,
        })
    }

    pub fn on_idle(&mut self, resize: &mut ResizeState, viewport: Viewport) -> MyResult<()> {
        idle_tick(&mut self.gpu, resize, &self.scene, viewport, &self.settings)?;
        Ok(())
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        self.gpu.clear_state();
        debug!("Releasing GPU objects");
    }
}
