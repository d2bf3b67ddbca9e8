use crate::renderable::Renderable;
use crate::renderable::Scene;
use crate::resize_state::apply_pending_resize;
use crate::resize_state::ResizeState;
use crate::resize_state::SwapChainTarget;
use crate::windy_error::MyResult;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSettings {
    pub clear_color: [f32; 4],
    /// 1 waits for one vertical blank per present.
    pub sync_interval: u32,
}

impl Default for FrameSettings {
    fn default() -> Self {
        Self {
            clear_color: [0.2, 0.2, 0.2, 1.0],
            sync_interval: 1,
        }
    }
}

/// Client area the frame covers, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn from_client_rect(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            width: right.saturating_sub(left).max(0) as u32,
            height: bottom.saturating_sub(top).max(0) as u32,
        }
    }

    /// A minimized window has no client area to draw into.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// The immediate-context calls one frame is made of.
pub trait FrameCommands {
    type Pipeline;
    type Buffer;

    fn clear_render_target(&mut self, color: &[f32; 4]);
    fn set_viewport(&mut self, viewport: Viewport);
    fn bind_render_target(&mut self);
    /// Topology, input layout and both shader stages.
    fn bind_pipeline(&mut self, pipeline: &Self::Pipeline);
    /// Binds the triangle's vertex buffer and issues a non-indexed draw.
    fn draw(&mut self, triangle: &Renderable<Self::Buffer>);
    fn present(&mut self, sync_interval: u32) -> MyResult<()>;
}

/// Records and presents one frame.
///
/// Every triangle shares the same pipeline, so it is bound once per frame rather than
/// once per draw.
pub fn render_frame<C: FrameCommands>(
    commands: &mut C,
    scene: &Scene<C::Pipeline, C::Buffer>,
    viewport: Viewport,
    settings: &FrameSettings,
) -> MyResult<()> {
    commands.clear_render_target(&settings.clear_color);
    commands.set_viewport(viewport);
    commands.bind_render_target();
    commands.bind_pipeline(&scene.pipeline);
    for triangle in &scene.triangles {
        commands.draw(triangle);
    }
    commands.present(settings.sync_interval)
}

/// One idle tick: rebuild after a resize if needed, then draw and present.
///
/// A minimized window keeps its pending resize and draws nothing until it has a
/// client area again. Returns whether a frame was presented.
pub fn idle_tick<G: SwapChainTarget + FrameCommands>(
    gpu: &mut G,
    resize: &mut ResizeState,
    scene: &Scene<G::Pipeline, G::Buffer>,
    viewport: Viewport,
    settings: &FrameSettings,
) -> MyResult<bool> {
    if viewport.is_empty() {
        return Ok(false);
    }
    apply_pending_resize(resize, gpu)?;
    render_frame(gpu, scene, viewport, settings)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderable::build_triangles;
    use crate::vertex::TRIANGLES;

    #[derive(Debug, PartialEq)]
    enum Call {
        Clear([f32; 4]),
        Viewport(Viewport),
        BindRenderTarget,
        BindPipeline(&'static str),
        Draw { buffer: usize, vertex_count: u32, stride: u32 },
        Present(u32),
        UnbindRenderTargets,
        ReleaseView,
        ResizeBuffers,
        RebuildView,
    }

    #[derive(Default)]
    struct RecordingContext {
        calls: Vec<Call>,
    }

    impl FrameCommands for RecordingContext {
        type Pipeline = &'static str;
        type Buffer = usize;

        fn clear_render_target(&mut self, color: &[f32; 4]) {
            self.calls.push(Call::Clear(*color));
        }
        fn set_viewport(&mut self, viewport: Viewport) {
            self.calls.push(Call::Viewport(viewport));
        }
        fn bind_render_target(&mut self) {
            self.calls.push(Call::BindRenderTarget);
        }
        fn bind_pipeline(&mut self, pipeline: &&'static str) {
            self.calls.push(Call::BindPipeline(*pipeline));
        }
        fn draw(&mut self, triangle: &Renderable<usize>) {
            self.calls.push(Call::Draw {
                buffer: triangle.buffer,
                vertex_count: triangle.vertex_count,
                stride: triangle.stride,
            });
        }
        fn present(&mut self, sync_interval: u32) -> MyResult<()> {
            self.calls.push(Call::Present(sync_interval));
            Ok(())
        }
    }

    impl SwapChainTarget for RecordingContext {
        fn unbind_render_targets(&mut self) {
            self.calls.push(Call::UnbindRenderTargets);
        }
        fn release_render_target_view(&mut self) {
            self.calls.push(Call::ReleaseView);
        }
        fn resize_back_buffers(&mut self) -> MyResult<()> {
            self.calls.push(Call::ResizeBuffers);
            Ok(())
        }
        fn rebuild_render_target_view(&mut self) -> MyResult<()> {
            self.calls.push(Call::RebuildView);
            Ok(())
        }
    }

    fn scene() -> Scene<&'static str, usize> {
        let mut next = 0;
        let triangles = build_triangles(&TRIANGLES, |_| {
            next += 1;
            Ok(next)
        })
        .unwrap();
        Scene {
            triangles,
            pipeline: "colored",
        }
    }

    #[test]
    fn frame_draws_every_triangle_in_order_then_presents() {
        let mut context = RecordingContext::default();
        let viewport = Viewport {
            width: 1024,
            height: 768,
        };
        render_frame(&mut context, &scene(), viewport, &FrameSettings::default()).unwrap();

        let draw = |buffer| Call::Draw {
            buffer,
            vertex_count: 3,
            stride: 24,
        };
        assert_eq!(
            context.calls,
            vec![
                Call::Clear([0.2, 0.2, 0.2, 1.0]),
                Call::Viewport(viewport),
                Call::BindRenderTarget,
                Call::BindPipeline("colored"),
                draw(1),
                draw(2),
                draw(3),
                Call::Present(1),
            ]
        );
    }

    #[test]
    fn minimized_window_keeps_resize_pending_until_restored() {
        let mut context = RecordingContext::default();
        let scene = scene();
        let settings = FrameSettings::default();
        let mut resize = ResizeState::default();
        resize.on_size_changed();

        let minimized = Viewport::from_client_rect(0, 0, 0, 0);
        for _ in 0..3 {
            let presented =
                idle_tick(&mut context, &mut resize, &scene, minimized, &settings).unwrap();
            assert!(!presented);
        }
        assert!(context.calls.is_empty());
        assert_eq!(resize, ResizeState::ResizePending);

        let restored = Viewport {
            width: 800,
            height: 600,
        };
        assert!(idle_tick(&mut context, &mut resize, &scene, restored, &settings).unwrap());
        assert!(idle_tick(&mut context, &mut resize, &scene, restored, &settings).unwrap());
        assert_eq!(resize, ResizeState::Stable);

        let rebuilds = context
            .calls
            .iter()
            .filter(|call| **call == Call::RebuildView)
            .count();
        assert_eq!(rebuilds, 1);
        assert_eq!(
            context.calls[..5],
            [
                Call::UnbindRenderTargets,
                Call::ReleaseView,
                Call::ResizeBuffers,
                Call::RebuildView,
                Call::Clear([0.2, 0.2, 0.2, 1.0]),
            ]
        );
        let presents = context
            .calls
            .iter()
            .filter(|call| **call == Call::Present(1))
            .count();
        assert_eq!(presents, 2);
    }

    #[test]
    fn viewport_tracks_client_rect() {
        assert_eq!(
            Viewport::from_client_rect(0, 0, 1024, 768),
            Viewport {
                width: 1024,
                height: 768
            }
        );
        assert!(Viewport::from_client_rect(0, 0, 0, 0).is_empty());
        assert!(Viewport::from_client_rect(10, 10, 5, 40).is_empty());
    }
}
