//! Direct3D 11 sample that draws three colored triangles until the window closes.
//!
//! Everything above the Win32/Direct3D calls (vertex data, the resize state machine,
//! frame sequencing, error texts) builds on every target so it can be tested without a
//! GPU. The rest only exists on Windows.

pub mod frame;
pub mod init_error;
pub mod logging;
pub mod renderable;
pub mod resize_state;
pub mod sample_config;
pub mod shader_error;
pub mod vertex;
pub mod window_data;
pub mod windy_error;

#[cfg(windows)]
pub mod compile_shader;
#[cfg(windows)]
pub mod create_device;
#[cfg(windows)]
pub mod create_pipeline;
#[cfg(windows)]
pub mod create_swap_chain;
#[cfg(windows)]
pub mod create_vertex_buffer;
#[cfg(windows)]
pub mod create_window;
#[cfg(windows)]
pub mod gpu;
#[cfg(windows)]
pub mod message_box;
#[cfg(windows)]
pub mod renderer;
#[cfg(windows)]
pub mod run_sample;
#[cfg(windows)]
pub mod window_class;
