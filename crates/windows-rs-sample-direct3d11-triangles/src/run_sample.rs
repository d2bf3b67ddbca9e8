use tracing::info;
use windows::Win32::Foundation::*;
use windows::Win32::System::LibraryLoader::*;
use windows::Win32::UI::WindowsAndMessaging::*;

use crate::create_window::Window;
use crate::renderer::Renderer;
use crate::sample_config::SampleConfig;
use crate::window_class::WindowClass;
use crate::windy_error::MyResult;

/// Window setup, device setup, then the message loop. Returns the WM_QUIT exit code.
///
/// Locals drop in reverse: renderer, then window, then class.
pub fn run_sample(config: &SampleConfig) -> MyResult<i32> {
    let our_module = get_handle_to_file_used_to_create_the_calling_process()?;
    let window_class = WindowClass::register(our_module, config.window_class)?;
    let window = Window::create(our_module, &window_class, config)?;
    let mut renderer = Renderer::bind_to_window(&window, config)?;

    info!("Entering message loop");
    loop {
        let mut message = MSG::default();
        if unsafe { PeekMessageW(&mut message, None, 0, 0, PM_REMOVE) }.into() {
            unsafe {
                _ = TranslateMessage(&message);
                DispatchMessageW(&message);
            }
            if message.message == WM_QUIT {
                info!("WM_QUIT received, shutting down");
                return Ok(message.wParam.0 as i32);
            }
        } else {
            let mut resize = window.data().resize_state();
            let result = window
                .client_viewport()
                .and_then(|viewport| renderer.on_idle(&mut resize, viewport));
            window.data().set_resize_state(resize);
            result?;
        }
    }
}

fn get_handle_to_file_used_to_create_the_calling_process() -> MyResult<HMODULE> {
    Ok(unsafe { GetModuleHandleW(None) }?)
}
