use tracing::info;
use tracing::warn;
use windows::core::*;
use windows::Win32::Foundation::*;
use windows::Win32::UI::WindowsAndMessaging::*;

use crate::frame::Viewport;
use crate::init_error::InitError;
use crate::sample_config::SampleConfig;
use crate::window_class::WindowClass;
use crate::window_data::WindowData;
use crate::windy_error::init_failure;
use crate::windy_error::MyResult;

/// A visible top-level window and the state its window procedure writes to.
pub struct Window {
    hwnd: HWND,
    data: Box<WindowData>,
}

impl Window {
    pub fn create(our_module: HMODULE, class: &WindowClass, config: &SampleConfig) -> MyResult<Self> {
        let (width, height) = config.client_size;
        let mut window_rect = RECT {
            left: 0,
            top: 0,
            right: width as i32,
            bottom: height as i32,
        };
        // Calculates the required size of the window rectangle, based on the desired size of the client rectangle.
        unsafe {
            AdjustWindowRectEx(
                &mut window_rect,
                WS_OVERLAPPEDWINDOW,
                false,
                WS_EX_OVERLAPPEDWINDOW,
            )
        }
        .map_err(|e| init_failure(InitError::CreateWindow, e))?;

        let data = Box::new(WindowData::default());
        let title = HSTRING::from(config.title);
        let hwnd = unsafe {
            CreateWindowExW(
                WS_EX_OVERLAPPEDWINDOW,
                class,
                &title,
                WS_OVERLAPPEDWINDOW | WS_VISIBLE,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                window_rect.right - window_rect.left,
                window_rect.bottom - window_rect.top,
                None, // no parent window
                None, // no menus
                Some(our_module.into()),
                Some(&*data as *const WindowData as _),
            )
        }
        .map_err(|e| init_failure(InitError::CreateWindow, e))?;

        info!("Created {}x{} window \"{}\"", width, height, config.title);
        Ok(Self { hwnd, data })
    }

    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    pub fn data(&self) -> &WindowData {
        &self.data
    }

    pub fn client_viewport(&self) -> MyResult<Viewport> {
        let mut rect = RECT::default();
        unsafe { GetClientRect(self.hwnd, &mut rect) }?;
        Ok(Viewport::from_client_rect(
            rect.left,
            rect.top,
            rect.right,
            rect.bottom,
        ))
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        if self.data.is_destroyed() {
            return;
        }
        self.data.begin_teardown();
        if let Err(e) = unsafe { DestroyWindow(self.hwnd) } {
            warn!("DestroyWindow failed: {e}");
        }
    }
}
