use tracing::warn;
use windows::core::*;
use windows::Win32::Foundation::*;
use windows::Win32::UI::Input::KeyboardAndMouse::VK_ESCAPE;
use windows::Win32::UI::WindowsAndMessaging::*;

use crate::init_error::InitError;
use crate::window_data::MessageOutcome;
use crate::window_data::WindowData;
use crate::window_data::WindowMessage;
use crate::windy_error::init_failure;
use crate::windy_error::MyResult;

/// Equivalent to the MAKEINTATOM macro in C/C++.
///
/// https://learn.microsoft.com/en-us/windows/win32/api/winbase/nf-winbase-makeintatom
#[allow(non_snake_case)]
pub fn MAKEINTOATOM(atom: u16) -> PCWSTR {
    PCWSTR(atom as usize as *const u16)
}

/// A registered window class. Unregistered on drop.
pub struct WindowClass {
    atom: u16,
    instance: HINSTANCE,
}

impl WindowClass {
    pub fn register(instance: HMODULE, name: &str) -> MyResult<Self> {
        let instance: HINSTANCE = instance.into();
        let name = HSTRING::from(name);
        let icon = unsafe { LoadIconW(None, IDI_APPLICATION) }
            .map_err(|e| init_failure(InitError::RegisterClass, e))?;
        let cursor = unsafe { LoadCursorW(None, IDC_ARROW) }
            .map_err(|e| init_failure(InitError::RegisterClass, e))?;

        // WNDCLASSEXW - https://learn.microsoft.com/en-us/windows/win32/api/winuser/ns-winuser-wndclassexw
        let wc = WNDCLASSEXW {
            cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(wndproc),
            hInstance: instance,
            hIcon: icon,
            hCursor: cursor,
            lpszClassName: PCWSTR(name.as_ptr()),
            hIconSm: icon,
            ..Default::default()
        };

        let atom = unsafe { RegisterClassExW(&wc) };
        if atom == 0 {
            let error = Error::from_hresult(unsafe { GetLastError() }.to_hresult());
            return Err(init_failure(InitError::RegisterClass, error));
        }
        Ok(Self { atom, instance })
    }
}

impl Param<PCWSTR> for &WindowClass {
    unsafe fn param(self) -> ParamValue<PCWSTR> {
        ParamValue::Owned(MAKEINTOATOM(self.atom))
    }
}

impl Drop for WindowClass {
    fn drop(&mut self) {
        if let Err(e) = unsafe { UnregisterClassW(MAKEINTOATOM(self.atom), Some(self.instance)) } {
            warn!("UnregisterClassW failed: {e}");
        }
    }
}

fn decode_message(message: u32, wparam: WPARAM) -> Option<WindowMessage> {
    match message {
        WM_KEYDOWN if wparam.0 == VK_ESCAPE.0 as usize => Some(WindowMessage::EscapePressed),
        WM_KEYDOWN => Some(WindowMessage::KeyPressed),
        WM_SIZE => Some(WindowMessage::SizeChanged),
        WM_DESTROY => Some(WindowMessage::Destroyed),
        _ => None,
    }
}

extern "system" fn wndproc(window: HWND, message: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    if message == WM_CREATE {
        unsafe {
            let create_struct: &CREATESTRUCTW = &*(lparam.0 as *const CREATESTRUCTW);
            SetWindowLongPtrW(window, GWLP_USERDATA, create_struct.lpCreateParams as _);
        }
        return LRESULT(0);
    }

    let user_data = unsafe { GetWindowLongPtrW(window, GWLP_USERDATA) };
    if user_data == 0 {
        // We can get messages before WM_CREATE or after WM_DESTROY.
        return unsafe { DefWindowProcW(window, message, wparam, lparam) };
    }
    if message == WM_NCDESTROY {
        unsafe { SetWindowLongPtrW(window, GWLP_USERDATA, 0) };
        return unsafe { DefWindowProcW(window, message, wparam, lparam) };
    }

    let Some(decoded) = decode_message(message, wparam) else {
        return unsafe { DefWindowProcW(window, message, wparam, lparam) };
    };

    // Safety: set from the `Window` that owns this handle; it outlives the handle.
    let data = unsafe { &*(user_data as *const WindowData) };
    match data.handle(decoded) {
        MessageOutcome::CloseWindow => {
            if let Err(e) = unsafe { DestroyWindow(window) } {
                warn!("DestroyWindow failed: {e}");
            }
        }
        MessageOutcome::Quit(exit_code) => unsafe { PostQuitMessage(exit_code) },
        MessageOutcome::Handled => {}
    }
    LRESULT(0)
}
