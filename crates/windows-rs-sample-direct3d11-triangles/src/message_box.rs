use windows::core::HSTRING;
use windows::Win32::UI::WindowsAndMessaging::*;

/// Blocks until the user dismisses the dialog.
pub fn show_error_dialog(caption: &str, text: &str) {
    unsafe {
        MessageBoxW(
            None,
            &HSTRING::from(text),
            &HSTRING::from(caption),
            MB_OK | MB_ICONERROR,
        );
    }
}
