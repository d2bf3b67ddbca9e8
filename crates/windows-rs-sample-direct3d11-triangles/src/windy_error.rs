use crate::init_error::InitError;

pub type MyResult<T, E = MyReport> = core::result::Result<T, E>;

pub struct MyReport {
    inner: eyre::Report,
    exit_code: Option<i32>,
}
impl MyReport {
    /// The startup stage that failed, if this report came out of initialization.
    pub fn init_error(&self) -> Option<&InitError> {
        self.inner.downcast_ref::<InitError>()
    }

    /// Process exit code captured where the failure happened, before any cleanup ran.
    pub fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }

    pub fn with_exit_code(mut self, exit_code: i32) -> Self {
        self.exit_code = Some(exit_code);
        self
    }
}
impl From<eyre::Report> for MyReport {
    fn from(report: eyre::Report) -> Self {
        Self {
            inner: report,
            exit_code: None,
        }
    }
}
impl From<InitError> for MyReport {
    fn from(error: InitError) -> Self {
        eyre::Report::new(error).into()
    }
}
impl std::fmt::Display for MyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.inner.fmt(f)
    }
}

impl std::fmt::Debug for MyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.inner.fmt(f)
    }
}

/// Unwraps the out-parameter of a create call that reported success.
pub fn created<T>(out: Option<T>, call: &'static str) -> MyResult<T> {
    out.ok_or_else(|| eyre::eyre!("{call} succeeded but returned no object").into())
}

/// Exit code for a failed run: the thread's last OS error, or 1 when none is set.
pub fn exit_code_for_os_error(last_error: u32) -> i32 {
    match last_error {
        0 => 1,
        code => code as i32,
    }
}

#[cfg(windows)]
pub fn last_os_error_code() -> i32 {
    exit_code_for_os_error(unsafe { windows::Win32::Foundation::GetLastError() }.0)
}

/// Tags a failed Win32/Direct3D call with the startup stage it belongs to.
///
/// The last OS error is read here; destructors that run while the error propagates
/// make their own Win32 calls and can overwrite it.
#[cfg(windows)]
pub fn init_failure(stage: InitError, error: windows::core::Error) -> MyReport {
    let exit_code = last_os_error_code();
    MyReport::from(
        eyre::Report::new(WrappedWindowsError::from(error)).wrap_err(stage),
    )
    .with_exit_code(exit_code)
}

/// A startup stage that failed without a `windows` error to carry.
#[cfg(windows)]
pub fn init_stage_failed(stage: InitError) -> MyReport {
    let exit_code = last_os_error_code();
    MyReport::from(stage).with_exit_code(exit_code)
}

#[cfg(windows)]
impl From<windows::core::Error> for MyReport {
    fn from(error: windows::core::Error) -> Self {
        eyre::Report::new(WrappedWindowsError::from(error)).into()
    }
}

/// Keeps the HRESULT message when a `windows` error ends up inside an eyre report.
#[cfg(windows)]
pub struct WrappedWindowsError {
    inner: windows::core::Error,
}
#[cfg(windows)]
impl From<windows::core::Error> for WrappedWindowsError {
    fn from(error: windows::core::Error) -> Self {
        Self { inner: error }
    }
}

#[cfg(windows)]
impl std::error::Error for WrappedWindowsError {}
#[cfg(windows)]
impl std::fmt::Display for WrappedWindowsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.inner.message(), self.inner.code())
    }
}

#[cfg(windows)]
impl std::fmt::Debug for WrappedWindowsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}
