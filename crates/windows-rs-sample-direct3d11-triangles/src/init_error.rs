use crate::shader_error::ShaderCompileError;

pub const FATAL_ERROR_CAPTION: &str = "Fatal Error";
pub const SHADER_ERROR_CAPTION: &str = "Shader Compiler Error";

/// A startup stage that failed. Each one ends the process after a blocking dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    RegisterClass,
    CreateWindow,
    CreateDevice,
    CreateSwapChain,
    ShaderCompile(ShaderCompileError),
}

impl InitError {
    pub fn caption(&self) -> &'static str {
        match self {
            Self::ShaderCompile(_) => SHADER_ERROR_CAPTION,
            _ => FATAL_ERROR_CAPTION,
        }
    }

    pub fn dialog_text(&self) -> &str {
        match self {
            Self::RegisterClass => "RegisterClassEx failed",
            Self::CreateWindow => "CreateWindowEx failed",
            Self::CreateDevice => "D3D11CreateDevice() failed",
            Self::CreateSwapChain => "CreateSwapChainForHwnd() failed",
            Self::ShaderCompile(error) => error.dialog_text(),
        }
    }
}

impl std::fmt::Display for InitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShaderCompile(error) => error.fmt(f),
            _ => f.write_str(self.dialog_text()),
        }
    }
}

impl std::error::Error for InitError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn window_and_device_failures_use_fatal_caption() {
        for error in [
            InitError::RegisterClass,
            InitError::CreateWindow,
            InitError::CreateDevice,
            InitError::CreateSwapChain,
        ] {
            assert_eq!(error.caption(), "Fatal Error");
        }
        assert_eq!(InitError::CreateDevice.dialog_text(), "D3D11CreateDevice() failed");
    }

    #[test]
    fn shader_failures_use_compiler_caption() {
        let error = InitError::ShaderCompile(ShaderCompileError::FileNotFound {
            path: PathBuf::from("shaders.hlsl"),
        });
        assert_eq!(error.caption(), "Shader Compiler Error");
        assert_eq!(error.dialog_text(), "Could not compile shader; file not found");
    }
}
