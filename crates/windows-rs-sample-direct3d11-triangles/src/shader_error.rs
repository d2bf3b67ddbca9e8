use std::path::PathBuf;

pub const SHADER_FILE_NOT_FOUND: &str = "Could not compile shader; file not found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderCompileError {
    FileNotFound {
        path: PathBuf,
    },
    Compiler {
        entry_point: String,
        target: String,
        diagnostics: String,
    },
}

impl ShaderCompileError {
    /// Builds a compiler failure from the raw error blob, if the compiler produced one.
    ///
    /// The blob is a nul-terminated ANSI string; anything after the first nul is dropped.
    /// Without a blob the HRESULT message stands in for the diagnostics.
    pub fn from_compiler_output(
        entry_point: &str,
        target: &str,
        error_blob: Option<&[u8]>,
        fallback: impl Into<String>,
    ) -> Self {
        let diagnostics = error_blob
            .map(|bytes| {
                let end = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
                String::from_utf8_lossy(&bytes[..end]).trim_end().to_string()
            })
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| fallback.into());
        Self::Compiler {
            entry_point: entry_point.to_string(),
            target: target.to_string(),
            diagnostics,
        }
    }

    /// Text shown in the blocking dialog.
    pub fn dialog_text(&self) -> &str {
        match self {
            Self::FileNotFound { .. } => SHADER_FILE_NOT_FOUND,
            Self::Compiler { diagnostics, .. } => diagnostics,
        }
    }
}

impl std::fmt::Display for ShaderCompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileNotFound { path } => {
                write!(f, "{} ({})", SHADER_FILE_NOT_FOUND, path.display())
            }
            Self::Compiler {
                entry_point,
                target,
                diagnostics,
            } => write!(f, "{entry_point} ({target}): {diagnostics}"),
        }
    }
}

impl std::error::Error for ShaderCompileError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_uses_fixed_message() {
        let error = ShaderCompileError::FileNotFound {
            path: PathBuf::from("shaders.hlsl"),
        };
        assert_eq!(error.dialog_text(), "Could not compile shader; file not found");
        assert!(error.to_string().contains("shaders.hlsl"));
    }

    #[test]
    fn syntax_error_surfaces_compiler_text() {
        let blob = b"shaders.hlsl(12,5-14): error X3000: syntax error: unexpected token '}'\n\0garbage";
        let error = ShaderCompileError::from_compiler_output("VS_main", "vs_5_0", Some(&blob[..]), "E_FAIL");
        assert_eq!(
            error.dialog_text(),
            "shaders.hlsl(12,5-14): error X3000: syntax error: unexpected token '}'"
        );
        assert!(error.to_string().starts_with("VS_main (vs_5_0): "));
    }

    #[test]
    fn empty_blob_falls_back_to_hresult_message() {
        let error =
            ShaderCompileError::from_compiler_output("PS_main", "ps_5_0", Some(&b"\0"[..]), "Unspecified error");
        assert_eq!(error.dialog_text(), "Unspecified error");

        let error = ShaderCompileError::from_compiler_output("PS_main", "ps_5_0", None, "Unspecified error");
        assert_eq!(error.dialog_text(), "Unspecified error");
    }
}
