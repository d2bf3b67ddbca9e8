use std::ffi::CStr;
use std::path::Path;
use std::path::PathBuf;
use tracing::warn;

use crate::frame::FrameSettings;

/// One shader entry point compiled from the shared source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderStage {
    pub entry_point: &'static CStr,
    pub target: &'static CStr,
}

impl ShaderStage {
    pub fn entry_point_str(&self) -> &'static str {
        self.entry_point.to_str().unwrap_or("<entry point>")
    }

    pub fn target_str(&self) -> &'static str {
        self.target.to_str().unwrap_or("<target>")
    }
}

/// Every fixed constant the sample runs with. There is no config file and no
/// command line; `Default` is the configuration.
#[derive(Debug, Clone)]
pub struct SampleConfig {
    pub window_class: &'static str,
    pub title: &'static str,
    pub client_size: (u32, u32),
    pub shader_path: PathBuf,
    pub vertex_shader: ShaderStage,
    pub pixel_shader: ShaderStage,
    pub swap_chain_buffer_count: u32,
    pub frame: FrameSettings,
    pub debug_layer: bool,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            window_class: "MyWindowClass",
            title: "Drawing a Triangle",
            client_size: (1024, 768),
            shader_path: PathBuf::from("shaders.hlsl"),
            vertex_shader: ShaderStage {
                entry_point: c"VS_main",
                target: c"vs_5_0",
            },
            pixel_shader: ShaderStage {
                entry_point: c"PS_main",
                target: c"ps_5_0",
            },
            swap_chain_buffer_count: 2,
            frame: FrameSettings::default(),
            debug_layer: cfg!(debug_assertions),
        }
    }
}

impl SampleConfig {
    /// Where the shader source is read from.
    ///
    /// The relative path is tried against the working directory first. When it is
    /// missing there, the copy in this crate's `src/` is used so `cargo run` works from
    /// the workspace root. If neither exists the relative path is returned unchanged
    /// and the compiler reports the missing file.
    pub fn resolve_shader_path(&self) -> PathBuf {
        if self.shader_path.is_absolute() || self.shader_path.exists() {
            return self.shader_path.clone();
        }
        let fallback = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("src")
            .join(&self.shader_path);
        if fallback.exists() {
            warn!(
                "{} not found in the working directory, using {}",
                self.shader_path.display(),
                fallback.display()
            );
            return fallback;
        }
        self.shader_path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_sample() {
        let config = SampleConfig::default();
        assert_eq!(config.client_size, (1024, 768));
        assert_eq!(config.title, "Drawing a Triangle");
        assert_eq!(config.vertex_shader.entry_point_str(), "VS_main");
        assert_eq!(config.vertex_shader.target_str(), "vs_5_0");
        assert_eq!(config.pixel_shader.entry_point_str(), "PS_main");
        assert_eq!(config.pixel_shader.target_str(), "ps_5_0");
        assert_eq!(config.swap_chain_buffer_count, 2);
        assert_eq!(config.frame.sync_interval, 1);
    }

    #[test]
    fn shader_path_falls_back_to_crate_sources() {
        let config = SampleConfig::default();
        let resolved = config.resolve_shader_path();
        assert!(resolved.ends_with("shaders.hlsl"));
        assert!(resolved.exists());
    }

    #[test]
    fn missing_shader_keeps_the_relative_path() {
        let config = SampleConfig {
            shader_path: PathBuf::from("does-not-exist.hlsl"),
            ..Default::default()
        };
        assert_eq!(config.resolve_shader_path(), PathBuf::from("does-not-exist.hlsl"));
    }
}
