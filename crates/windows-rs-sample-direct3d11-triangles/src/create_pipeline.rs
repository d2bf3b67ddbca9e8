use tracing::info;
use windows::core::*;
use windows::Win32::Graphics::Direct3D::Fxc::*;
use windows::Win32::Graphics::Direct3D11::*;
use windows::Win32::Graphics::Dxgi::Common::*;

use crate::compile_shader::blob_bytes;
use crate::compile_shader::compile_shader;
use crate::init_error::InitError;
use crate::sample_config::SampleConfig;
use crate::vertex::AttributeFormat;
use crate::vertex::VERTEX_ATTRIBUTES;
use crate::windy_error::created;
use crate::windy_error::init_stage_failed;
use crate::windy_error::MyResult;

/// Shader pair and the input layout matching the vertex format. Immutable once built.
pub struct Pipeline {
    pub input_layout: ID3D11InputLayout,
    pub vertex_shader: ID3D11VertexShader,
    pub pixel_shader: ID3D11PixelShader,
}

pub fn create_pipeline(device: &ID3D11Device1, config: &SampleConfig) -> MyResult<Pipeline> {
    let compile_flags = if cfg!(debug_assertions) {
        D3DCOMPILE_DEBUG | D3DCOMPILE_SKIP_OPTIMIZATION
    } else {
        0
    };
    let shaders_hlsl = config.resolve_shader_path();

    let vs_blob = compile_shader(&shaders_hlsl, &config.vertex_shader, compile_flags)
        .map_err(|e| init_stage_failed(InitError::ShaderCompile(e)))?;
    let ps_blob = compile_shader(&shaders_hlsl, &config.pixel_shader, compile_flags)
        .map_err(|e| init_stage_failed(InitError::ShaderCompile(e)))?;

    // Safety: both blobs live until the end of this function.
    let vs_bytecode = unsafe { blob_bytes(&vs_blob) };
    let ps_bytecode = unsafe { blob_bytes(&ps_blob) };

    let mut vertex_shader = None;
    unsafe { device.CreateVertexShader(vs_bytecode, None, Some(&mut vertex_shader)) }?;
    let mut pixel_shader = None;
    unsafe { device.CreatePixelShader(ps_bytecode, None, Some(&mut pixel_shader)) }?;

    let input_layout = create_input_layout(device, vs_bytecode)?;

    info!("Shaders compiled from {}", shaders_hlsl.display());
    Ok(Pipeline {
        input_layout,
        vertex_shader: created(vertex_shader, "CreateVertexShader")?,
        pixel_shader: created(pixel_shader, "CreatePixelShader")?,
    })
}

/// Validated by the runtime against the vertex shader's input signature.
fn create_input_layout(device: &ID3D11Device1, vs_bytecode: &[u8]) -> MyResult<ID3D11InputLayout> {
    let input_element_descs = VERTEX_ATTRIBUTES.map(|attribute| D3D11_INPUT_ELEMENT_DESC {
        SemanticName: PCSTR(attribute.semantic.as_ptr().cast()),
        SemanticIndex: 0,
        Format: match attribute.format {
            AttributeFormat::Float2 => DXGI_FORMAT_R32G32_FLOAT,
            AttributeFormat::Float4 => DXGI_FORMAT_R32G32B32A32_FLOAT,
        },
        InputSlot: 0,
        AlignedByteOffset: attribute.offset,
        InputSlotClass: D3D11_INPUT_PER_VERTEX_DATA,
        InstanceDataStepRate: 0,
    });

    let mut input_layout = None;
    unsafe {
        device.CreateInputLayout(&input_element_descs, vs_bytecode, Some(&mut input_layout))
    }?;
    created(input_layout, "CreateInputLayout")
}
