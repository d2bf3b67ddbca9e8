use windows::Win32::Graphics::Direct3D11::*;

use crate::renderable::build_triangles;
use crate::renderable::Renderable;
use crate::vertex::Vertex;
use crate::windy_error::created;
use crate::windy_error::MyResult;

/// Immutable, GPU-resident copy of `vertices`.
pub fn create_vertex_buffer(device: &ID3D11Device1, vertices: &[Vertex]) -> MyResult<ID3D11Buffer> {
    let desc = D3D11_BUFFER_DESC {
        ByteWidth: std::mem::size_of_val(vertices) as u32,
        Usage: D3D11_USAGE_IMMUTABLE,
        BindFlags: D3D11_BIND_VERTEX_BUFFER.0 as u32,
        ..Default::default()
    };
    let initial_data = D3D11_SUBRESOURCE_DATA {
        pSysMem: vertices.as_ptr().cast(),
        ..Default::default()
    };

    let mut vertex_buffer = None;
    unsafe { device.CreateBuffer(&desc, Some(&initial_data), Some(&mut vertex_buffer)) }?;
    created(vertex_buffer, "CreateBuffer")
}

pub fn create_triangles(
    device: &ID3D11Device1,
    meshes: &[[Vertex; 3]],
) -> MyResult<Vec<Renderable<ID3D11Buffer>>> {
    build_triangles(meshes, |vertices| create_vertex_buffer(device, vertices))
}
