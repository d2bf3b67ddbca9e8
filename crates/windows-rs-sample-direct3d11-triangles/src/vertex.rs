use std::ffi::CStr;

/// Interleaved 2D position and RGBA color, as read by the `POS`/`COL` shader inputs.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

pub const VERTEX_STRIDE: u32 = std::mem::size_of::<Vertex>() as u32;

const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

pub const TRIANGLE_COUNT: usize = 3;

/// Already in normalized device coordinates; nothing transforms them.
pub const TRIANGLES: [[Vertex; 3]; TRIANGLE_COUNT] = [
    [
        Vertex::new(-1.0, -1.0, GREEN),
        Vertex::new(-0.5, 0.0, RED),
        Vertex::new(0.0, -1.0, BLUE),
    ],
    [
        Vertex::new(0.0, -1.0, RED),
        Vertex::new(0.5, 0.0, GREEN),
        Vertex::new(1.0, -1.0, BLUE),
    ],
    [
        Vertex::new(-0.5, 0.0, BLUE),
        Vertex::new(0.0, 1.0, GREEN),
        Vertex::new(0.5, 0.0, RED),
    ],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeFormat {
    Float2,
    Float4,
}

impl AttributeFormat {
    pub const fn size(self) -> u32 {
        match self {
            Self::Float2 => 8,
            Self::Float4 => 16,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    pub semantic: &'static CStr,
    pub format: AttributeFormat,
    pub offset: u32,
}

pub const VERTEX_ATTRIBUTES: [VertexAttribute; 2] = [
    VertexAttribute {
        semantic: c"POS",
        format: AttributeFormat::Float2,
        offset: std::mem::offset_of!(Vertex, position) as u32,
    },
    VertexAttribute {
        semantic: c"COL",
        format: AttributeFormat::Float4,
        offset: std::mem::offset_of!(Vertex, color) as u32,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_is_six_floats() {
        assert_eq!(VERTEX_STRIDE, 6 * 4);
    }

    #[test]
    fn each_triangle_buffer_is_72_bytes() {
        for triangle in &TRIANGLES {
            assert_eq!(std::mem::size_of_val(triangle), 72);
        }
    }

    #[test]
    fn attributes_are_packed_back_to_back() {
        let mut expected_offset = 0;
        for attribute in &VERTEX_ATTRIBUTES {
            assert_eq!(attribute.offset, expected_offset);
            expected_offset += attribute.format.size();
        }
        assert_eq!(expected_offset, VERTEX_STRIDE);
    }

    #[test]
    fn triangles_form_a_strip_inside_clip_space() {
        for vertex in TRIANGLES.iter().flatten() {
            assert!(vertex.position.iter().all(|c| (-1.0..=1.0).contains(c)));
            assert_eq!(vertex.color[3], 1.0);
        }
        // Bottom pair meets at the origin's x, the top triangle sits on the shared edge.
        assert_eq!(TRIANGLES[0][2].position, TRIANGLES[1][0].position);
        assert_eq!(TRIANGLES[2][0].position, TRIANGLES[0][1].position);
        assert_eq!(TRIANGLES[2][2].position, TRIANGLES[1][1].position);
    }
}
