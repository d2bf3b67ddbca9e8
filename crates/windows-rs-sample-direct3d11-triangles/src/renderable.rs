use tracing::debug;

use crate::vertex::Vertex;
use crate::vertex::VERTEX_STRIDE;
use crate::windy_error::MyResult;

/// A vertex buffer plus what the input assembler needs to draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderable<B> {
    pub buffer: B,
    pub vertex_count: u32,
    pub stride: u32,
    pub offset: u32,
}

impl<B> Renderable<B> {
    pub fn new(buffer: B, vertices: &[Vertex]) -> Self {
        Self {
            buffer,
            vertex_count: vertices.len() as u32,
            stride: VERTEX_STRIDE,
            offset: 0,
        }
    }

    pub fn byte_width(&self) -> u32 {
        self.vertex_count * self.stride
    }
}

/// Pipeline state plus the triangles drawn with it.
///
/// Triangles are declared first so they drop before the pipeline they were drawn with.
#[derive(Debug)]
pub struct Scene<P, B> {
    pub triangles: Vec<Renderable<B>>,
    pub pipeline: P,
}

/// Uploads one buffer per mesh, in order.
///
/// Stops at the first failure; buffers created before it are dropped on return.
pub fn build_triangles<B, F>(meshes: &[[Vertex; 3]], mut create_buffer: F) -> MyResult<Vec<Renderable<B>>>
where
    F: FnMut(&[Vertex]) -> MyResult<B>,
{
    let mut triangles = Vec::with_capacity(meshes.len());
    for (index, mesh) in meshes.iter().enumerate() {
        let buffer = create_buffer(mesh)?;
        let triangle = Renderable::new(buffer, mesh);
        debug!(
            "Triangle {index}: {} vertices, {} bytes",
            triangle.vertex_count,
            triangle.byte_width()
        );
        triangles.push(triangle);
    }
    Ok(triangles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::TRIANGLES;
    use crate::vertex::TRIANGLE_COUNT;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Counts how many times each buffer id is released.
    struct TrackedBuffer {
        id: usize,
        released: Rc<RefCell<Vec<usize>>>,
    }

    impl Drop for TrackedBuffer {
        fn drop(&mut self) {
            self.released.borrow_mut().push(self.id);
        }
    }

    #[test]
    fn one_renderable_per_triangle() {
        let mut next = 0;
        let triangles = build_triangles(&TRIANGLES, |_| {
            next += 1;
            Ok(next)
        })
        .unwrap();
        assert_eq!(triangles.len(), TRIANGLE_COUNT);
        assert_eq!(
            triangles.iter().map(|t| t.buffer).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        for triangle in &triangles {
            assert_eq!(triangle.vertex_count, 3);
            assert_eq!(triangle.stride, 24);
            assert_eq!(triangle.offset, 0);
            assert_eq!(triangle.byte_width(), 72);
        }
    }

    #[test]
    fn failure_releases_earlier_buffers_once() {
        let released = Rc::new(RefCell::new(Vec::new()));
        let mut created = 0;
        let result = build_triangles(&TRIANGLES, |_| {
            created += 1;
            if created == 3 {
                return Err(eyre::eyre!("E_OUTOFMEMORY").into());
            }
            Ok(TrackedBuffer {
                id: created,
                released: released.clone(),
            })
        });
        assert!(result.is_err());
        assert_eq!(*released.borrow(), vec![1, 2]);
    }

    #[test]
    fn scene_releases_triangles_before_pipeline() {
        let released = Rc::new(RefCell::new(Vec::new()));
        let track = |id| TrackedBuffer {
            id,
            released: released.clone(),
        };
        let scene = Scene {
            triangles: vec![
                Renderable::new(track(1), &TRIANGLES[0]),
                Renderable::new(track(2), &TRIANGLES[1]),
            ],
            pipeline: track(99),
        };
        drop(scene);
        assert_eq!(*released.borrow(), vec![1, 2, 99]);
    }
}
