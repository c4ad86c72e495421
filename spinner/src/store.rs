use cgmath::{Rad, Vector3};
use thiserror::Error;

/// Components per vertex, positions only.
pub const COMPONENTS: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("vertex data has {0} floats, which is not a multiple of 3")]
    RaggedVertices(usize),
    #[error("index list has {0} entries, which is not a multiple of 3")]
    RaggedIndices(usize),
    #[error("index {index} at position {position} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        position: usize,
        index: u32,
        vertex_count: usize,
    },
}

///
/// Flat `x, y, z` position buffer plus the triangle list drawn from it.
///
/// The length of both buffers is fixed at construction.
///
#[derive(Debug, Clone, PartialEq)]
pub struct VertexStore {
    positions: Vec<f32>,
    indices: Vec<u32>,
}

impl VertexStore {
    pub fn new(positions: Vec<f32>, indices: Vec<u32>) -> Result<Self, SetupError> {
        if positions.len() % COMPONENTS != 0 {
            return Err(SetupError::RaggedVertices(positions.len()));
        }

        if indices.len() % 3 != 0 {
            return Err(SetupError::RaggedIndices(indices.len()));
        }

        let vertex_count = positions.len() / COMPONENTS;

        if let Some((position, &index)) = indices
            .iter()
            .enumerate()
            .find(|(_, i)| **i as usize >= vertex_count)
        {
            return Err(SetupError::IndexOutOfRange {
                position,
                index,
                vertex_count,
            });
        }

        log::debug!(
            "vertex store: {} vertices, {} triangles",
            vertex_count,
            indices.len() / 3
        );

        Ok(Self { positions, indices })
    }

    pub fn from_vertices(vertices: &[Vector3<f32>], indices: Vec<u32>) -> Result<Self, SetupError> {
        let positions = vertices.iter().flat_map(|v| [v.x, v.y, v.z]).collect();

        Self::new(positions, indices)
    }

    /// Replaces every vertex with `transform(vertex, step)`.
    pub fn apply_to_all<F>(&mut self, transform: F, step: Rad<f32>)
    where
        F: Fn(Vector3<f32>, Rad<f32>) -> Vector3<f32>,
    {
        self.update_each(|_, v| transform(v, step));
    }

    /// Replaces every vertex with `f(index, vertex)`, in index order.
    pub fn update_each<F>(&mut self, mut f: F)
    where
        F: FnMut(usize, Vector3<f32>) -> Vector3<f32>,
    {
        for (i, chunk) in self.positions.chunks_exact_mut(COMPONENTS).enumerate() {
            let new = f(i, Vector3::new(chunk[0], chunk[1], chunk[2]));

            chunk.copy_from_slice(&[new.x, new.y, new.z]);
        }
    }

    pub fn vertex(&self, index: usize) -> Option<Vector3<f32>> {
        self.positions
            .chunks_exact(COMPONENTS)
            .nth(index)
            .map(|c| Vector3::new(c[0], c[1], c[2]))
    }

    pub fn vertices(&self) -> impl Iterator<Item = Vector3<f32>> + '_ {
        self.positions
            .chunks_exact(COMPONENTS)
            .map(|c| Vector3::new(c[0], c[1], c[2]))
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.positions
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / COMPONENTS
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
