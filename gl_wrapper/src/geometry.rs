use std::ffi::c_void;
use thiserror::Error;

use crate::buffer::{BufferError, BufferUsage, ElementBufferObject, VertexBufferObject};

pub enum VertexAttribute {
    Vec3,
}

impl VertexAttribute {
    pub fn size(&self) -> usize {
        match self {
            VertexAttribute::Vec3 => 3,
        }
    }
}

pub struct VertexArrayObject {
    id: u32,
}

impl VertexArrayObject {
    pub fn new() -> Self {
        let mut id = 0;

        unsafe {
            gl::GenVertexArrays(1, (&mut id) as *mut u32);
        }

        Self { id }
    }

    pub fn bind(&self) {
        unsafe {
            gl::BindVertexArray(self.id);
        }
    }

    pub fn unbind() {
        unsafe {
            gl::BindVertexArray(0);
        }
    }

    /// Describes float attribute `location` of the currently bound vertex buffer.
    /// `stride` and `offset` are in floats.
    pub fn set_attribute(&self, location: u32, attr: &VertexAttribute, stride: usize, offset: usize) {
        unsafe {
            gl::VertexAttribPointer(
                location,
                attr.size() as i32,
                gl::FLOAT,
                gl::FALSE,
                (stride * std::mem::size_of::<f32>()) as i32,
                (offset * std::mem::size_of::<f32>()) as *const c_void,
            );
            gl::EnableVertexAttribArray(location);
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}

impl Drop for VertexArrayObject {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, (&self.id) as *const u32);
        }
    }
}

pub struct GeometryBuilder<'a> {
    attributes: Vec<VertexAttribute>,
    data: &'a [f32],
    indices: &'a [u32],
    usage: BufferUsage,
}

impl<'a> GeometryBuilder<'a> {
    pub fn new(data: &'a [f32], indices: &'a [u32]) -> Self {
        Self {
            data,
            indices,
            attributes: Vec::new(),
            usage: BufferUsage::StaticDraw,
        }
    }

    pub fn with_attribute(mut self, attr: VertexAttribute) -> Self {
        self.attributes.push(attr);
        self
    }

    pub fn with_usage(mut self, usage: BufferUsage) -> Self {
        self.usage = usage;
        self
    }

    pub fn build(self) -> Result<IndexedGeometry, GBError> {
        let total_len: usize = self.attributes.iter().map(|a| a.size()).sum();

        if total_len == 0 || self.data.len() % total_len != 0 {
            return Err(GBError::InvalidDataLength);
        }

        let vertices = self.data.len() / total_len;

        if let Some(&i) = self.indices.iter().find(|&&i| i as usize >= vertices) {
            return Err(GBError::IndexOutOfRange(i));
        }

        let vao = VertexArrayObject::new();
        let mut vbo = VertexBufferObject::new();
        let mut ebo = ElementBufferObject::new();

        vao.bind();

        vbo.allocate_data(self.data, self.usage);
        ebo.allocate_data(self.indices, BufferUsage::StaticDraw);

        let mut offset = 0;

        for (i, attr) in self.attributes.iter().enumerate() {
            vao.set_attribute(i as u32, attr, total_len, offset);
            offset += attr.size();
        }

        VertexArrayObject::unbind();

        log::debug!(
            "geometry: vao {}, {} vertices, {} indices, {:?}",
            vao.id(),
            vertices,
            self.indices.len(),
            self.usage
        );

        Ok(IndexedGeometry { vao, vbo, ebo })
    }
}

#[derive(Debug, Error)]
pub enum GBError {
    #[error("Invalid data length for given attributes")]
    InvalidDataLength,
    #[error("Index {0} points past the vertex data")]
    IndexOutOfRange(u32),
    #[error(transparent)]
    Buffer(#[from] BufferError),
}

/// Vertex array with its vertex and element buffers.
pub struct IndexedGeometry {
    vao: VertexArrayObject,
    vbo: VertexBufferObject,
    ebo: ElementBufferObject,
}

impl IndexedGeometry {
    pub fn vao(&self) -> u32 {
        self.vao.id()
    }

    pub fn index_count(&self) -> usize {
        self.ebo.len()
    }

    /// Rewrites the whole vertex buffer. The length must match the allocation.
    pub fn update_vertices(&self, data: &[f32]) -> Result<(), GBError> {
        self.vbo.update_data(data)?;
        Ok(())
    }
}
