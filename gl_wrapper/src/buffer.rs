use gl::types::{GLenum, GLuint};
use std::ffi::c_void;
use std::marker::PhantomData;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BufferUsage {
    StaticDraw,
    DynamicDraw,
}

impl BufferUsage {
    fn as_gl(&self) -> GLenum {
        match self {
            BufferUsage::StaticDraw => gl::STATIC_DRAW,
            BufferUsage::DynamicDraw => gl::DYNAMIC_DRAW,
        }
    }
}

#[derive(Debug, Error)]
pub enum BufferError {
    #[error("buffer holds {expected} elements, got {got}")]
    SizeMismatch { expected: usize, got: usize },
}

///
/// GL buffer object holding elements of `T`.
///
/// `len` is the element count of the last `allocate_data` call; `update_data`
/// only rewrites that storage, it never grows it.
///
pub struct Buffer<T> {
    id: GLuint,
    target: GLenum,
    len: usize,
    _marker: PhantomData<T>,
}

pub type VertexBufferObject = Buffer<f32>;
pub type ElementBufferObject = Buffer<u32>;

impl Buffer<f32> {
    pub fn new() -> Self {
        Self::with_target(gl::ARRAY_BUFFER)
    }
}

impl Buffer<u32> {
    /// Element buffer binding is recorded in the bound vertex array.
    pub fn new() -> Self {
        Self::with_target(gl::ELEMENT_ARRAY_BUFFER)
    }
}

impl<T: Copy> Buffer<T> {
    fn with_target(target: GLenum) -> Self {
        let mut id = 0;

        unsafe {
            gl::GenBuffers(1, (&mut id) as *mut u32);
        }

        Self {
            id,
            target,
            len: 0,
            _marker: PhantomData,
        }
    }

    pub fn bind(&self) {
        unsafe {
            gl::BindBuffer(self.target, self.id);
        }
    }

    pub fn allocate_data(&mut self, data: &[T], usage: BufferUsage) {
        self.bind();

        unsafe {
            gl::BufferData(
                self.target,
                std::mem::size_of_val(data) as isize,
                data.as_ptr() as *const c_void,
                usage.as_gl(),
            );
        }

        self.len = data.len();
    }

    pub fn update_data(&self, data: &[T]) -> Result<(), BufferError> {
        if data.len() != self.len {
            return Err(BufferError::SizeMismatch {
                expected: self.len,
                got: data.len(),
            });
        }

        self.bind();

        unsafe {
            gl::BufferSubData(
                self.target,
                0,
                std::mem::size_of_val(data) as isize,
                data.as_ptr() as *const c_void,
            );
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, (&self.id) as *const u32);
        }
    }
}
