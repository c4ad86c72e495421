use crate::geometry::IndexedGeometry;
use crate::program::Program;

pub struct GlRenderer {
    current_program: u32,
}

impl GlRenderer {
    pub fn new() -> Self {
        Self { current_program: 0 }
    }

    /// Draws the first `count` indices of `geometry` as triangles.
    pub fn draw_indexed(&mut self, geometry: &IndexedGeometry, program: &Program, count: usize) {
        let p_id = program.get_id();
        if self.current_program != p_id {
            unsafe { gl::UseProgram(p_id) }
            self.current_program = p_id;
        }

        let count = count.min(geometry.index_count());

        unsafe {
            gl::BindVertexArray(geometry.vao());
            gl::DrawElements(
                gl::TRIANGLES,
                count as i32,
                gl::UNSIGNED_INT,
                std::ptr::null(),
            );
        }
    }

    pub fn resize(&self, width: u32, height: u32) {
        unsafe {
            gl::Viewport(0, 0, width as i32, height as i32);
        }
    }

    pub fn clear_color(&self, r: f32, g: f32, b: f32) {
        unsafe {
            gl::ClearColor(r, g, b, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }
}

impl Default for GlRenderer {
    fn default() -> Self {
        Self::new()
    }
}
