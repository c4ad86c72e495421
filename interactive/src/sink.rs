use thiserror::Error;

use gl_wrapper::geometry::{GBError, IndexedGeometry};
use gl_wrapper::program::Program;
use gl_wrapper::renderer::GlRenderer;

use spinner::GpuBufferSink;

use crate::context::GraphicsContext;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("vertex upload failed: {0}")]
    Upload(#[from] GBError),
    #[error("buffer swap failed: {0}")]
    Present(#[from] glutin::error::Error),
}

///
/// Frame loop target backed by the window's GL context.
///
pub struct GlSink {
    // GL objects go before the context so they are deleted while it is still current.
    geometry: IndexedGeometry,
    program: Program,
    renderer: GlRenderer,
    clear_color: [f32; 3],
    close_requested: bool,
    context: GraphicsContext,
}

impl GlSink {
    pub fn new(
        context: GraphicsContext,
        geometry: IndexedGeometry,
        program: Program,
        clear_color: [f32; 3],
    ) -> Self {
        Self {
            geometry,
            program,
            renderer: GlRenderer::new(),
            clear_color,
            close_requested: false,
            context,
        }
    }

    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    pub fn resize(&self, width: u32, height: u32) {
        if width != 0 && height != 0 {
            self.context.resize(width, height);
            self.renderer.resize(width, height);
        }
    }

    pub fn context(&self) -> &GraphicsContext {
        &self.context
    }
}

impl GpuBufferSink for GlSink {
    type Error = SinkError;

    fn exit_requested(&mut self) -> bool {
        self.close_requested
    }

    fn upload_vertices(&mut self, buffer: &[f32]) -> Result<(), Self::Error> {
        self.geometry.update_vertices(buffer)?;
        Ok(())
    }

    fn draw_indexed(&mut self, index_count: usize) -> Result<(), Self::Error> {
        let [r, g, b] = self.clear_color;
        self.renderer.clear_color(r, g, b);
        self.renderer
            .draw_indexed(&self.geometry, &self.program, index_count);
        Ok(())
    }

    fn present_frame(&mut self) -> Result<(), Self::Error> {
        self.context.present()?;
        Ok(())
    }
}
