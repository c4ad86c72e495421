use std::convert::Infallible;

use crate::frame_loop::GpuBufferSink;

///
/// Sink without a device: keeps the last uploaded buffer and asks to exit
/// once `frame_budget` frames were presented.
///
#[derive(Debug, Default)]
pub struct HeadlessSink {
    frame_budget: u64,
    buffer: Option<Vec<f32>>,
    index_count: Option<usize>,
    uploads: u64,
    draws: u64,
    presents: u64,
}

impl HeadlessSink {
    pub fn new(frame_budget: u64) -> Self {
        Self {
            frame_budget,
            ..Default::default()
        }
    }

    pub fn last_upload(&self) -> Option<&[f32]> {
        self.buffer.as_deref()
    }

    pub fn last_index_count(&self) -> Option<usize> {
        self.index_count
    }

    pub fn uploads(&self) -> u64 {
        self.uploads
    }

    pub fn draws(&self) -> u64 {
        self.draws
    }

    pub fn presents(&self) -> u64 {
        self.presents
    }
}

impl GpuBufferSink for HeadlessSink {
    type Error = Infallible;

    fn exit_requested(&mut self) -> bool {
        self.presents >= self.frame_budget
    }

    fn upload_vertices(&mut self, buffer: &[f32]) -> Result<(), Self::Error> {
        let b = self.buffer.get_or_insert_with(Vec::new);
        b.clear();
        b.extend_from_slice(buffer);

        self.uploads += 1;
        Ok(())
    }

    fn draw_indexed(&mut self, index_count: usize) -> Result<(), Self::Error> {
        self.index_count = Some(index_count);
        self.draws += 1;
        Ok(())
    }

    fn present_frame(&mut self) -> Result<(), Self::Error> {
        self.presents += 1;
        Ok(())
    }
}
