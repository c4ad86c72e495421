use crate::policy::UpdatePolicy;
use crate::store::VertexStore;

///
/// The graphics backend the frame loop feeds.
///
/// Every method is called once per frame, in declaration order after
/// `exit_requested`. A returned error ends the loop.
///
pub trait GpuBufferSink {
    type Error: std::error::Error;

    /// Polls pending input and reports whether the loop should stop.
    fn exit_requested(&mut self) -> bool;

    /// Replaces the whole vertex buffer on the device.
    fn upload_vertices(&mut self, buffer: &[f32]) -> Result<(), Self::Error>;

    fn draw_indexed(&mut self, index_count: usize) -> Result<(), Self::Error>;

    /// Swaps buffers. May block until the next vertical blank.
    fn present_frame(&mut self) -> Result<(), Self::Error>;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Exit,
}

pub struct FrameLoop {
    store: VertexStore,
    policy: UpdatePolicy,
    frames: u64,
}

impl FrameLoop {
    pub fn new(store: VertexStore, policy: UpdatePolicy) -> Self {
        log::info!(
            "frame loop: {} vertices, {} indices, {} update",
            store.vertex_count(),
            store.index_count(),
            policy.name()
        );

        Self {
            store,
            policy,
            frames: 0,
        }
    }

    pub fn step<S: GpuBufferSink>(&mut self, sink: &mut S) -> Result<FrameStatus, S::Error> {
        if sink.exit_requested() {
            log::info!("exit requested after {} frames", self.frames);
            return Ok(FrameStatus::Exit);
        }

        self.policy.apply(&mut self.store);

        sink.upload_vertices(self.store.as_slice())?;
        sink.draw_indexed(self.store.index_count())?;
        sink.present_frame()?;

        self.frames += 1;

        Ok(FrameStatus::Continue)
    }

    /// Steps until the sink asks to exit. Returns the number of rendered frames.
    pub fn run<S: GpuBufferSink>(&mut self, sink: &mut S) -> Result<u64, S::Error> {
        while self.step(sink)? == FrameStatus::Continue {}

        Ok(self.frames)
    }

    pub fn store(&self) -> &VertexStore {
        &self.store
    }

    pub fn policy(&self) -> &UpdatePolicy {
        &self.policy
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessSink;
    use crate::math::{assert_close, rotate};
    use cgmath::{Rad, Vector3};
    use std::convert::Infallible;
    use thiserror::Error;

    fn square() -> VertexStore {
        VertexStore::from_vertices(
            &[
                Vector3::new(-0.5, -0.5, 0.0),
                Vector3::new(0.5, -0.5, 0.0),
                Vector3::new(0.5, 0.5, 0.0),
                Vector3::new(-0.5, 0.5, 0.0),
            ],
            vec![0, 1, 2, 2, 3, 0],
        )
        .unwrap()
    }

    #[derive(Debug, PartialEq)]
    enum Call {
        Poll,
        Upload(Vec<f32>),
        Draw(usize),
        Present,
    }

    struct RecordingSink {
        calls: Vec<Call>,
        exit_after: usize,
    }

    impl GpuBufferSink for RecordingSink {
        type Error = Infallible;

        fn exit_requested(&mut self) -> bool {
            self.calls.push(Call::Poll);
            self.calls.iter().filter(|c| **c == Call::Poll).count() > self.exit_after
        }

        fn upload_vertices(&mut self, buffer: &[f32]) -> Result<(), Self::Error> {
            self.calls.push(Call::Upload(buffer.to_vec()));
            Ok(())
        }

        fn draw_indexed(&mut self, index_count: usize) -> Result<(), Self::Error> {
            self.calls.push(Call::Draw(index_count));
            Ok(())
        }

        fn present_frame(&mut self) -> Result<(), Self::Error> {
            self.calls.push(Call::Present);
            Ok(())
        }
    }

    #[test]
    fn frame_call_order() {
        let mut sink = RecordingSink {
            calls: Vec::new(),
            exit_after: 1,
        };
        let mut frame_loop = FrameLoop::new(square(), UpdatePolicy::Static);

        let frames = frame_loop.run(&mut sink).unwrap();

        assert_eq!(frames, 1);
        assert_eq!(
            sink.calls,
            vec![
                Call::Poll,
                Call::Upload(square().as_slice().to_vec()),
                Call::Draw(6),
                Call::Present,
                Call::Poll,
            ]
        );
    }

    #[test]
    fn exit_before_first_frame_leaves_store() {
        let mut sink = HeadlessSink::new(0);
        let mut frame_loop = FrameLoop::new(square(), UpdatePolicy::incremental(Rad(0.2)));

        assert_eq!(frame_loop.step(&mut sink).unwrap(), FrameStatus::Exit);
        assert_eq!(frame_loop.frames(), 0);
        assert_eq!(frame_loop.store(), &square());
        assert_eq!(sink.uploads(), 0);
    }

    #[test]
    fn uploads_updated_buffer_every_frame() {
        let mut sink = HeadlessSink::new(10);
        let mut frame_loop = FrameLoop::new(square(), UpdatePolicy::incremental(Rad(0.01)));

        assert_eq!(frame_loop.run(&mut sink).unwrap(), 10);
        assert_eq!(sink.uploads(), 10);
        assert_eq!(sink.draws(), 10);
        assert_eq!(sink.presents(), 10);
        assert_eq!(sink.last_index_count(), Some(6));
        assert_eq!(sink.last_upload(), Some(frame_loop.store().as_slice()));

        let first = frame_loop.store().vertex(0).unwrap();
        assert_close(first, rotate(Vector3::new(-0.5, -0.5, 0.0), Rad(0.1)), 1e-5);
    }

    #[derive(Debug, Error)]
    #[error("device lost")]
    struct DeviceLost;

    struct FailingSink;

    impl GpuBufferSink for FailingSink {
        type Error = DeviceLost;

        fn exit_requested(&mut self) -> bool {
            false
        }

        fn upload_vertices(&mut self, _: &[f32]) -> Result<(), Self::Error> {
            Err(DeviceLost)
        }

        fn draw_indexed(&mut self, _: usize) -> Result<(), Self::Error> {
            unreachable!()
        }

        fn present_frame(&mut self) -> Result<(), Self::Error> {
            unreachable!()
        }
    }

    #[test]
    fn sink_error_ends_loop() {
        let mut frame_loop = FrameLoop::new(square(), UpdatePolicy::Static);

        assert!(frame_loop.run(&mut FailingSink).is_err());
        assert_eq!(frame_loop.frames(), 0);
    }
}
