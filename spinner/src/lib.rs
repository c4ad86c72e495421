pub mod frame_loop;
pub mod headless;
pub mod math;
pub mod policy;
pub mod store;

pub use frame_loop::{FrameLoop, FrameStatus, GpuBufferSink};
pub use policy::{AngleAccumulator, UpdatePolicy};
pub use store::{SetupError, VertexStore};

/// A single position, `x, y, z`.
pub type Vertex = cgmath::Vector3<f32>;
