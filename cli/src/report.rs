use serde::Serialize;

use spinner::{FrameLoop, UpdatePolicy};
use spinner::headless::HeadlessSink;

/// Geometry left in the store after a headless run.
#[derive(Debug, Serialize)]
pub struct Report {
    pub frames: u64,
    pub policy: &'static str,
    /// Cumulative rotation, or the current absolute angle, in radians.
    pub angle: f32,
    pub uploads: u64,
    pub vertices: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl Report {
    pub fn new(frame_loop: &FrameLoop, sink: &HeadlessSink) -> Self {
        let store = frame_loop.store();
        let policy: &UpdatePolicy = frame_loop.policy();

        Self {
            frames: frame_loop.frames(),
            policy: policy.name(),
            angle: policy.angle().0,
            uploads: sink.uploads(),
            vertices: store.vertices().map(Into::into).collect(),
            indices: store.indices().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spinner_common::layouts::Builtin;

    #[test]
    fn square_report() {
        let exercise = Builtin::Square.exercise().unwrap();
        let mut frame_loop = FrameLoop::new(exercise.store, exercise.policy);
        let mut sink = HeadlessSink::new(3);

        frame_loop.run(&mut sink).unwrap();

        let report = Report::new(&frame_loop, &sink);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["frames"], 3);
        assert_eq!(json["policy"], "incremental");
        assert_eq!(json["uploads"], 3);
        assert_eq!(json["vertices"].as_array().unwrap().len(), 4);
        assert_eq!(json["indices"], serde_json::json!([0, 1, 2, 2, 3, 0]));
        assert!((report.angle - 0.03).abs() < 1e-6);
    }
}
