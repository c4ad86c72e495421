use cgmath::{Angle, Rad, Vector3};

use crate::Vertex;

/// Rotates `position` about the origin in the XY plane. `z` is passed through.
pub fn rotate(position: Vertex, angle: Rad<f32>) -> Vertex {
    let (sin, cos) = angle.sin_cos();

    Vector3::new(
        position.x * cos - position.y * sin,
        position.x * sin + position.y * cos,
        position.z,
    )
}

/// Point on a circle of `radius` around the origin, measured clockwise from +Y.
pub fn orbit_point(angle: Rad<f32>, radius: f32) -> Vertex {
    let (sin, cos) = angle.sin_cos();

    Vector3::new(sin * radius, cos * radius, 0.0)
}

#[cfg(test)]
pub(crate) fn assert_close(a: Vector3<f32>, b: Vector3<f32>, eps: f32) {
    use cgmath::InnerSpace;

    assert!((a - b).magnitude() <= eps, "{a:?} is not within {eps} of {b:?}");
}
