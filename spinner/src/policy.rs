use cgmath::{Rad, Zero};

use crate::math::{orbit_point, rotate};
use crate::store::VertexStore;

/// Angle advanced by a fixed step once per frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AngleAccumulator {
    pub value: Rad<f32>,
    pub step: Rad<f32>,
}

impl AngleAccumulator {
    pub fn new(start: Rad<f32>, step: Rad<f32>) -> Self {
        Self { value: start, step }
    }

    /// Returns the current angle and moves on by one step.
    pub fn advance(&mut self) -> Rad<f32> {
        let current = self.value;
        self.value += self.step;
        current
    }
}

///
/// How the vertex store changes from one frame to the next.
///
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum UpdatePolicy {
    /// Upload the initial layout every frame without touching it.
    Static,
    /// Rotate every vertex by the same small angle each frame.
    Incremental { rotation: AngleAccumulator },
    /// Place vertex `i` on a circle at `angle + i * spacing`, ignoring its previous position.
    Orbit {
        radius: f32,
        angle: AngleAccumulator,
        spacing: Rad<f32>,
    },
}

impl UpdatePolicy {
    pub fn incremental(step: Rad<f32>) -> Self {
        Self::Incremental {
            rotation: AngleAccumulator::new(Rad::zero(), step),
        }
    }

    pub fn orbit(radius: f32, start: Rad<f32>, step: Rad<f32>, spacing: Rad<f32>) -> Self {
        Self::Orbit {
            radius,
            angle: AngleAccumulator::new(start, step),
            spacing,
        }
    }

    /// Advances the store by one frame.
    pub fn apply(&mut self, store: &mut VertexStore) {
        match self {
            UpdatePolicy::Static => {}
            UpdatePolicy::Incremental { rotation } => {
                store.apply_to_all(rotate, rotation.step);
                rotation.advance();
            }
            UpdatePolicy::Orbit {
                radius,
                angle,
                spacing,
            } => {
                let base = angle.advance();
                let (radius, spacing) = (*radius, *spacing);

                store.update_each(|i, _| orbit_point(base + spacing * i as f32, radius));
            }
        }
    }

    /// Total angle covered so far: the cumulative rotation or the current orbit angle.
    pub fn angle(&self) -> Rad<f32> {
        match self {
            UpdatePolicy::Static => Rad::zero(),
            UpdatePolicy::Incremental { rotation } => rotation.value,
            UpdatePolicy::Orbit { angle, .. } => angle.value,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            UpdatePolicy::Static => "static",
            UpdatePolicy::Incremental { .. } => "incremental",
            UpdatePolicy::Orbit { .. } => "orbit",
        }
    }
}

impl Default for UpdatePolicy {
    fn default() -> Self {
        Self::incremental(Rad(0.01))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::assert_close;
    use cgmath::{Deg, Vector3};

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

    #[test]
    fn accumulator_returns_value_before_step() {
        let mut acc = AngleAccumulator::new(Rad(1.0), Rad(-0.25));

        assert_eq!(acc.advance(), Rad(1.0));
        assert_eq!(acc.advance(), Rad(0.75));
        assert_eq!(acc.value, Rad(0.5));
    }

    #[test]
    fn static_leaves_store_untouched() {
        let mut store = square();
        let mut policy = UpdatePolicy::Static;

        policy.apply(&mut store);

        assert_eq!(store, square());
        assert_eq!(policy.angle(), Rad(0.0));
    }

    #[test]
    fn incremental_tracks_cumulative_rotation() {
        let mut store = square();
        let mut policy = UpdatePolicy::incremental(Rad(-0.01));

        for _ in 0..100 {
            policy.apply(&mut store);
        }

        assert!((policy.angle().0 + 1.0).abs() < 1e-4);

        for (new, old) in store.vertices().zip(square().vertices()) {
            assert_close(new, rotate(old, Rad(-1.0)), 1e-4);
        }
    }

    #[test]
    fn orbit_places_vertices_from_absolute_angle() {
        let radius = 2.0_f32.sqrt() / 2.0;
        let mut store = square();
        let mut policy =
            UpdatePolicy::orbit(radius, Rad(0.0), Deg(0.01).into(), Deg(90.0).into());

        policy.apply(&mut store);

        let expected = [
            Vector3::new(0.0, radius, 0.0),
            Vector3::new(radius, 0.0, 0.0),
            Vector3::new(0.0, -radius, 0.0),
            Vector3::new(-radius, 0.0, 0.0),
        ];

        for (v, e) in store.vertices().zip(expected) {
            assert_close(v, e, 1e-6);
        }

        policy.apply(&mut store);

        let first = store.vertex(0).unwrap();
        assert_close(first, orbit_point(Deg(0.01).into(), radius), 1e-6);
    }

    #[test]
    fn orbit_ignores_previous_positions() {
        let mut a = square();
        let mut b = square();
        b.update_each(|_, v| v * 10.0);

        let mut pa = UpdatePolicy::orbit(0.5, Rad(0.3), Rad(0.1), Rad(1.0));
        let mut pb = pa;

        pa.apply(&mut a);
        pb.apply(&mut b);

        assert_eq!(a, b);
    }
}
