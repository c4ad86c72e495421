use std::path::Path;

use cgmath::{Angle, Deg, InnerSpace, Rad, Vector3, Zero};

use serde::{Deserialize, Serialize};

use thiserror::Error;

use spinner::{SetupError, UpdatePolicy, VertexStore};

use crate::layouts::Builtin;

pub const DEFAULT_TITLE: &str = "LearnOpenGL";
pub const DEFAULT_SIZE: (u32, u32) = (512, 512);
pub const DEFAULT_CLEAR_COLOR: [f32; 3] = [0.2, 0.1, 0.8];

///
/// One runnable exercise: geometry, how it moves and where it is shown.
///
#[derive(Debug, Clone)]
pub struct Exercise {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub clear_color: [f32; 3],
    pub store: VertexStore,
    pub policy: UpdatePolicy,
}

impl Exercise {
    pub fn with_policy(mut self, kind: PolicyKind) -> Self {
        self.policy = kind.default_for(&self.store);
        self
    }
}

/// Update modes selectable without spelling out their parameters.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PolicyKind {
    Static,
    Incremental,
    Orbit,
}

impl PolicyKind {
    pub fn default_for(&self, store: &VertexStore) -> UpdatePolicy {
        match self {
            PolicyKind::Static => UpdatePolicy::Static,
            PolicyKind::Incremental => UpdatePolicy::default(),
            PolicyKind::Orbit => UpdatePolicy::orbit(
                enclosing_radius(store),
                Rad::zero(),
                Deg(0.01).into(),
                even_spacing(store),
            ),
        }
    }
}

pub struct ExerciseLoader {}

impl ExerciseLoader {
    /// Accepts either the name of a built-in exercise or a path to an exercise file.
    pub fn resolve(name_or_path: &str) -> Result<Exercise, LoaderError> {
        match Builtin::from_name(name_or_path) {
            Some(builtin) => {
                log::debug!("using built-in exercise {name_or_path}");
                builtin.exercise()
            }
            None => Self::load_from_path(name_or_path),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Exercise, LoaderError> {
        let src = std::fs::read_to_string(path.as_ref())?;

        log::debug!("read exercise file {:?}", path.as_ref());

        Self::load_from_str(&src)
    }

    pub fn load_from_str(src: &str) -> Result<Exercise, LoaderError> {
        let file: ExerciseFile = json5::from_str(src)?;

        file.into_exercise()
    }
}

fn enclosing_radius(store: &VertexStore) -> f32 {
    store
        .vertices()
        .map(|v| v.truncate().magnitude())
        .fold(0.0, f32::max)
}

fn even_spacing(store: &VertexStore) -> Rad<f32> {
    match store.vertex_count() {
        0 => Rad::zero(),
        n => Rad::full_turn() / n as f32,
    }
}

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("{0}")]
    InputError(#[from] std::io::Error),
    #[error("{0}")]
    FormatError(#[from] json5::Error),
    #[error("invalid geometry: {0}")]
    Geometry(#[from] SetupError),
    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleStub {
    Degrees(f32),
    Radians(f32),
}

impl From<AngleStub> for Rad<f32> {
    fn from(a: AngleStub) -> Self {
        match a {
            AngleStub::Degrees(d) => Deg(d).into(),
            AngleStub::Radians(r) => Rad(r),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
enum UpdateStub {
    Static,
    Incremental {
        step: AngleStub,
    },
    Orbit {
        radius: Option<f32>,
        step: AngleStub,
        spacing: Option<AngleStub>,
        start: Option<AngleStub>,
    },
}

impl Default for UpdateStub {
    fn default() -> Self {
        Self::Incremental {
            step: AngleStub::Radians(0.01),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Copy, Clone)]
struct WindowStub {
    width: u32,
    height: u32,
}

impl Default for WindowStub {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE.0,
            height: DEFAULT_SIZE.1,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ExerciseFile {
    #[serde(default = "default_title")]
    title: String,
    #[serde(default)]
    window: WindowStub,
    #[serde(default = "default_clear_color")]
    clear_color: [f32; 3],
    vertices: Vec<[f32; 3]>,
    indices: Vec<u32>,
    #[serde(default)]
    update: UpdateStub,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_owned()
}

fn default_clear_color() -> [f32; 3] {
    DEFAULT_CLEAR_COLOR
}

impl ExerciseFile {
    fn into_exercise(self) -> Result<Exercise, LoaderError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(LoaderError::Other(format!(
                "window size {}x{} must not be empty",
                self.window.width, self.window.height
            )));
        }

        let vertices: Vec<Vector3<f32>> = self.vertices.into_iter().map(Vector3::from).collect();
        let store = VertexStore::from_vertices(&vertices, self.indices)?;

        let policy = match self.update {
            UpdateStub::Static => UpdatePolicy::Static,
            UpdateStub::Incremental { step } => UpdatePolicy::incremental(step.into()),
            UpdateStub::Orbit {
                radius,
                step,
                spacing,
                start,
            } => {
                let radius = radius.unwrap_or_else(|| enclosing_radius(&store));

                if !(radius.is_finite() && radius >= 0.0) {
                    return Err(LoaderError::Other(format!("invalid orbit radius {radius}")));
                }

                UpdatePolicy::orbit(
                    radius,
                    start.map(Rad::from).unwrap_or_else(Rad::zero),
                    step.into(),
                    spacing.map(Rad::from).unwrap_or_else(|| even_spacing(&store)),
                )
            }
        };

        Ok(Exercise {
            title: self.title,
            width: self.window.width,
            height: self.window.height,
            clear_color: self.clear_color,
            store,
            policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r#"
    {
        // bottom-left, bottom-right, top-right, top-left
        vertices: [
            [-0.5, -0.5, 0.0],
            [0.5, -0.5, 0.0],
            [0.5, 0.5, 0.0],
            [-0.5, 0.5, 0.0],
        ],
        indices: [0, 1, 2, 2, 3, 0],
    }
    "#;

    #[test]
    fn defaults() {
        let exercise = ExerciseLoader::load_from_str(SQUARE).unwrap();

        assert_eq!(exercise.title, DEFAULT_TITLE);
        assert_eq!((exercise.width, exercise.height), DEFAULT_SIZE);
        assert_eq!(exercise.clear_color, DEFAULT_CLEAR_COLOR);
        assert_eq!(exercise.store.vertex_count(), 4);
        assert_eq!(exercise.store.index_count(), 6);
        assert_eq!(exercise.policy, UpdatePolicy::incremental(Rad(0.01)));
    }

    #[test]
    fn orbit_section() {
        let src = r#"
        {
            title: "orbit",
            window: { width: 640, height: 480 },
            clear_color: [0, 0, 0],
            vertices: [[-0.5, -0.5, 0], [0.5, -0.5, 0], [0.5, 0.5, 0], [-0.5, 0.5, 0]],
            indices: [0, 1, 2, 2, 3, 0],
            update: { mode: "orbit", step: { degrees: 0.01 } },
        }
        "#;

        let exercise = ExerciseLoader::load_from_str(src).unwrap();

        assert_eq!((exercise.width, exercise.height), (640, 480));
        assert_eq!(exercise.policy.name(), "orbit");

        match exercise.policy {
            UpdatePolicy::Orbit {
                radius,
                angle,
                spacing,
            } => {
                assert!((radius - 2.0_f32.sqrt() / 2.0).abs() < 1e-6);
                assert!((spacing.0 - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
                assert_eq!(angle.value, Rad(0.0));
                assert!((angle.step.0 - 0.01_f32.to_radians()).abs() < 1e-9);
            }
            other => panic!("unexpected policy {other:?}"),
        }
    }

    #[test]
    fn orbit_start_angle() {
        let src = r#"
        {
            vertices: [[-0.5, -0.5, 0], [0.5, -0.5, 0], [0.5, 0.5, 0], [-0.5, 0.5, 0]],
            indices: [0, 1, 2, 2, 3, 0],
            update: { mode: "orbit", step: { radians: 0.1 }, start: { degrees: 90 } },
        }
        "#;

        let exercise = ExerciseLoader::load_from_str(src).unwrap();

        match exercise.policy {
            UpdatePolicy::Orbit { angle, .. } => {
                assert!((angle.value.0 - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
                assert_eq!(angle.step, Rad(0.1));
            }
            other => panic!("unexpected policy {other:?}"),
        }
    }

    #[test]
    fn negative_orbit_radius_rejected() {
        let src = r#"
        {
            vertices: [[0, 0.5, 0], [-0.5, -0.5, 0], [0.5, -0.5, 0]],
            indices: [0, 1, 2],
            update: { mode: "orbit", radius: -1, step: { degrees: 0.01 } },
        }
        "#;

        assert!(matches!(
            ExerciseLoader::load_from_str(src),
            Err(LoaderError::Other(_))
        ));
    }

    #[test]
    fn incremental_in_radians() {
        let src = r#"
        {
            vertices: [[0, 0.5, 0], [-0.5, -0.5, 0], [0.5, -0.5, 0]],
            indices: [0, 1, 2],
            update: { mode: "incremental", step: { radians: -0.01 } },
        }
        "#;

        let exercise = ExerciseLoader::load_from_str(src).unwrap();

        assert_eq!(exercise.policy, UpdatePolicy::incremental(Rad(-0.01)));
    }

    #[test]
    fn out_of_range_index_rejected() {
        let src = r#"
        {
            vertices: [[-0.5, -0.5, 0], [0.5, -0.5, 0], [0.5, 0.5, 0], [-0.5, 0.5, 0]],
            indices: [0, 1, 10],
        }
        "#;

        let err = ExerciseLoader::load_from_str(src).unwrap_err();

        assert!(matches!(
            err,
            LoaderError::Geometry(SetupError::IndexOutOfRange { index: 10, .. })
        ));
    }

    #[test]
    fn malformed_input_rejected() {
        assert!(matches!(
            ExerciseLoader::load_from_str("{ vertices: [[0, 0, 0]] }"),
            Err(LoaderError::FormatError(_))
        ));

        let empty_window = r#"{ window: { width: 0, height: 10 }, vertices: [], indices: [] }"#;
        assert!(matches!(
            ExerciseLoader::load_from_str(empty_window),
            Err(LoaderError::Other(_))
        ));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            ExerciseLoader::load_from_path("does/not/exist.json5"),
            Err(LoaderError::InputError(_))
        ));
    }

    #[test]
    fn policy_override() {
        let exercise = ExerciseLoader::load_from_str(SQUARE)
            .unwrap()
            .with_policy(PolicyKind::Static);

        assert_eq!(exercise.policy, UpdatePolicy::Static);
    }
}
