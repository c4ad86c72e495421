use crate::exercise_loader::{Exercise, ExerciseLoader, LoaderError};

/// Exercises shipped with the binaries, usable by name instead of a path.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Builtin {
    Square,
    SquareOrbit,
    SquareStatic,
    Triangle,
}

impl Builtin {
    pub const ALL: [Builtin; 4] = [
        Builtin::Square,
        Builtin::SquareOrbit,
        Builtin::SquareStatic,
        Builtin::Triangle,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Builtin::Square => "square",
            Builtin::SquareOrbit => "square-orbit",
            Builtin::SquareStatic => "square-static",
            Builtin::Triangle => "triangle",
        }
    }

    fn source(&self) -> &'static str {
        match self {
            Builtin::Square => include_str!("../../exercises/square.json5"),
            Builtin::SquareOrbit => include_str!("../../exercises/square_orbit.json5"),
            Builtin::SquareStatic => include_str!("../../exercises/square_static.json5"),
            Builtin::Triangle => include_str!("../../exercises/triangle.json5"),
        }
    }

    pub fn exercise(&self) -> Result<Exercise, LoaderError> {
        ExerciseLoader::load_from_str(self.source())
    }
}
