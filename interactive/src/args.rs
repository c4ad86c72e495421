use clap::{Parser, ValueEnum};

use spinner_common::exercise_loader::PolicyKind;

#[derive(Debug, Parser)]
pub struct ArgsInteractive {
    /// Built-in exercise (square, square-orbit, square-static, triangle) or path to a json5 exercise file
    #[arg(default_value = "square")]
    pub exercise: String,
    /// Replace the exercise's update mode with its default parameters
    #[arg(short, long, value_enum)]
    pub policy: Option<PolicyArg>,
    /// Width of the window, defaults to the exercise's
    #[arg(long)]
    pub width: Option<u32>,
    /// Height of the window, defaults to the exercise's
    #[arg(long)]
    pub height: Option<u32>,
    /// Present frames without waiting for vertical blank
    #[arg(long)]
    pub no_vsync: bool,
    /// Log filter, e.g. "debug" or "spinner=trace"
    #[arg(long)]
    pub log: Option<String>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum PolicyArg {
    Static,
    Incremental,
    Orbit,
}

impl From<PolicyArg> for PolicyKind {
    fn from(p: PolicyArg) -> Self {
        match p {
            PolicyArg::Static => Self::Static,
            PolicyArg::Incremental => Self::Incremental,
            PolicyArg::Orbit => Self::Orbit,
        }
    }
}
