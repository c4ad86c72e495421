use clap::{Parser, ValueEnum};

use spinner_common::exercise_loader::PolicyKind;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Built-in exercise (square, square-orbit, square-static, triangle) or path to a json5 exercise file
    #[arg(default_value = "square")]
    pub exercise: String,
    /// Amount of frames to run
    #[arg(short, long, default_value_t = 900)]
    pub frames: u64,
    /// Replace the exercise's update mode with its default parameters
    #[arg(short, long, value_enum)]
    pub policy: Option<PolicyArg>,
    /// Path to write the JSON report to, stdout when missing
    #[arg(short, long)]
    pub output: Option<PathBuf>,
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
