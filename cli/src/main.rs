use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::Parser;

use spinner::headless::HeadlessSink;
use spinner::FrameLoop;

use spinner_common::exercise_loader::ExerciseLoader;
use spinner_common::logging::{init_logging, LoggingConfig};

mod args;
mod report;

use args::Args;
use report::Report;

fn main() {
    // clion needs help in trait annotation
    let args = <Args as Parser>::parse();

    init_logging(LoggingConfig {
        filter: args.log.clone(),
    });

    let exercise = match ExerciseLoader::resolve(&args.exercise) {
        Ok(v) => v,
        Err(e) => {
            log::error!("Could not read exercise description: {e}");
            std::process::exit(-1);
        }
    };

    let exercise = match args.policy {
        Some(policy) => exercise.with_policy(policy.into()),
        None => exercise,
    };

    let mut frame_loop = FrameLoop::new(exercise.store, exercise.policy);
    let mut sink = HeadlessSink::new(args.frames);

    let frames = match frame_loop.run(&mut sink) {
        Ok(frames) => frames,
        Err(e) => match e {},
    };

    log::info!("ran {frames} frames");

    let report = Report::new(&frame_loop, &sink);

    if let Err(e) = write_out(&report, args.output.as_deref()) {
        log::error!("Could not write report: {e}");
        std::process::exit(-1);
    }
}

fn write_out(report: &Report, path: Option<&Path>) -> std::io::Result<()> {
    let mut writer: Box<dyn Write> = match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(std::io::stdout().lock()),
    };

    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    writer.flush()
}
