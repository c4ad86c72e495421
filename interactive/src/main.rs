use clap::Parser;

use spinner_common::exercise_loader::ExerciseLoader;
use spinner_common::logging::{init_logging, LoggingConfig};

mod app;
mod args;
mod context;
mod sink;

use app::App;
use args::ArgsInteractive;
use context::WindowSettings;

fn main() {
    // clion needs help in trait annotation
    let args = <ArgsInteractive as Parser>::parse();

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

    let settings = WindowSettings {
        title: exercise.title.clone(),
        width: args.width.unwrap_or(exercise.width),
        height: args.height.unwrap_or(exercise.height),
        vsync: !args.no_vsync,
    };

    let app = match App::new(exercise, settings) {
        Ok(app) => app,
        Err(e) => {
            log::error!("Could not start: {e}");
            std::process::exit(-1);
        }
    };

    app.run();
}
