// Fri Oct 16 2026 - Alex

use anyhow::Context;
use std::ffi::OsString;
use std::io;
use std::path::Path;
use strap::{
    config::DEFAULT_PROGRAM,
    ui::{self, ErrorDisplay},
    Config, Dispatcher, EnvSnapshot, Outcome, PathResolver,
};

fn main() {
    let env = EnvSnapshot::capture();
    ui::logging::init(&env);
    ui::init_colors(&env);

    let mut argv = std::env::args_os();
    let program = argv
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());
    let args: Vec<OsString> = argv.collect();

    let code = match run(&env, &program, &args) {
        Ok(code) => code,
        Err(e) => {
            ErrorDisplay::new(program.as_str()).print(&*e);
            1
        }
    };

    std::process::exit(code);
}

fn run(env: &EnvSnapshot, program: &str, args: &[OsString]) -> anyhow::Result<i32> {
    let resolver = PathResolver::new();
    let executable = std::env::current_exe().context("failed to locate the strap executable")?;
    let config = Config::locate(&executable, env, &resolver)?.with_program(program);

    let dispatcher = Dispatcher::new(&config)?;
    let outcome = {
        let mut out = io::stdout().lock();
        let mut err = io::stderr().lock();
        dispatcher.run(args, &mut out, &mut err)?
    };

    match outcome {
        Outcome::Completed { status } => Ok(status),
        Outcome::Handoff(handoff) => match handoff.execute() {
            Ok(status) => Ok(status),
            Err(e) => {
                ErrorDisplay::new(program).print(&e);
                Ok(e.exit_code())
            }
        },
    }
}
