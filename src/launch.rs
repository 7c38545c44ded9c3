use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::Command,
};

use tracing::{debug, warn};

use crate::{errors::LaunchError, model::Decision};

pub const CLAUDE: &str = "claude";
pub const HAPPY: &str = "happy";

/// A resolved program plus the argv it will see, `argv[0]` included.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LaunchPlan {
    pub program: PathBuf,
    pub argv: Vec<OsString>,
}

/// Look an executable up on `PATH`.
pub fn which_on_path(name: &str) -> Option<PathBuf> {
    which::which(name).ok()
}

/// Turn a decision into a concrete command line.
///
/// Selected MCP files are passed in ascending choice-list order, which is
/// the order they were discovered in. `on_fallback` fires as soon as
/// `happy` turns out to be missing, before `claude` is looked up.
pub fn plan(
    decision: &Decision,
    use_happy: bool,
    resolve: impl Fn(&str) -> Option<PathBuf>,
    on_fallback: impl FnOnce(),
) -> Result<LaunchPlan, LaunchError> {
    let happy = if use_happy { resolve(HAPPY) } else { None };
    let (name, program) = match happy {
        Some(path) => (HAPPY, path),
        None => {
            if use_happy {
                warn!(event = "launcher.exec.happy_missing", fallback = CLAUDE);
                on_fallback();
            }
            let path = resolve(CLAUDE).ok_or(LaunchError::ExecutableNotFound { name: CLAUDE })?;
            (CLAUDE, path)
        }
    };

    Ok(LaunchPlan {
        program,
        argv: build_argv(name, decision),
    })
}

fn build_argv(name: &str, decision: &Decision) -> Vec<OsString> {
    let mut argv: Vec<OsString> = vec![name.into()];
    let flags = decision.flags;

    if flags.yolo {
        argv.push("--dangerously-skip-permissions".into());
    }
    if flags.session.is_resume() {
        argv.push("--resume".into());
    }
    if flags.session.is_continue() {
        argv.push("--continue".into());
    }
    argv.push("--strict-mcp-config".into());

    let selected = decision.selected_files();
    if !selected.is_empty() {
        argv.push("--mcp-config".into());
        argv.extend(selected.into_iter().map(|f| f.path.clone().into_os_string()));
    }
    argv
}

/// Replace the current process with the planned program.
///
/// Only returns on failure. The environment is inherited untouched.
#[cfg(unix)]
pub fn exec(plan: &LaunchPlan) -> LaunchError {
    use std::os::unix::process::CommandExt;

    debug!(
        event = "launcher.exec.started",
        program = %plan.program.display(),
        argv = ?plan.argv
    );
    let source = command(&plan.program, &plan.argv).exec();
    LaunchError::ExecFailure {
        program: plan.program.clone(),
        source,
    }
}

/// Without `exec`, run the program to completion and mirror its status.
#[cfg(not(unix))]
pub fn exec(plan: &LaunchPlan) -> LaunchError {
    debug!(
        event = "launcher.exec.started",
        program = %plan.program.display(),
        argv = ?plan.argv
    );
    match command(&plan.program, &plan.argv).status() {
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(source) => LaunchError::ExecFailure {
            program: plan.program.clone(),
            source,
        },
    }
}

fn command(program: &Path, argv: &[OsString]) -> Command {
    let mut cmd = Command::new(program);
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        if let Some(arg0) = argv.first() {
            cmd.arg0(arg0);
        }
    }
    cmd.args(argv.iter().skip(1));
    cmd
}
