use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;

use crate::config::Config;
use crate::model::LaunchTarget;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LaunchError {
    #[error("empty command")]
    EmptyCommand,
    #[error("failed to start {program}: {message}")]
    SpawnFailed { program: String, message: String },
}

/// Resolves `cmd` against the process working directory, then `home`.
/// Folder checks win over shell execution, and an explicit path wins over the
/// home-relative guess.
pub fn classify_with_home(cmd: &str, home: Option<&Path>) -> LaunchTarget {
    if Path::new(cmd).is_dir() {
        return LaunchTarget::OpenFolder(PathBuf::from(cmd));
    }

    if let Some(home) = home {
        let candidate = PathBuf::from(format!("{}/{cmd}", home.display()));
        if candidate.is_dir() {
            return LaunchTarget::OpenFolder(candidate);
        }
    }

    LaunchTarget::RunShell(cmd.to_string())
}

/// Program and arguments that carry out `target`.
pub fn command_line(target: &LaunchTarget, cfg: &Config) -> (String, Vec<String>) {
    match target {
        LaunchTarget::OpenFolder(path) => (
            cfg.file_manager.clone(),
            vec![path.to_string_lossy().into_owned()],
        ),
        LaunchTarget::RunShell(command) => (
            cfg.shell.clone(),
            vec!["-i".to_string(), "-c".to_string(), command.clone()],
        ),
    }
}

pub trait ProcessLauncher {
    fn launch(&mut self, program: &str, args: &[String]) -> Result<(), LaunchError>;
}

/// Starts the process and forgets it: no handle is kept and its exit status
/// is never read.
#[derive(Debug, Default)]
pub struct DetachedLauncher;

impl ProcessLauncher for DetachedLauncher {
    fn launch(&mut self, program: &str, args: &[String]) -> Result<(), LaunchError> {
        if program.trim().is_empty() {
            return Err(LaunchError::EmptyCommand);
        }

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }

        command
            .spawn()
            .map(drop)
            .map_err(|e| LaunchError::SpawnFailed {
                program: program.to_string(),
                message: e.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRecord {
    pub program: String,
    pub args: Vec<String>,
}

/// Remembers launches instead of starting processes.
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    launches: Vec<LaunchRecord>,
    fail_with: Option<String>,
}

impl RecordingLauncher {
    pub fn failing(message: &str) -> Self {
        Self {
            launches: Vec::new(),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn launches(&self) -> &[LaunchRecord] {
        &self.launches
    }
}

impl ProcessLauncher for RecordingLauncher {
    fn launch(&mut self, program: &str, args: &[String]) -> Result<(), LaunchError> {
        self.launches.push(LaunchRecord {
            program: program.to_string(),
            args: args.to_vec(),
        });
        match &self.fail_with {
            Some(message) => Err(LaunchError::SpawnFailed {
                program: program.to_string(),
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

pub fn default_launcher() -> Box<dyn ProcessLauncher> {
    Box::new(DetachedLauncher)
}

pub fn launch_target(
    launcher: &mut dyn ProcessLauncher,
    target: &LaunchTarget,
    cfg: &Config,
) -> Result<(), LaunchError> {
    let (program, args) = command_line(target, cfg);
    launcher.launch(&program, &args)
}
