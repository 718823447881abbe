use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// What a submitted line resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchTarget {
    OpenFolder(PathBuf),
    RunShell(String),
}

impl LaunchTarget {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::OpenFolder(_) => "folder",
            Self::RunShell(_) => "shell",
        }
    }
}

impl Display for LaunchTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OpenFolder(path) => write!(f, "open folder {}", path.display()),
            Self::RunShell(command) => write!(f, "run shell command {command}"),
        }
    }
}
