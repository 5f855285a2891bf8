// src/player.rs

use crate::config::AppConfig;
use crate::recording::{TimestampToken, ViewTag};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// A player invocation for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub program: String,
    pub file: PathBuf,
    pub extra_args: Vec<String>,
}

impl LaunchRequest {
    /// Builds the request for `file`, adding the rotation arguments when the
    /// file name marks it as a top-camera recording.
    pub fn for_file(config: &AppConfig, file: &Path) -> Self {
        let name = file_name(file);
        let extra_args = if ViewTag::detect(&name) == Some(ViewTag::Top) {
            config.top_view_args.clone()
        } else {
            Vec::new()
        };
        LaunchRequest {
            program: config.player.clone(),
            file: file.to_path_buf(),
            extra_args,
        }
    }
}

/// Record of a started player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchHandle {
    pub request: LaunchRequest,
    /// OS process id, if the launcher started a real process.
    pub pid: Option<u32>,
}

/// Starts players. Implementations must not wait for the player to exit.
pub trait Launcher {
    fn launch(&mut self, request: &LaunchRequest) -> io::Result<LaunchHandle>;
}

/// Spawns the player as a background OS process and forgets about it.
#[derive(Debug, Default)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&mut self, request: &LaunchRequest) -> io::Result<LaunchHandle> {
        let child = Command::new(&request.program)
            .arg(&request.file)
            .args(&request.extra_args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                io::Error::new(
                    e.kind(),
                    format!("Failed to start player '{}': {}", request.program, e),
                )
            })?;
        // Dropping the Child neither kills nor waits on the process.
        Ok(LaunchHandle {
            request: request.clone(),
            pid: Some(child.id()),
        })
    }
}

/// Starts a player for every file whose name contains `token`.
/// `files` is the full scan result, before any filtering or deduplication,
/// so every camera view of the event is played.
/// A file that fails to launch is logged and skipped.
pub fn dispatch(
    config: &AppConfig,
    files: &[PathBuf],
    token: &TimestampToken,
    launcher: &mut dyn Launcher,
) -> Vec<LaunchHandle> {
    let mut handles = Vec::new();
    for file in files {
        if !file_name(file).contains(token.as_str()) {
            continue;
        }
        let request = LaunchRequest::for_file(config, file);
        match launcher.launch(&request) {
            Ok(handle) => {
                log::info!(
                    "Started {} for '{}' (pid {:?})",
                    request.program,
                    request.file.display(),
                    handle.pid
                );
                handles.push(handle);
            }
            Err(e) => log::warn!("Could not play '{}': {}", file.display(), e),
        }
    }
    handles
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
