//! Synchronous command execution: shell, direct exec, and exec with
//! stdout redirected to a file.
//!
//! The argument vector convention is the usual one: element 0 is the
//! executable path, the remaining elements are its arguments. The caller
//! owns the strings for the duration of the call.

use nix::errno::Errno;
use nix::fcntl::{open, OFlag};
use nix::sys::stat::Mode;
use nix::sys::wait::{waitpid, WaitStatus};
use nix::unistd::{execv, fork, ForkResult, Pid};
use std::ffi::CString;
use std::io;
use std::os::fd::AsRawFd;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::process::ExitStatusExt;
use std::path::Path;
use std::process::Command;
use thiserror::Error;

/// Why a command run failed.
///
/// Note that a failed `execv` or a failed output-file open cannot be
/// reported by the child directly; both surface here as `Exited` with a
/// non-zero status (127 for exec failure, 1 for open failure).
#[derive(Debug, Error)]
pub enum ExecError {
    /// The command line or argument vector was empty.
    #[error("empty command")]
    EmptyCommand,

    /// An argument (or the output path) contained an interior NUL byte.
    #[error("argument contains an interior NUL byte")]
    BadArgument,

    /// `fork` failed; no child process was created.
    #[error("fork failed: {0}")]
    Fork(Errno),

    /// The shell itself could not be spawned.
    #[error("failed to spawn shell: {0}")]
    Spawn(io::Error),

    /// `waitpid` on the child failed.
    #[error("wait failed: {0}")]
    Wait(Errno),

    /// The child terminated normally with a non-zero status.
    #[error("command exited with status {0}")]
    Exited(i32),

    /// The child was terminated by a signal.
    #[error("command terminated by signal {0}")]
    Signaled(i32),
}

/// Run a command line through `/bin/sh -c` and wait for it to finish.
///
/// # Arguments
/// * `command` - The command line, interpreted by the shell
///
/// # Returns
/// `true` iff the shell ran and exited with status 0. An empty command
/// fails immediately without spawning anything.
pub fn run_shell(command: &str) -> bool {
    try_run_shell(command).is_ok()
}

/// Launch an executable directly from an argument vector and wait for it.
///
/// No shell is involved and no PATH search is performed beyond what
/// `execv` itself provides, so `argv[0]` should be a path to the
/// executable.
///
/// # Arguments
/// * `argv` - Argument vector; element 0 is the executable path
///
/// # Returns
/// `true` iff the child was created, ran to completion, and exited with
/// status 0. Fork failure, abnormal termination, and non-zero exit all
/// collapse to `false`.
pub fn run_exec<S: AsRef<str>>(argv: &[S]) -> bool {
    try_run_exec(argv).is_ok()
}

/// Like [`run_exec`], but the child's standard output is captured into
/// `output`.
///
/// The file is created if absent and truncated if present (mode 0644).
/// If it cannot be opened, the child exits without running the command.
///
/// # Arguments
/// * `output` - File that receives the child's standard output
/// * `argv` - Argument vector; element 0 is the executable path
///
/// # Returns
/// `true` iff the child ran to completion and exited with status 0.
pub fn run_exec_redirect<P: AsRef<Path>, S: AsRef<str>>(output: P, argv: &[S]) -> bool {
    try_run_exec_redirect(output, argv).is_ok()
}

/// [`run_shell`] with a typed error instead of a collapsed boolean.
pub fn try_run_shell(command: &str) -> Result<(), ExecError> {
    if command.is_empty() {
        return Err(ExecError::EmptyCommand);
    }

    let status = Command::new("/bin/sh")
        .arg("-c")
        .arg(command)
        .status()
        .map_err(ExecError::Spawn)?;

    if status.success() {
        return Ok(());
    }
    match status.code() {
        Some(code) => Err(ExecError::Exited(code)),
        None => Err(ExecError::Signaled(status.signal().unwrap_or(0))),
    }
}

/// [`run_exec`] with a typed error instead of a collapsed boolean.
pub fn try_run_exec<S: AsRef<str>>(argv: &[S]) -> Result<(), ExecError> {
    let argv = to_cstrings(argv)?;

    // Everything the child needs is materialized before the fork; the
    // child only makes async-signal-safe calls.
    match unsafe { fork() }.map_err(ExecError::Fork)? {
        ForkResult::Child => {
            let _ = execv(&argv[0], &argv);
            // execv only returns on failure. Exit immediately so the
            // child never falls through into parent code.
            unsafe { libc::_exit(127) }
        }
        ForkResult::Parent { child } => wait_child(child),
    }
}

/// [`run_exec_redirect`] with a typed error instead of a collapsed boolean.
pub fn try_run_exec_redirect<P, S>(output: P, argv: &[S]) -> Result<(), ExecError>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let argv = to_cstrings(argv)?;
    let path = CString::new(output.as_ref().as_os_str().as_bytes())
        .map_err(|_| ExecError::BadArgument)?;

    match unsafe { fork() }.map_err(ExecError::Fork)? {
        ForkResult::Child => {
            let fd = match open(
                path.as_c_str(),
                OFlag::O_WRONLY | OFlag::O_CREAT | OFlag::O_TRUNC,
                Mode::from_bits_truncate(0o644),
            ) {
                Ok(fd) => fd,
                Err(_) => unsafe { libc::_exit(1) },
            };

            if unsafe { libc::dup2(fd.as_raw_fd(), libc::STDOUT_FILENO) } < 0 {
                unsafe { libc::_exit(1) }
            }
            // stdout keeps the duplicated descriptor; close the original
            drop(fd);

            let _ = execv(&argv[0], &argv);
            unsafe { libc::_exit(127) }
        }
        ForkResult::Parent { child } => wait_child(child),
    }
}

/// Convert an argument vector to C strings, rejecting empty vectors and
/// interior NUL bytes before any process is created.
fn to_cstrings<S: AsRef<str>>(argv: &[S]) -> Result<Vec<CString>, ExecError> {
    if argv.is_empty() {
        return Err(ExecError::EmptyCommand);
    }
    argv.iter()
        .map(|arg| CString::new(arg.as_ref()).map_err(|_| ExecError::BadArgument))
        .collect()
}

/// Block until the specific child exits and map its status.
fn wait_child(child: Pid) -> Result<(), ExecError> {
    match waitpid(child, None).map_err(ExecError::Wait)? {
        WaitStatus::Exited(_, 0) => Ok(()),
        WaitStatus::Exited(_, code) => Err(ExecError::Exited(code)),
        WaitStatus::Signaled(_, signal, _) => Err(ExecError::Signaled(signal as i32)),
        // Not reachable without WUNTRACED/WCONTINUED.
        _ => Err(ExecError::Wait(Errno::EINVAL)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_shell_command_fails_without_spawning() {
        assert!(!run_shell(""));
        assert!(matches!(try_run_shell(""), Err(ExecError::EmptyCommand)));
    }

    #[test]
    fn test_empty_argv_fails_without_spawning() {
        let argv: [&str; 0] = [];
        assert!(!run_exec(&argv));
        assert!(matches!(try_run_exec(&argv), Err(ExecError::EmptyCommand)));
        assert!(matches!(
            try_run_exec_redirect("/tmp/unused", &argv),
            Err(ExecError::EmptyCommand)
        ));
    }

    #[test]
    fn test_nul_byte_in_argument_is_rejected() {
        assert!(matches!(
            try_run_exec(&["/bin/echo", "a\0b"]),
            Err(ExecError::BadArgument)
        ));
    }

    #[test]
    fn test_nul_byte_in_output_path_is_rejected() {
        assert!(matches!(
            try_run_exec_redirect("/tmp/a\0b", &["/bin/echo", "x"]),
            Err(ExecError::BadArgument)
        ));
    }
}
