//! Run external commands and wait for them to finish.
//!
//! This crate offers three ways to launch a command synchronously:
//!
//! - [`run_shell`] - hand a command line to `/bin/sh` for interpretation
//! - [`run_exec`] - launch an executable directly from an argument vector,
//!   with no shell involved
//! - [`run_exec_redirect`] - like [`run_exec`], but with the child's
//!   standard output captured into a file
//!
//! Each call blocks until the child process exits and reports success as a
//! plain `bool`. Callers that need to know *why* a run failed can use the
//! `try_` variants, which return a typed [`ExecError`] instead.

pub mod exec;

pub use exec::{
    run_exec, run_exec_redirect, run_shell, try_run_exec, try_run_exec_redirect, try_run_shell,
    ExecError,
};
