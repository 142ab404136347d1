//! Scoped handle for the system logger.

use std::ffi::{CStr, CString};

/// Identifier prepended to every record this crate logs.
const IDENT: &CStr = c"writer_utility";

/// Open connection to syslog(3) under the `writer_utility` identifier.
///
/// Opening and closing are tied to the handle's scope: dropping it runs
/// `closelog`, so every exit path of the owning function releases the
/// logger. Logging failures are swallowed.
pub struct Syslog;

impl Syslog {
    /// Open the log with `LOG_PID | LOG_CONS` on the `LOG_USER` facility.
    pub fn open() -> Self {
        unsafe {
            libc::openlog(IDENT.as_ptr(), libc::LOG_PID | libc::LOG_CONS, libc::LOG_USER);
        }
        Syslog
    }

    /// Emit a `LOG_ERR` record.
    pub fn error(&self, message: &str) {
        self.send(libc::LOG_ERR, message);
    }

    /// Emit a `LOG_DEBUG` record.
    pub fn debug(&self, message: &str) {
        self.send(libc::LOG_DEBUG, message);
    }

    fn send(&self, priority: libc::c_int, message: &str) {
        // An interior NUL cannot cross the C boundary; drop the record
        // rather than panic.
        if let Ok(message) = CString::new(message) {
            unsafe {
                libc::syslog(priority, c"%s".as_ptr(), message.as_ptr());
            }
        }
    }
}

impl Drop for Syslog {
    fn drop(&mut self) {
        unsafe {
            libc::closelog();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_log_drop_does_not_panic() {
        let log = Syslog::open();
        log.debug("debug record from tests");
        log.error("error record from tests");
        drop(log);
    }

    #[test]
    fn test_message_with_interior_nul_is_dropped_silently() {
        let log = Syslog::open();
        log.error("bad\0record");
    }
}
