//! Real stdin line source over the raw file descriptor.
//!
//! Std's buffered readers retry `EINTR` internally, which would swallow the
//! Ctrl-C-during-read signal the interactive loop needs to see. Reading the
//! descriptor directly lets a SIGINT surface as `ReadLine::Interrupted`.

#[cfg(unix)]
mod platform {
    use crate::interactive::{LineInput, ReadLine};
    use std::io::{self, ErrorKind};
    use std::os::unix::io::RawFd;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::OnceLock;
    use tracing::debug;

    /// Flag set by the SIGINT handler to stop the interactive loop.
    static SIGINT_RECEIVED: AtomicBool = AtomicBool::new(false);
    static SIGINT_HANDLER_INSTALLED: OnceLock<()> = OnceLock::new();

    /// Signal handler for Ctrl-C.
    ///
    /// Only uses atomic operations (async-signal-safe).
    extern "C" fn handle_sigint(_: libc::c_int) {
        SIGINT_RECEIVED.store(true, Ordering::SeqCst);
    }

    fn install_sigint_handler() {
        SIGINT_HANDLER_INSTALLED.get_or_init(|| unsafe {
            // SAFETY: handle_sigint is an extern "C" signal handler with no
            // side effects beyond flipping an atomic flag. SA_RESTART is left
            // out so a blocking read(2) returns EINTR instead of resuming.
            let mut action: libc::sigaction = std::mem::zeroed();
            action.sa_sigaction = handle_sigint as *const () as libc::sighandler_t;
            libc::sigemptyset(&mut action.sa_mask);
            action.sa_flags = 0;
            if libc::sigaction(libc::SIGINT, &action, std::ptr::null_mut()) != 0 {
                debug!("failed to install SIGINT handler");
            }
        });
    }

    fn take_sigint() -> bool {
        SIGINT_RECEIVED.swap(false, Ordering::SeqCst)
    }

    /// Line source reading the stdin descriptor directly.
    pub struct StdinLineInput {
        fd: RawFd,
        buf: Vec<u8>,
    }

    impl StdinLineInput {
        pub fn new() -> Self {
            install_sigint_handler();
            Self::with_fd(libc::STDIN_FILENO)
        }

        pub(crate) fn with_fd(fd: RawFd) -> Self {
            Self {
                fd,
                buf: Vec::new(),
            }
        }

        /// Pop one complete line (newline included) off the buffer.
        fn take_line(&mut self) -> Option<String> {
            let idx = self.buf.iter().position(|&b| b == b'\n')?;
            let line: Vec<u8> = self.buf.drain(..=idx).collect();
            Some(String::from_utf8_lossy(&line).into_owned())
        }
    }

    impl Default for StdinLineInput {
        fn default() -> Self {
            Self::new()
        }
    }

    impl LineInput for StdinLineInput {
        fn read_line(&mut self) -> ReadLine {
            loop {
                if take_sigint() {
                    return ReadLine::Interrupted;
                }
                if let Some(line) = self.take_line() {
                    return ReadLine::Line(line);
                }
                let mut chunk = [0u8; 4096];
                let n = unsafe {
                    libc::read(self.fd, chunk.as_mut_ptr() as *mut libc::c_void, chunk.len())
                };
                if n > 0 {
                    self.buf.extend_from_slice(&chunk[..n as usize]);
                    continue;
                }
                if n == 0 {
                    // Trailing text without a newline still counts as a line.
                    if self.buf.is_empty() {
                        return ReadLine::Eof;
                    }
                    let rest = std::mem::take(&mut self.buf);
                    return ReadLine::Line(String::from_utf8_lossy(&rest).into_owned());
                }
                let err = io::Error::last_os_error();
                if take_sigint() {
                    return ReadLine::Interrupted;
                }
                if err.kind() == ErrorKind::Interrupted {
                    continue;
                }
                debug!("stdin read error: {err}");
                return ReadLine::Eof;
            }
        }

        fn is_terminal(&self) -> bool {
            unsafe { libc::isatty(self.fd) == 1 }
        }

        fn has_buffered_input(&self) -> Option<bool> {
            if !self.buf.is_empty() {
                return Some(true);
            }
            let mut pfd = libc::pollfd {
                fd: self.fd,
                events: libc::POLLIN,
                revents: 0,
            };
            let ready = unsafe { libc::poll(&mut pfd, 1, 0) };
            Some(ready > 0 && (pfd.revents & libc::POLLIN) != 0)
        }
    }

}

#[cfg(unix)]
pub use platform::StdinLineInput;

#[cfg(not(unix))]
mod platform {
    use crate::interactive::{LineInput, ReadLine};

    /// Stub implementation for unsupported targets such as Windows.
    pub struct StdinLineInput;

    impl StdinLineInput {
        pub fn new() -> Self {
            StdinLineInput
        }
    }

    impl Default for StdinLineInput {
        fn default() -> Self {
            Self::new()
        }
    }

    impl LineInput for StdinLineInput {
        fn read_line(&mut self) -> ReadLine {
            ReadLine::Eof
        }

        fn is_terminal(&self) -> bool {
            false
        }
    }
}

#[cfg(not(unix))]
pub use platform::StdinLineInput;
