//! Source normalization through an external formatter
//!
//! The formatter is an opaque text -> text transform. Anything other than a
//! clean, silent, zero-status run is a generation failure.

use std::ffi::OsString;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;

use thiserror::Error;
use tracing::debug;

/// Failures of the external formatting collaborator.
#[derive(Debug, Error)]
pub enum ExternalToolError {
    /// The program could not be started.
    #[error("failed to spawn `{program}`: {source}")]
    Spawn {
        /// Program that was launched.
        program: String,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// Piping text to or from the program failed.
    #[error("I/O error while talking to `{program}`: {source}")]
    Io {
        /// Program that was launched.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The program exited unsuccessfully.
    #[error("`{program}` exited with {status}: {stderr}")]
    NonZeroExit {
        /// Program that was launched.
        program: String,
        /// Exit status reported by the OS.
        status: ExitStatus,
        /// Captured standard error.
        stderr: String,
    },

    /// The program succeeded but wrote to standard error.
    #[error("`{program}` reported diagnostics: {stderr}")]
    Diagnostics {
        /// Program that was launched.
        program: String,
        /// Captured standard error.
        stderr: String,
    },

    /// Standard output was not UTF-8.
    #[error("`{program}` produced non-UTF-8 output")]
    NonUtf8 {
        /// Program that was launched.
        program: String,
    },
}

/// Text normalization step applied to rendered artifacts.
pub trait SourceFormatter {
    /// Short name for logs and error messages.
    fn name(&self) -> &str;

    /// Normalize `source`, returning text of equal meaning.
    fn format(&self, source: &str) -> Result<String, ExternalToolError>;
}

/// Identity normalization.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl SourceFormatter for Passthrough {
    fn name(&self) -> &str {
        "passthrough"
    }

    fn format(&self, source: &str) -> Result<String, ExternalToolError> {
        Ok(source.to_string())
    }
}

/// Formatter run as a subprocess: source on stdin, result on stdout.
#[derive(Debug, Clone)]
pub struct ExternalFormatter {
    program: PathBuf,
    args: Vec<OsString>,
    name: String,
}

impl ExternalFormatter {
    /// Run `program` with no extra arguments.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        let program = program.into();
        let name = program.display().to_string();
        Self {
            program,
            args: Vec::new(),
            name,
        }
    }

    /// `rustfmt --edition 2021`, reading stdin.
    pub fn rustfmt() -> Self {
        Self::rustfmt_at("rustfmt")
    }

    /// rustfmt from an explicit binary path.
    pub fn rustfmt_at(program: impl Into<PathBuf>) -> Self {
        Self::new(program).with_args(["--edition", "2021"])
    }

    /// Append command-line arguments.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl SourceFormatter for ExternalFormatter {
    fn name(&self) -> &str {
        &self.name
    }

    fn format(&self, source: &str) -> Result<String, ExternalToolError> {
        debug!(program = %self.name, bytes = source.len(), "running external formatter");

        let child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ExternalToolError::Spawn {
                program: self.name.clone(),
                source,
            })?;

        let run = ChildGuard::new(child)
            .communicate(source.as_bytes())
            .map_err(|source| ExternalToolError::Io {
                program: self.name.clone(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&run.stderr).trim().to_string();
        if !run.status.success() {
            return Err(ExternalToolError::NonZeroExit {
                program: self.name.clone(),
                status: run.status,
                stderr,
            });
        }
        if let Err(source) = run.written {
            return Err(ExternalToolError::Io {
                program: self.name.clone(),
                source,
            });
        }
        if !stderr.is_empty() {
            return Err(ExternalToolError::Diagnostics {
                program: self.name.clone(),
                stderr,
            });
        }

        String::from_utf8(run.stdout).map_err(|_| ExternalToolError::NonUtf8 {
            program: self.name.clone(),
        })
    }
}

/// Result of one stdin -> stdout/stderr round trip.
struct Communicated {
    status: ExitStatus,
    stdout: Vec<u8>,
    stderr: Vec<u8>,
    /// Outcome of feeding stdin; a broken pipe only matters if the exit was clean.
    written: io::Result<()>,
}

/// Owns a running child; kills and reaps it if dropped before completion.
struct ChildGuard {
    child: Child,
    reaped: bool,
}

impl ChildGuard {
    fn new(child: Child) -> Self {
        Self {
            child,
            reaped: false,
        }
    }

    fn communicate(mut self, input: &[u8]) -> io::Result<Communicated> {
        let stdin = self.child.stdin.take();
        let stdout = self.child.stdout.take();
        let stderr = self.child.stderr.take();

        let (written, stdout, stderr) = thread::scope(|scope| {
            let writer = scope.spawn(move || -> io::Result<()> {
                match stdin {
                    // Dropping the handle closes the pipe so the child sees EOF.
                    Some(mut pipe) => pipe.write_all(input),
                    None => Ok(()),
                }
            });
            let err_reader = scope.spawn(move || read_pipe(stderr));
            let out = read_pipe(stdout);
            let err = join_pipe(err_reader.join());
            let written = join_pipe(writer.join());
            (written, out, err)
        });

        let status = self.child.wait()?;
        self.reaped = true;

        Ok(Communicated {
            status,
            stdout: stdout?,
            stderr: stderr?,
            written,
        })
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if self.reaped {
            return;
        }
        if let Ok(None) = self.child.try_wait() {
            let _ = self.child.kill();
        }
        let _ = self.child.wait();
    }
}

fn read_pipe<R: Read>(pipe: Option<R>) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    if let Some(mut pipe) = pipe {
        pipe.read_to_end(&mut buffer)?;
    }
    Ok(buffer)
}

fn join_pipe<T>(joined: thread::Result<io::Result<T>>) -> io::Result<T> {
    joined.unwrap_or_else(|_| Err(io::Error::other("formatter pipe thread panicked")))
}
