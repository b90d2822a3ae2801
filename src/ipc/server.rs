//! Unix-socket server that hands the manifest to the host.
//!
//! Binds a Unix stream socket and accepts one connection at a time.
//! Each line received is parsed as a JSON-encoded [`HostRequest`] and
//! answered with one JSON-encoded [`HostReply`] line.
//!
//! # Wire format
//!
//! ```json
//! "Manifest"
//! "Startup"
//! "Check"
//! ```
//!
//! `"Manifest"` re-evaluates the manifest (this is the host's reload
//! path) and replies with the full document. `"Startup"` fires the
//! autostart hook; the process-wide latch makes repeated sends harmless.
//! `"Check"` replies with every structural violation (an empty list when
//! the manifest is clean).

use crate::hooks::{ProcessSpawner, Spawner};
use crate::manifest::Manifest;
use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::UnixListener;
use std::path::{Path, PathBuf};

/// A request from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostRequest {
    /// Evaluate the manifest and send it over.
    Manifest,
    /// Fire the startup hook (first window-manager start).
    Startup,
    /// Validate the manifest and report violations.
    Check,
}

/// Whether a `Startup` request actually launched the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StartupStatus {
    Fired,
    AlreadyFired,
}

/// One reply line per request line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HostReply {
    /// The evaluated manifest.
    Manifest(Box<Manifest>),
    /// Outcome of a startup request.
    Startup(StartupStatus),
    /// Validation outcome; rendered violation messages, empty when clean.
    Check { violations: Vec<String> },
    /// The request line could not be understood.
    Error(String),
}

/// Errors produced by the manifest server.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json encode error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The manifest server.
pub struct HostServer {
    path: PathBuf,
    spawner: Box<dyn Spawner + Send>,
}

impl HostServer {
    /// Create a server bound to `path` once [`run`](Self::run) is called.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            spawner: Box::new(ProcessSpawner),
        }
    }

    /// Substitute the process spawner (tests).
    #[cfg(test)]
    pub fn with_spawner(path: impl AsRef<Path>, spawner: Box<dyn Spawner + Send>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            spawner,
        }
    }

    /// The filesystem path of the socket.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Evaluate one request.
    fn handle(&self, request: HostRequest) -> HostReply {
        match request {
            HostRequest::Manifest => {
                info!("evaluating manifest");
                HostReply::Manifest(Box::new(Manifest::assemble()))
            }
            HostRequest::Startup => {
                let manifest = Manifest::assemble();
                let status = if manifest.startup.fire(self.spawner.as_ref()) {
                    StartupStatus::Fired
                } else {
                    StartupStatus::AlreadyFired
                };
                HostReply::Startup(status)
            }
            HostRequest::Check => {
                let violations = match Manifest::assemble().validate() {
                    Ok(()) => Vec::new(),
                    Err(errors) => errors.iter().map(ToString::to_string).collect(),
                };
                HostReply::Check { violations }
            }
        }
    }

    /// Bind the socket and start answering requests.
    ///
    /// This method **blocks** indefinitely; the host keeps it running for
    /// the window manager's lifetime.
    pub fn run(&mut self) -> Result<(), ServeError> {
        // Remove stale socket if present.
        let _ = std::fs::remove_file(&self.path);

        let listener = UnixListener::bind(&self.path)?;
        info!("listening on {}", self.path.display());

        for stream in listener.incoming() {
            match stream {
                Ok(mut stream) => {
                    debug!("host connected");
                    let reader = BufReader::new(stream.try_clone()?);
                    for line in reader.lines() {
                        let reply = match line {
                            Ok(ref text) if text.trim().is_empty() => continue,
                            Ok(text) => match serde_json::from_str::<HostRequest>(&text) {
                                Ok(request) => {
                                    debug!("received {:?}", request);
                                    self.handle(request)
                                }
                                Err(e) => {
                                    error!("bad request: {} — {}", text, e);
                                    HostReply::Error(e.to_string())
                                }
                            },
                            Err(e) => {
                                error!("read error: {}", e);
                                break;
                            }
                        };
                        let mut encoded = serde_json::to_string(&reply)?;
                        encoded.push('\n');
                        if let Err(e) = stream.write_all(encoded.as_bytes()) {
                            error!("write error: {}", e);
                            break;
                        }
                    }
                    debug!("host disconnected");
                }
                Err(e) => {
                    error!("accept error: {}", e);
                }
            }
        }
        Ok(())
    }
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::os::unix::net::UnixStream;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Monotonic counter to generate unique socket paths per test.
    static TEST_ID: AtomicU32 = AtomicU32::new(0);

    fn tmp_socket_path() -> PathBuf {
        let id = TEST_ID.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!("tilerc-test-{}-{}.sock", std::process::id(), id))
    }

    struct NullSpawner;

    impl Spawner for NullSpawner {
        fn spawn(&self, _program: &Path) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn spawn_server(path: PathBuf) {
        std::thread::spawn(move || {
            let mut server = HostServer::with_spawner(&path, Box::new(NullSpawner));
            let _ = server.run();
        });
        // Give the server a moment to bind.
        std::thread::sleep(std::time::Duration::from_millis(150));
    }

    fn request_lines(path: &Path, lines: &[&str]) -> Vec<String> {
        let mut stream = UnixStream::connect(path).expect("connect");
        for line in lines {
            writeln!(stream, "{}", line).unwrap();
        }
        stream.shutdown(std::net::Shutdown::Write).unwrap();
        BufReader::new(stream)
            .lines()
            .collect::<Result<_, _>>()
            .expect("read replies")
    }

    #[test]
    fn manifest_request_round_trips_the_full_document() {
        let path = tmp_socket_path();
        spawn_server(path.clone());

        let replies = request_lines(&path, &[r#""Manifest""#]);
        assert_eq!(replies.len(), 1);
        let reply: HostReply = serde_json::from_str(&replies[0]).unwrap();
        match reply {
            HostReply::Manifest(manifest) => {
                assert_eq!(*manifest, Manifest::assemble());
            }
            other => panic!("expected manifest reply, got {:?}", other),
        }

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn check_request_reports_a_clean_manifest() {
        let path = tmp_socket_path();
        spawn_server(path.clone());

        let replies = request_lines(&path, &[r#""Check""#]);
        let reply: HostReply = serde_json::from_str(&replies[0]).unwrap();
        assert_eq!(
            reply,
            HostReply::Check {
                violations: Vec::new()
            }
        );

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn malformed_request_gets_an_error_reply_and_does_not_kill_the_stream() {
        let path = tmp_socket_path();
        spawn_server(path.clone());

        let replies = request_lines(&path, &["not json at all", r#""Check""#]);
        assert_eq!(replies.len(), 2);
        let first: HostReply = serde_json::from_str(&replies[0]).unwrap();
        assert!(matches!(first, HostReply::Error(_)));
        let second: HostReply = serde_json::from_str(&replies[1]).unwrap();
        assert!(matches!(second, HostReply::Check { .. }));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn reloads_do_not_refire_the_startup_hook() {
        // Drive the handler directly: the startup latch is process-wide, so
        // this test also covers the socket path's behavior.
        let server = HostServer {
            path: tmp_socket_path(),
            spawner: Box::new(NullSpawner),
        };

        // Any number of manifest evaluations before and after the startup
        // request leaves the hook fired at most once.
        let _ = server.handle(HostRequest::Manifest);
        let first = server.handle(HostRequest::Startup);
        let _ = server.handle(HostRequest::Manifest);
        let second = server.handle(HostRequest::Startup);

        // The global latch may already be consumed by another test in this
        // process; either way a second request never fires again.
        if first == HostReply::Startup(StartupStatus::Fired) {
            assert_eq!(second, HostReply::Startup(StartupStatus::AlreadyFired));
        } else {
            assert_eq!(first, HostReply::Startup(StartupStatus::AlreadyFired));
            assert_eq!(second, HostReply::Startup(StartupStatus::AlreadyFired));
        }
    }
}
