//! IPC surface the host window manager talks to.
//!
//! The host (or a curious shell) connects to the Unix socket and sends
//! newline-delimited JSON requests; every request gets exactly one JSON
//! reply line.

pub mod server;
