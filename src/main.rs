//! Entry point for the **tilerc** manifest process.
//!
//! Default mode binds the host socket and serves manifest requests until
//! the window manager exits. Two one-shot modes exist for humans:
//! `--emit` prints the evaluated manifest as JSON, `--check` validates it
//! and exits non-zero when a structural invariant is broken.

use log::error;
use tilerc::ipc::server::HostServer;
use tilerc::manifest::Manifest;

/// Default socket path for the manifest server.
fn default_socket_path() -> String {
    let runtime = std::env::var("XDG_RUNTIME_DIR").unwrap_or_else(|_| "/tmp".into());
    format!("{}/tilerc.sock", runtime)
}

fn main() {
    env_logger::init();

    let emit = std::env::args().any(|a| a == "--emit");
    let check = std::env::args().any(|a| a == "--check");

    if emit {
        run_emit();
    } else if check {
        run_check();
    } else {
        run_serve();
    }
}

/// Print the evaluated manifest as pretty JSON.
fn run_emit() {
    let manifest = Manifest::assemble();
    match serde_json::to_string_pretty(&manifest) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("failed to encode manifest: {}", e);
            std::process::exit(1);
        }
    }
}

/// Validate the manifest and report every violation.
fn run_check() {
    match Manifest::assemble().validate() {
        Ok(()) => println!("manifest ok"),
        Err(errors) => {
            for e in &errors {
                eprintln!("{}", e);
            }
            eprintln!("{} violation(s)", errors.len());
            std::process::exit(1);
        }
    }
}

/// Serve manifest requests until the host goes away.
fn run_serve() {
    let mut server = HostServer::new(default_socket_path());
    if let Err(e) = server.run() {
        error!("manifest server error: {}", e);
        std::process::exit(1);
    }
}
