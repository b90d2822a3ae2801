//! **tilerc** — a personal tiling window manager configuration manifest.
//!
//! The crate evaluates one fixed, typed configuration (key bindings,
//! workspace groups, a color palette, layouts, status-bar screens, mouse
//! bindings, floating rules, global flags, and a startup hook) and hands
//! it to the host window manager. All window management (tiling, input
//! dispatch, rendering) happens in the host; this crate only supplies the
//! data it reads at load time.
//!
//! # Architecture
//!
//! [`manifest::Manifest::assemble`] is the single evaluation entry point;
//! every other module contributes one named section of the manifest.
//! [`ipc::server::HostServer`] delivers the result: the host requests the
//! manifest over a Unix socket at startup and on every reload, and sends
//! one startup event that [`hooks::StartupHook`] answers at most once per
//! process.

pub mod action;
pub mod bar;
pub mod groups;
pub mod hooks;
pub mod ipc;
pub mod keys;
pub mod layout;
pub mod manifest;
pub mod rules;
pub mod theme;
