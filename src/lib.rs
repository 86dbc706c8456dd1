//! # Jamat Library
//!
//! Prayer timings for the Smart Jamat Finder, shared between every surface of a
//! single running application.
//!
//! ## Architecture
//!
//! - **Store**: `timings::store::TimingsStore` holds the six prayer times. It is
//!   created once per run and handed to every surface; clones share one snapshot.
//! - **Surfaces**: `surfaces` renders the home screen and the mosque detail screen
//!   from the store, and provides the admin editor, the only surface that writes.
//! - **Directory**: `mosques` is the static list of nearby mosques; `admin` is the
//!   login step in front of the editor.
//! - **Configuration**: `config` reads `jamat.toml` for the location label, editor
//!   behavior and optional starting timings.
//! - **Commands**: `commands` wires the above into the `jamat` CLI.
//! - **Infrastructure**: `logger` for the boxed terminal output, `args` for
//!   command-line parsing, `constants` for defaults.

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod admin;
pub mod args;
pub mod commands;
pub mod config;
pub mod constants;
pub mod mosques;
pub mod surfaces;
pub mod timings;

pub use timings::store::TimingsStore;
pub use timings::{Prayer, TimingsSnapshot};
