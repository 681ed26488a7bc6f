//! # CLI
//!
//! One terminal client for the coursedex library. Only this module touches stdout,
//! stderr, stdin and exit codes; everything it shows comes from a `Session` drawing
//! on a [`render::TermSurface`].
//!
//! ## Modes
//!
//! - `coursedex` / `coursedex list`: print the catalog once, optionally filtered with
//!   `--search`, `--department` and `--level`.
//! - `coursedex browse`: print the catalog, then refine it line by line from stdin.
//!   Every filter command redraws the whole frame.
//! - `coursedex departments` / `levels`: print the selector options.
//! - `coursedex config`: inspect or change `config.json`.
//!
//! ## Module Structure
//!
//! - `commands`: dispatch and per-command handlers
//! - `browse`: parsing of interactive line commands
//! - `render`: templated output and the terminal surface
//! - `setup`: argument parsing via clap
//! - `styles`: terminal styling
//! - `templates`: output templates

mod browse;
mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
