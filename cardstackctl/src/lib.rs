//! Library half of `cardstackctl`: argument parsing, scroll simulation and
//! output rendering, kept out of `main` so they can be tested directly.
#![allow(missing_docs)]

pub mod cli;
pub mod render;
pub mod simulate;

pub use cli::{Cli, Command};
pub use render::OutputFormat;
