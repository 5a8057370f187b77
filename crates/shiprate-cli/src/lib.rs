//! Library side of the `shiprate` command: logging setup, command runners and
//! table rendering.

pub mod commands;
pub mod logging;
pub mod report;
