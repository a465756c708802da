//! Library side of the jita command-line tools.

pub mod commands;
