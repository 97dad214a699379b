//! Transcoding of the FBI generic export to other configuration formats.

pub mod toml;
pub mod yaml;
