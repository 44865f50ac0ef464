//! I/O module for reading level files line by line

pub mod line_stream;
pub mod scan;

pub use line_stream::{
    decode_text, LineStream, LineStreamConfiguration, Lines, OverlongLines, DEFAULT_CAPACITY,
};
pub use scan::{scan_player_line, PlayerScan};
