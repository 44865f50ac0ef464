//! # level-io
//!
//! Reading and writing the line-oriented text files of a 2D level editor.
//!
//! ## Features
//!
//! - [`LineStream`]: sequential line reader with a fixed-capacity chunk
//!   buffer, stitching together lines longer than the buffer
//! - Bulk collection of a fixed number of lines, or of everything left
//! - [`PlayerLayer`]: the player spawn-point record, loaded leniently from one
//!   line and written back in the same format
//! - Non-fatal load diagnostics collected as notifications
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use level_io::{LineStream, NotificationCollection, PlayerLayer};
//!
//! let mut stream = LineStream::open("levels/level-01.txt", 256)?;
//! let mut notifications = NotificationCollection::new();
//! let player = PlayerLayer::from_line_stream(&mut stream, &mut notifications)?;
//!
//! for note in &notifications {
//!     println!("{}", note);
//! }
//!
//! let mut out = Vec::new();
//! player.dump_stream(&mut out)?;
//! let rest = stream.collect_until_end();
//! # let _ = rest;
//! # Ok::<(), level_io::LevelError>(())
//! ```

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod io;
pub mod layers;
pub mod notification;
pub mod types;

// Re-export commonly used types
pub use error::{LevelError, Result};
pub use io::{LineStream, LineStreamConfiguration, OverlongLines};
pub use layers::{PlayerLayer, PlayerLayerConfiguration};
pub use notification::{Notification, NotificationCollection, NotificationType};
pub use types::{Color, Rect, Vector2};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
