//! Player spawn-point layer
//!
//! The player layer is a single record: where the player spawns and what
//! color the player is drawn with. In a level file it occupies one line:
//!
//! ```text
//! 100.000000 250.000000 FF0000
//! ```

use crate::error::{LevelError, Result};
use crate::io::{decode_text, scan_player_line, LineStream};
use crate::notification::{NotificationCollection, NotificationType};
use crate::types::{Color, Rect, Vector2};
use std::io::{Read, Write};

/// Side length of the spawn-point marker, in world units
pub const PLAYER_MARKER_SIZE: f32 = 25.0;

/// Configuration for loading a player layer.
#[derive(Debug, Clone, Default)]
pub struct PlayerLayerConfiguration {
    /// When `true`, a malformed player line is an error instead of being
    /// replaced by defaults.
    ///
    /// Default: `false` (lenient).
    pub strict: bool,
}

/// Mouse buttons the editor distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Input events routed to the player layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayerEvent {
    /// The color picker reported a color. `dragging` is set while the user
    /// is still moving the slider, and the pick is not committed yet.
    ColorSelected { color: Color, dragging: bool },
    /// A mouse button was pressed at screen coordinates `(x, y)`
    MouseButtonDown { button: MouseButton, x: i32, y: i32 },
    /// Anything the player layer does not react to
    Other,
}

/// Undo record produced by player layer edits
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerLayerAction {
    RevertPosition(Vector2),
    RevertColor(Color),
}

/// Screen-space services the layer needs from the editor camera
pub trait Camera {
    /// Fill a world-space rectangle
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()>;

    /// Convert screen coordinates to world coordinates
    fn map_screen(&self, x: i32, y: i32) -> Vector2;
}

/// Sink for undo records
pub trait UndoHistory {
    fn push(&mut self, action: PlayerLayerAction);
}

impl UndoHistory for Vec<PlayerLayerAction> {
    fn push(&mut self, action: PlayerLayerAction) {
        Vec::push(self, action);
    }
}

/// Editable player spawn point
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerLayer {
    pub position: Vector2,
    pub color: Color,
    /// Last committed color, restored by a color undo
    prev_color: Color,
}

impl PlayerLayer {
    pub fn new(position: Vector2, color: Color) -> Self {
        Self {
            position,
            color,
            prev_color: color,
        }
    }

    /// Last committed color
    pub fn prev_color(&self) -> Color {
        self.prev_color
    }

    /// Load the layer from the next line of `line_stream`, leniently
    pub fn from_line_stream<R: Read>(
        line_stream: &mut LineStream<R>,
        notifications: &mut NotificationCollection,
    ) -> Result<Self> {
        Self::from_line_stream_with(
            line_stream,
            &PlayerLayerConfiguration::default(),
            notifications,
        )
    }

    /// Load the layer from the next line of `line_stream`.
    ///
    /// A line that does not bind all three tokens, or whose color is not hex,
    /// yields position `(0, 0)` and color `000000` with a warning, unless the
    /// configuration is strict.
    pub fn from_line_stream_with<R: Read>(
        line_stream: &mut LineStream<R>,
        config: &PlayerLayerConfiguration,
        notifications: &mut NotificationCollection,
    ) -> Result<Self> {
        let line = match line_stream.next_line()? {
            Some(line) => decode_text(line).into_owned(),
            None => {
                return Err(LevelError::UnexpectedEof(
                    "expected a player layer line".to_string(),
                ))
            }
        };

        let scan = scan_player_line(&line);
        let parsed = match (scan.x, scan.y, scan.color.as_deref()) {
            (Some(x), Some(y), Some(hex)) => Color::from_hex(hex)
                .map(|color| (Vector2::new(x, y), color))
                .map_err(|e| e.to_string()),
            _ => Err(format!(
                "Could not read Player Layer properly. Parsed tokens: {}. Expected: {}",
                scan.bound(),
                crate::io::scan::PLAYER_TOKENS
            )),
        };

        match parsed {
            Ok((position, color)) => Ok(Self::new(position, color)),
            Err(message) if config.strict => Err(LevelError::Parse(format!(
                "line {}: {}",
                line_stream.line_number(),
                message
            ))),
            Err(message) => {
                notifications.notify(
                    NotificationType::Warning,
                    format!("line {}: {}", line_stream.line_number(), message),
                );
                Ok(Self::default())
            }
        }
    }

    /// Write the layer as one `x y RRGGBB` line.
    ///
    /// Coordinates are written with six decimal places, so a position with
    /// finer detail reloads rounded to the nearest millionth.
    pub fn dump_stream<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(
            writer,
            "{:.6} {:.6} {}",
            self.position.x,
            self.position.y,
            self.color.to_hex()
        )?;
        Ok(())
    }

    /// Draw the spawn marker; inactive layers are drawn half transparent
    pub fn render(&self, camera: &mut dyn Camera, active: bool) -> Result<()> {
        let alpha = if active { 1.0 } else { 0.5 };
        camera.fill_rect(
            Rect::from_vecs(
                self.position,
                Vector2::new(PLAYER_MARKER_SIZE, PLAYER_MARKER_SIZE),
            ),
            self.color.scale(Color::rgba(1.0, 1.0, 1.0, alpha)),
        )
    }

    /// React to an editor event, recording undo actions for every change
    pub fn handle_event(
        &mut self,
        event: &LayerEvent,
        camera: &dyn Camera,
        undo_history: &mut dyn UndoHistory,
    ) -> Result<()> {
        match *event {
            LayerEvent::ColorSelected { color, dragging } => {
                self.color = color;
                if !dragging {
                    undo_history.push(PlayerLayerAction::RevertColor(self.prev_color));
                    self.prev_color = color;
                }
            }
            LayerEvent::MouseButtonDown {
                button: MouseButton::Left,
                x,
                y,
            } => {
                undo_history.push(PlayerLayerAction::RevertPosition(self.position));
                self.position = camera.map_screen(x, y);
            }
            _ => {}
        }
        Ok(())
    }

    /// Apply an undo record
    pub fn revert(&mut self, action: PlayerLayerAction) {
        match action {
            PlayerLayerAction::RevertPosition(position) => self.position = position,
            PlayerLayerAction::RevertColor(color) => {
                self.color = color;
                self.prev_color = color;
            }
        }
    }
}

impl Default for PlayerLayer {
    fn default() -> Self {
        Self::new(Vector2::ZERO, Color::BLACK)
    }
}
