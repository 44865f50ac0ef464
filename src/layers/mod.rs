//! Editable level layers

mod player_layer;

pub use player_layer::{
    Camera, LayerEvent, MouseButton, PlayerLayer, PlayerLayerAction, PlayerLayerConfiguration,
    UndoHistory, PLAYER_MARKER_SIZE,
};
