pub(super) const DEFAULT_MODEL: &str = "en_US-kristin-medium.onnx";
pub(super) const DEFAULT_PYTHON_CMD: &str = "python3";
pub(super) const DEFAULT_PLAYER_CMD: &str = "afplay";

pub const DEFAULT_SPEED: f32 = 1.0;
pub const DEFAULT_VOLUME: f32 = 1.0;
pub const DEFAULT_SENTENCE_SILENCE: f32 = 0.3;

pub const MIN_SPEED: f32 = 0.25;
pub const MAX_SPEED: f32 = 4.0;
pub const MAX_VOLUME: f32 = 2.0;
pub const MAX_SENTENCE_SILENCE: f32 = 5.0;
