mod command;
mod controller;
mod playback;
mod surface;

pub use command::SceneCommand;
pub use controller::{SceneController, SceneOptions};
pub use playback::{PlaybackDriver, PlaybackEnd, PlaybackState};
pub use surface::{BaseDraw, NullSurface, OverlayDraw, PresentationSurface, BASE_ROTATION_DEGREES};
