/// User intent, decoupled from whichever UI produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneCommand {
    ZoomIn,
    ZoomOut,
    SetHour(u8),
    TogglePlay,
}

impl std::fmt::Display for SceneCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZoomIn => write!(f, "Zoom in"),
            Self::ZoomOut => write!(f, "Zoom out"),
            Self::SetHour(h) => write!(f, "Set hour {h}"),
            Self::TogglePlay => write!(f, "Toggle play"),
        }
    }
}
