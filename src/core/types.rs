use serde::{Deserialize, Serialize};

/// Pixel size of the drawable area, pushed in by the host on resize.
///
/// A zero-sized viewport is a legal state (hosts report it while a widget is
/// collapsed); rendering simply produces nothing for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}
