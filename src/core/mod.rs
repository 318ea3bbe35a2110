pub mod bounds;
pub mod coordinate_mapper;
pub mod sample_window;
pub mod types;

pub use bounds::ScaleBounds;
pub use coordinate_mapper::CoordinateMapper;
pub use sample_window::{SampleWindow, WindowSnapshot};
pub use types::Viewport;
