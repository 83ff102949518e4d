pub mod controller;
pub mod drag;
pub mod journal;
pub mod mapper;
pub mod renderer;

pub use controller::{GridOptions, LogGridController, PointerHandler};
pub use drag::{DragEditor, DragRange, ReverseDrag, SlotEdit};
pub use mapper::{CoordinateMapper, Point};
pub use renderer::{DutyLine, LineStyle, Segment, Stroke};
