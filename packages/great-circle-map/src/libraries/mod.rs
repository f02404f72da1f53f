pub mod map_renderer;
pub mod page;
