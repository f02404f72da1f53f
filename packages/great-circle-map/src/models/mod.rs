pub mod location;
pub mod requests;

// Re-export commonly used types
pub use location::{Coordinate, Route};
pub use requests::{MapForm, MapPage, PlaceResult};
