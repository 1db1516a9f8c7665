pub mod error;
pub mod settings;
pub mod traits;

pub use error::{BezError, Result};
pub use settings::ProjectionSettings;
pub use traits::{BoundingBox, SquaredDistance, Validate};
