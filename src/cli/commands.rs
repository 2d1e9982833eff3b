pub mod check;
pub mod optimize;
pub mod predict;
pub mod serve;

pub use check::check;
pub use optimize::{optimize, OptimizeArgs};
pub use predict::{predict, PredictArgs};
pub use serve::serve;
