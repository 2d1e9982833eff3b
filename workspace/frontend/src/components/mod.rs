pub mod dashboard;
pub mod feedback;
pub mod field;
pub mod optimize;
pub mod predict;
pub mod results;
pub mod tabs;
