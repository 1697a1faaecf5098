pub mod axis_guide;
pub mod entity;
pub mod sprite;
