pub mod camera;
pub mod pins;
