//! Rasterization of a parsed scene into an 8-bit RGB image.

pub mod image;
pub mod ppm;
pub mod raster;

pub use image::Image;
pub use raster::render;
