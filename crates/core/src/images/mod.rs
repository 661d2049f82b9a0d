//! Goal photos: the encoded image reference and the file encoder.

mod image_encoder;
mod image_model;

pub use image_encoder::{DataUrlImageEncoder, ImageEncoder};
pub use image_model::ImageRef;
