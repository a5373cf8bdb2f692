pub mod decode;
pub mod image_spec;
pub mod render;
pub mod server;

pub use decode::{decode, DecodeError};
pub use image_spec::ImageSpec;
pub use render::render;
pub use server::create_router;
