pub mod dataset;
pub mod image_io;
