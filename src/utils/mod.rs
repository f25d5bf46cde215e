pub mod coordinate;
pub mod image;
pub mod viewer;
