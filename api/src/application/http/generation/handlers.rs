pub mod generate;
pub mod process_image;
