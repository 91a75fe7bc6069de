pub mod common;
pub mod generation;
pub mod health;
pub mod image;
pub mod rendering;
pub mod submission;
