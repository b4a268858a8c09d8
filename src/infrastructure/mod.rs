pub mod ai;
pub mod client;
pub mod image_processing;
