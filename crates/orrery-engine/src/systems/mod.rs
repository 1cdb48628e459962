pub mod lines;
pub mod picking;
pub mod render;
