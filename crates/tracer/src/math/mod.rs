pub mod float;
pub mod vec;
