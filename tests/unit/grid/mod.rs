pub mod cell;
pub mod matrix;
