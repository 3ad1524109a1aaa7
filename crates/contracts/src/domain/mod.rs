pub mod a001_pizza;
pub mod common;
