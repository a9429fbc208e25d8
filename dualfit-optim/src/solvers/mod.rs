pub mod gd;
pub mod sgd;
