pub mod matching;
pub mod sort;
pub mod validate;
