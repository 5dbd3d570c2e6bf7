pub mod charset;
pub mod generator;
pub mod options;
pub mod validate;

pub use zeroize;
