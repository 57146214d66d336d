mod file;
pub use file::*;
mod json;
pub use json::*;
mod number;
pub use number::*;
