pub mod emission;
pub mod error;
pub mod filesystem;
pub mod options;
pub mod result;
pub mod writer;

pub use emission::*;
pub use error::*;
pub use filesystem::*;
pub use options::*;
pub use result::*;
pub use writer::*;
