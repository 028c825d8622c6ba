mod error;
mod policy;

pub use error::*;
pub use policy::*;
