pub mod error;
pub mod guard;
pub mod io;
pub mod paths;
pub mod plan;
pub mod template;
pub mod workspace;
pub mod writer;

pub use error::{Result, ScaffoldError};
