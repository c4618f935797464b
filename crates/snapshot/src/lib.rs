mod env;
mod error;
mod facet;
mod probe;
mod snapshot;

pub use env::*;
pub use error::*;
pub use facet::*;
pub use probe::*;
pub use snapshot::*;
