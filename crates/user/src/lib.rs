mod query;
mod root;
mod subscription;

pub use query::*;
pub use root::*;
pub use subscription::*;
