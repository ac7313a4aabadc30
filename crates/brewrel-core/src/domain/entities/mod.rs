pub mod field_set;
pub mod formula;
pub mod rendered;
pub mod template;

pub use field_set::*;
pub use formula::*;
pub use rendered::*;
pub use template::*;
