mod refs;

pub use refs::{IdName, PersonRef};
