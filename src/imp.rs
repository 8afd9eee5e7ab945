mod fallible;
mod one_shot;
mod reusable;

pub use fallible::*;
pub use one_shot::*;
pub use reusable::*;
