mod operator;
mod sink;
mod source;

pub use operator::*;
pub use sink::*;
pub use source::*;
