//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the traits and the entry points.
//!
//! # Example
//!
//! ```
//! use transducer::prelude::*;
//!
//! let doubled = transducer([1, 2]).run(ops::map(|x: i32| x * 2))?;
//! assert_eq!(doubled, [2, 4]);
//! # Ok::<(), Error>(())
//! ```

pub use crate::ops;
pub use crate::traits::*;
pub use crate::transducer::{Transducer, from_iter, transducer, try_from_iter};
pub use crate::{Error, Result};
