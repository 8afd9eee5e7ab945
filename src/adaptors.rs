mod boxed;
mod count;
mod filter;
mod filter_map;
mod flat_map;
mod fold;
mod inspect;
mod last;
mod map;
#[cfg(feature = "itertools")]
mod min_max;
mod reduce;
mod relay;
mod scan;
mod skip;
mod stages;
mod take;
mod take_while;
mod then;
mod try_map;

pub use boxed::*;
pub use count::*;
pub use filter::*;
pub use filter_map::*;
pub use flat_map::*;
pub use fold::*;
pub use inspect::*;
pub use last::*;
pub use map::*;
#[cfg(feature = "itertools")]
pub use min_max::*;
pub use reduce::*;
pub use relay::*;
pub use scan::*;
pub use skip::*;
pub use stages::*;
pub use take::*;
pub use take_while::*;
pub use then::*;
pub use try_map::*;
