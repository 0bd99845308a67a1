mod friend;
mod money;
mod split;

pub use friend::*;
pub use money::*;
pub use split::*;
