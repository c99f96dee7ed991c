pub mod add;
pub mod remove;
pub mod search;

pub use add::*;
pub use remove::*;
pub use search::*;
