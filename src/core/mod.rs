pub mod filter;
pub mod render;
pub mod size;
pub mod walk;

pub use filter::IgnoreTokens;
pub use size::format_size;
pub use walk::{WalkOptions, walk_root};
