// Stoa CLI library - runner, configuration and the node front door

pub mod configuration;
pub mod node;
pub mod runner;

// Flattened re-exports
pub use self::configuration::*;
pub use self::node::*;
pub use self::runner::*;
