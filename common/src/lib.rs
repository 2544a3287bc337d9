// Stoa common library - main library exports

pub mod asset;
pub mod files;
pub mod tx;
pub mod validation;

// Flattened re-exports
pub use self::asset::*;
pub use self::files::*;
pub use self::tx::*;
pub use self::validation::*;
