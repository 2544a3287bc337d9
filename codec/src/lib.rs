mod certificate;
mod extract;
mod input;
mod metadata;
mod mint;
mod output;
mod tx;
mod utxo;
mod validity;
mod withdrawal;
mod witness;

pub use certificate::*;
pub use extract::*;
pub use input::*;
pub use metadata::*;
pub use mint::*;
pub use output::*;
pub use tx::*;
pub use utxo::*;
pub use validity::*;
pub use withdrawal::*;
pub use witness::*;
