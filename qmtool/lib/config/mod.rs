//! Configuration types and helpers.

mod defaults;
mod env;
mod overrides;
mod tool;

//--------------------------------------------------------------------------------------------------
// Exports
//--------------------------------------------------------------------------------------------------

pub use defaults::*;
pub use env::*;
pub use overrides::*;
pub use tool::*;
