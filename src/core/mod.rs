/// Core functionality modules
///
/// Contains the pure parts of the wizard: turning settings into a
/// command line and wrapping it in an alias.

pub mod alias;
pub mod serializer;

pub use alias::{build_alias, PROGRAM_NAME};
pub use serializer::{quote, serialize, Settings, Value};
