/// Draughts domain types and rules.
pub mod draughts;
/// Assorted utilities.
pub mod util;
