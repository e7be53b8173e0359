// ============================================================================
// FILTERS MODULE - Formateadores numéricos para las vistas
// ============================================================================

pub mod number;
pub mod format;
pub mod registry;

pub use number::*;
pub use format::*;
pub use registry::*;
