use thiserror::Error;

/// The only failures this core surfaces; everything else degrades to
/// neutral values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CteError {
    /// The buff catalog was never populated. Startup-ordering defect;
    /// fatal to any scoring call.
    #[error("buff catalog has not been loaded")]
    CatalogUnavailable,

    /// A caller supplied a host-count hint the optimizer cannot interpret.
    /// Hints of at least 1 are clamped instead.
    #[error("host count hint {0} is not a usable slot count")]
    InvalidHostCountHint(u8),
}
