//! Error type for reads that require a present value.

/// The error returned by [`try_value`](crate::try_value) when the pointer is
/// absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NullError;

impl core::fmt::Display for NullError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("dereferenced a null pointer")
    }
}

impl std::error::Error for NullError {}
