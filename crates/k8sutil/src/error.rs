use snafu::Snafu;

/// Errors raised while producing pod configuration.
///
/// Every variant here describes a defect in how this crate builds its own
/// data, never a problem with the caller's input, and is therefore
/// classified as fatal by [`Error::is_fatal`].
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Failed to serialize pod anti-affinity for {attribute}={value}, error: {source}"))]
    SerializeAffinity {
        attribute: String,
        value: String,
        source: serde_json::Error,
    },
}

impl Error {
    /// Returns `true` if the process must not continue after this error.
    ///
    /// A fatal error means the configuration handed to the cluster would be
    /// corrupted; callers are expected to abort instead of retrying or
    /// falling back.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        match self {
            Self::SerializeAffinity { .. } => true,
        }
    }
}
