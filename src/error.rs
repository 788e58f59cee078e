use thiserror::Error;

/// Everything that can go wrong between the sheet URL and a loaded `Table`.
///
/// A station code that matches nothing is not an error; see
/// [`crate::view::StationLookup::NotFound`].
#[derive(Error, Debug)]
pub enum PortalError {
    #[error("sheet unavailable at {url}: {source}")]
    SourceUnavailable {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("sheet is missing required column `{column}`")]
    MissingColumn { column: String },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl PortalError {
    pub fn unavailable(
        url: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        PortalError::SourceUnavailable {
            url: url.into(),
            source: source.into(),
        }
    }

    #[cfg(test)]
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, PortalError::SourceUnavailable { .. })
    }
}

pub type Result<T, E = PortalError> = std::result::Result<T, E>;
