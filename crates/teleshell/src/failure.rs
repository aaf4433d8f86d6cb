//! Normalizing invocation failures.
//!
//! Errors raised while calling a service are caught exactly once. A DNS
//! lookup failure buried in the source chain is re-reported in terms of the
//! endpoint the caller configured, because the raw socket error says nothing
//! about which region or endpoint was involved. Everything else is passed on
//! unchanged. Either way the caller receives a [`CommandFailure`].

use crate::Error;

/// The endpoint a command was configured to reach, for diagnostics.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Endpoint {
    pub region: Option<String>,
    pub url: Option<String>,
}

impl core::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let region = self.region.as_deref().unwrap_or("<unset>");
        match &self.url {
            Some(url) => write!(f, "endpoint '{url}' in region '{region}'"),
            None => write!(f, "the default endpoint for region '{region}'"),
        }
    }
}

/// Text fragments that DNS resolvers put in their errors.
const NAME_RESOLUTION_MARKERS: &[&str] = &[
    "dns error",
    "failed to lookup address",
    "name or service not known",
    "nodename nor servname provided",
    "no such host is known",
    "temporary failure in name resolution",
];

fn mentions_name_resolution(text: &str) -> bool {
    let text = text.to_lowercase();
    NAME_RESOLUTION_MARKERS
        .iter()
        .any(|marker| text.contains(marker))
}

/// Returns whether any error in the chain is a name-resolution failure.
pub fn is_name_resolution_failure(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| {
        if let Some(io) = cause.downcast_ref::<std::io::Error>() {
            if mentions_name_resolution(&io.to_string()) {
                return true;
            }
        }
        mentions_name_resolution(&cause.to_string())
            || mentions_name_resolution(&format!("{cause:?}"))
    })
}

/// Wrap an error raised by a service call.
pub fn normalize(command: &'static str, endpoint: &Endpoint, source: anyhow::Error) -> Error {
    if is_name_resolution_failure(&source) {
        log::debug!("{command} hit a name resolution failure: {source:#}");
        Error::NameResolution {
            command,
            endpoint: endpoint.clone(),
            source,
        }
    } else {
        Error::Invoke { command, source }
    }
}

/// Broad classification of a failure, for callers deciding what to do next.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum Category {
    ConnectionError,
    InvalidArgument,
    InvalidOperation,
    OperationStopped,
    WriteError,
}

impl From<&Error> for Category {
    fn from(error: &Error) -> Self {
        match error {
            Error::NameResolution { .. } => Category::ConnectionError,
            Error::Cancelled { .. } => Category::OperationStopped,
            Error::Select { .. }
            | Error::Serialize { .. }
            | Error::ConfigRead { .. }
            | Error::ConfigParse { .. } => Category::InvalidArgument,
            Error::Invoke { .. } => Category::InvalidOperation,
            Error::Output { .. } => Category::WriteError,
        }
    }
}

/// A failed command, reported to the caller instead of aborting the process.
///
/// The original [`Error`] is kept for inspection.
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommandFailure {
    pub command: &'static str,
    pub category: Category,
    pub message: String,
    #[serde(skip)]
    pub error: Error,
}

impl CommandFailure {
    pub fn new(command: &'static str, error: Error) -> Self {
        Self {
            command,
            category: Category::from(&error),
            message: error.to_string(),
            error,
        }
    }
}

impl core::fmt::Display for CommandFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.command, self.message)
    }
}

impl std::error::Error for CommandFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
