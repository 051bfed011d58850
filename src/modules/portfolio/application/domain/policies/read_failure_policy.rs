use std::str::FromStr;

/// What a public list read does when the backend fails.
///
/// `EmptyOnError` makes "fetch failed" indistinguishable from "no records";
/// the failure only shows up in the logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadFailurePolicy {
    #[default]
    EmptyOnError,
    Propagate,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown read failure policy '{0}' (expected 'empty' or 'propagate')")]
pub struct UnknownReadFailurePolicy(pub String);

impl FromStr for ReadFailurePolicy {
    type Err = UnknownReadFailurePolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "empty" | "empty_on_error" => Ok(ReadFailurePolicy::EmptyOnError),
            "propagate" => Ok(ReadFailurePolicy::Propagate),
            other => Err(UnknownReadFailurePolicy(other.to_string())),
        }
    }
}
