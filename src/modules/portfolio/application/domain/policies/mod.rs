mod read_failure_policy;
mod upload_policy;

pub use read_failure_policy::{ReadFailurePolicy, UnknownReadFailurePolicy};
pub use upload_policy::GalleryUploadPolicy;
