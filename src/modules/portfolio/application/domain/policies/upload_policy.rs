/// Limits applied to gallery uploads before anything reaches blob storage.
#[derive(Debug, Clone)]
pub struct GalleryUploadPolicy {
    pub max_file_size_bytes: usize,
    pub max_file_name_len: usize,
}

impl GalleryUploadPolicy {
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: usize = 5 * 1024 * 1024;
    const MIME_PREFIX: &'static str = "image/";

    pub fn new(max_file_size_bytes: usize) -> Self {
        Self {
            max_file_size_bytes,
            max_file_name_len: 255,
        }
    }

    pub fn accepts_content_type(&self, content_type: &str) -> bool {
        content_type
            .trim()
            .to_ascii_lowercase()
            .starts_with(Self::MIME_PREFIX)
    }
}

impl Default for GalleryUploadPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_FILE_SIZE_BYTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_image_content_types_are_accepted() {
        let policy = GalleryUploadPolicy::default();
        assert!(policy.accepts_content_type("image/png"));
        assert!(policy.accepts_content_type("Image/WEBP"));
        assert!(!policy.accepts_content_type("application/pdf"));
        assert_eq!(policy.max_file_size_bytes, 5 * 1024 * 1024);
    }
}
