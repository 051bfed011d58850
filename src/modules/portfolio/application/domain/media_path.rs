use rand::Rng;

/// Namespace every gallery blob is stored under.
pub const GALLERY_PREFIX: &str = "gallery";

const TOKEN_LEN: usize = 13;
const MAX_EXTENSION_LEN: usize = 16;
const FALLBACK_EXTENSION: &str = "bin";
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// `<unix millis>_<random base-36 token>.<extension>`
///
/// The extension is whatever follows the last `.` in `file_name` (a name
/// without a dot is used whole), reduced to ASCII alphanumerics so the
/// result is always a single path segment.
pub fn generate_path(file_name: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    format!("{}_{}.{}", millis, random_token(), extension_of(file_name))
}

fn extension_of(file_name: &str) -> String {
    let raw = file_name.rsplit('.').next().unwrap_or(file_name);
    let extension: String = raw
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(MAX_EXTENSION_LEN)
        .collect();
    if extension.is_empty() {
        FALLBACK_EXTENSION.to_string()
    } else {
        extension
    }
}

/// Full object key of a generated path inside the gallery namespace.
pub fn gallery_object(path: &str) -> String {
    format!("{}/{}", GALLERY_PREFIX, path)
}

fn random_token() -> String {
    let mut rng = rand::thread_rng();
    (0..TOKEN_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_keeps_the_last_extension() {
        let path = generate_path("lab.photo.JPG");

        let (stem, ext) = path.rsplit_once('.').unwrap();
        assert_eq!(ext, "JPG");

        let (millis, token) = stem.split_once('_').unwrap();
        assert!(millis.parse::<i64>().is_ok());
        assert_eq!(token.len(), TOKEN_LEN);
        assert!(token.bytes().all(|b| BASE36.contains(&b)));
    }

    #[test]
    fn name_without_dot_is_used_as_extension() {
        let path = generate_path("README");
        assert!(path.ends_with(".README"));
    }

    #[test]
    fn extension_cannot_escape_the_namespace() {
        let path = generate_path("x./../../../otherbucket/pwned");
        assert!(!path.contains('/'));
        assert_eq!(path.matches('.').count(), 1);
        assert!(path.ends_with(".otherbucketpwned"));

        assert!(generate_path("photo.png?download=1").ends_with(".pngdownload1"));
        assert!(generate_path("archive.").ends_with(".bin"));
        assert!(generate_path("weird.%2F%2E").ends_with(".2F2E"));
    }

    #[test]
    fn consecutive_paths_differ() {
        assert_ne!(generate_path("a.png"), generate_path("a.png"));
    }

    #[test]
    fn gallery_object_is_namespaced() {
        assert_eq!(gallery_object("1_abc.png"), "gallery/1_abc.png");
    }
}
