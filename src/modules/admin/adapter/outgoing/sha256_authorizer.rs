use crate::admin::application::{
    ports::outgoing::AdminAuthorizer, services::token_digest::digest_token,
};

/// Authorizes a token whose SHA-256 digest matches the configured one.
#[derive(Debug, Clone)]
pub struct Sha256DigestAuthorizer {
    expected_digest: String,
}

impl Sha256DigestAuthorizer {
    pub fn from_digest(hex_digest: &str) -> Self {
        Self {
            expected_digest: hex_digest.trim().to_ascii_lowercase(),
        }
    }

    pub fn from_token(token: &str) -> Self {
        Self {
            expected_digest: digest_token(token),
        }
    }
}

impl AdminAuthorizer for Sha256DigestAuthorizer {
    fn is_authorized(&self, token: &str) -> bool {
        !token.is_empty() && digest_token(token) == self.expected_digest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_the_matching_token() {
        let authorizer = Sha256DigestAuthorizer::from_token("owner-secret");

        assert!(authorizer.is_authorized("owner-secret"));
        assert!(!authorizer.is_authorized("owner-secret "));
        assert!(!authorizer.is_authorized(""));
    }

    #[test]
    fn configured_digest_is_case_insensitive() {
        let digest = digest_token("owner-secret").to_ascii_uppercase();
        let authorizer = Sha256DigestAuthorizer::from_digest(&format!(" {digest}\n"));

        assert!(authorizer.is_authorized("owner-secret"));
    }
}
