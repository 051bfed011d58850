mod sha256_authorizer;

pub use sha256_authorizer::Sha256DigestAuthorizer;
