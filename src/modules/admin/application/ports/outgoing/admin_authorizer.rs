/// Answers whether a bearer token belongs to the site owner.
pub trait AdminAuthorizer: Send + Sync {
    fn is_authorized(&self, token: &str) -> bool;
}
