pub mod admin_authorizer;

pub use admin_authorizer::AdminAuthorizer;
