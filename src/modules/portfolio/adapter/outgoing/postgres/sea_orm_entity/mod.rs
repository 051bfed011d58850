pub mod admin_roles;
pub mod awards;
pub mod events;
pub mod gallery;
pub mod grants;
pub mod patents;
pub mod profile;
pub mod publications;
