pub mod entities;
pub mod media_path;
pub mod patch_field;
pub mod policies;
pub mod profile;
pub mod record;
