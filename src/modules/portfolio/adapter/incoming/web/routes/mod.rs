mod profile;
mod records;
mod upload_gallery_image;

pub use profile::{__path_get_profile_handler, __path_upsert_profile_handler};
pub use profile::{get_profile_handler, upsert_profile_handler};
pub use records::{configure_collections, PortfolioCollection};
pub use upload_gallery_image::__path_upload_gallery_image_handler;
pub use upload_gallery_image::{upload_gallery_image_handler, UploadGalleryImageQuery};
