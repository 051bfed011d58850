mod add_record;
mod delete_gallery_image;
mod delete_record;
mod get_profile;
mod list_records;
mod update_record;
mod upload_gallery_image;
mod upsert_profile;

pub use add_record::{AddRecordError, AddRecordUseCase};
pub use delete_gallery_image::{DeleteGalleryImageError, DeleteGalleryImageUseCase};
pub use delete_record::{DeleteRecordError, DeleteRecordUseCase};
pub use get_profile::{GetProfileError, GetProfileUseCase};
pub use list_records::{ListRecordsError, ListRecordsUseCase};
pub use update_record::{UpdateRecordError, UpdateRecordUseCase};
pub use upload_gallery_image::{
    UploadGalleryImageCommand, UploadGalleryImageCommandError, UploadGalleryImageError,
    UploadGalleryImageUseCase,
};
pub use upsert_profile::{UpsertProfileError, UpsertProfileUseCase};
