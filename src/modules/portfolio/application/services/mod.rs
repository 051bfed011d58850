mod add_record_service;
mod delete_gallery_image_service;
mod delete_record_service;
mod get_profile_service;
mod list_records_service;
mod update_record_service;
mod upload_gallery_image_service;
mod upsert_profile_service;

pub use add_record_service::AddRecordService;
pub use delete_gallery_image_service::DeleteGalleryImageService;
pub use delete_record_service::DeleteRecordService;
pub use get_profile_service::GetProfileService;
pub use list_records_service::ListRecordsService;
pub use update_record_service::UpdateRecordService;
pub use upload_gallery_image_service::UploadGalleryImageService;
pub use upsert_profile_service::UpsertProfileService;
