mod firebase_storage;
mod supabase_storage;

pub use firebase_storage::FirebaseBlobStorage;
pub use supabase_storage::SupabaseBlobStorage;
