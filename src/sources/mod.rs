pub mod json_file;
pub mod supabase;
pub mod traits;
pub mod types;

pub use json_file::JsonFileSource;
pub use supabase::SupabaseSource;
pub use traits::PropertySource;
pub use types::FetchParams;
