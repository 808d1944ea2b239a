pub mod enumerate;
pub mod aggregate;
pub mod progress;
pub mod scanner;
pub mod attrs;

pub use enumerate::enumerate_folders;
pub use aggregate::{aggregate_sizes, folder_size, sort_records, top_records};
pub use progress::*;
pub use scanner::scan_folder_sizes;
pub use attrs::is_system_dir;
pub use folder_sizes_domain::{FolderEntry, SizeRecord, SizeReport};
