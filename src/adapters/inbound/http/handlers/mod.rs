mod file_handlers;
mod health_handlers;
mod project_handlers;

pub use file_handlers::{delete_file, download_file, list_files, upload_file};
pub use health_handlers::health_check;
pub use project_handlers::{list_project_files, upload_project};
