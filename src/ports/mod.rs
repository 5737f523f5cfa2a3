pub mod services;
pub mod storage;

pub use services::FileService;
pub use storage::ObjectStore;
