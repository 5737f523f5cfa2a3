mod file_service_impl;
pub mod retry;

pub use file_service_impl::FileServiceImpl;
pub use retry::RetryPolicy;
