pub mod countdown;
pub mod timer;
pub mod upload_service;
pub mod wish_service;
