pub mod markup_service;
pub mod notification;
pub mod task_service;
