pub mod checker_service;
pub mod quiz_service;
