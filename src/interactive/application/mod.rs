pub mod hydration;
pub mod search_service;
