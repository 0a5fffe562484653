// Application layer - Section catalog and dashboard use cases
pub mod catalog;
pub mod dashboard_service;
pub mod error;
