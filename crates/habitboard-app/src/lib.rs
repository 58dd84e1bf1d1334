// Application layer - Use cases and HTTP presentation

pub mod application;
pub mod presentation;
