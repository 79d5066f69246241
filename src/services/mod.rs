//! Business Logic Services

pub mod generation;
