//! Route modules

pub mod pages;
pub mod posts;
