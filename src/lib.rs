pub mod adapter;
pub mod application;
pub mod domain;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;
