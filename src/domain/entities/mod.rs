pub mod id;
pub mod profile;
pub mod project;
pub mod skill;
