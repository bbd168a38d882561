pub mod portfolio;
pub mod profile;
pub mod project;
pub mod skill;
