//! Client-side state for the projects section of the portfolio page.

pub mod browser;
pub mod source;
