//! Localize remote web fonts referenced by a CSS stylesheet.
//!
//! [`localizer::Localizer`] drives a run; the other modules are its parts.

pub mod config;
pub mod logging;

pub mod extract;
pub mod fetch;
pub mod localizer;
pub mod rewrite;
pub mod storage;
pub mod url_model;
