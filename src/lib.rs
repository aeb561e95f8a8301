//! langstats - Generate an animated card of your most used GitHub languages.
//!
//! Lists the authenticated user's repositories, sums the bytes GitHub
//! attributes to each language, ranks the languages by share and renders the
//! top ones as a self-contained animated SVG (or PNG).

pub mod colors;
pub mod config;
pub mod encode;
pub mod errors;
pub mod github;
pub mod pipeline;
pub mod raster;
pub mod stats;
pub mod svg;

#[cfg(feature = "cli")]
pub mod cli;
