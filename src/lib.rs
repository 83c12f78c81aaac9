//! Car recommendation core: catalog loading, buyer criteria filtering and
//! table sorting, plus the toolkit-independent UI state that drives them.

pub mod data;
pub mod state;
