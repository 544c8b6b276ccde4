//! chronicle library
//!
//! Pure derivations over a blog's post catalog: tag filtering, sorting,
//! "load more" pagination, search with highlighting and related posts.
//! Rendering is left to the caller.

pub mod catalog;
pub mod config;
