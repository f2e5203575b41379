//! Parallel word-search engine: finds words horizontally, vertically and diagonally in
//! a letter grid, accepting forward and mirrored spellings, with wraparound on rows and
//! columns.
pub mod coordinator;
pub mod errors;
pub mod grid;
pub mod log;
pub mod orientation;
pub mod puzzle;
pub mod record;
pub mod scanner;
pub mod sink;
