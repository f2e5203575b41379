//! The search coordinator: runs the three axis scanners for a word in parallel.
//!
//! # Error Handling
//!
//! Construction uses [`SearchError`] with two variants:
//!
//! - S001: `InvalidThreadCount` (Worker count is zero)
//! - S002: `ThreadPool` (Worker pool could not be started (wraps `rayon::ThreadPoolBuildError`))
//!
//! Searching itself cannot fail: a word that is not in the grid is an ordinary
//! outcome (`found == false`).
//!
//! # Concurrency
//!
//! Each coordinator owns a fixed-size rayon pool. For every word it forks exactly one
//! task per axis family inside a `scope` and joins all three before returning, so words
//! are processed strictly one after another while the axes of a word run in parallel.
//! The grid is shared read-only; the [`MatchSink`] is the only shared mutable state.
//! Records from different axes may interleave in any order.
//!
//! # Examples
//!
//! ```
//! use wordgrid::coordinator::{SearchConfig, SearchCoordinator};
//! use wordgrid::grid::Grid;
//! use wordgrid::sink::CollectingSink;
//!
//! let grid = Grid::from_lines(&["XCATX", "XXXXX"]);
//! let coordinator = SearchCoordinator::new(SearchConfig::new(3)?)?;
//! let sink = CollectingSink::new();
//!
//! let outcome = coordinator.search(&grid, "CAT", &sink);
//! assert!(outcome.found);
//! assert_eq!(sink.records()[0].to_string(), "Word 'CAT' found in row 1, starting at column 2 (horizontal)");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::errors::format_error_with_code_and_help;
use crate::grid::Grid;
use crate::orientation::Orientations;
use crate::record::Axis;
use crate::scanner::scan;
use crate::sink::MatchSink;
use log::{debug, info};
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Default worker count: one per axis family.
pub const DEFAULT_THREADS: usize = Axis::ALL.len();

/// Unified error type for setting up a search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The configured worker count was zero.
    #[error("invalid thread count: {value} (must be a positive integer)")]
    InvalidThreadCount { value: usize },

    /// The worker pool could not be created.
    #[error("failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl SearchError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SearchError::InvalidThreadCount { .. } => "S001",
            SearchError::ThreadPool(_) => "S002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SearchError::InvalidThreadCount { .. } => "Worker count is zero",
            SearchError::ThreadPool(_) => "Worker pool could not be started",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SearchError::InvalidThreadCount { .. } => "The number of worker threads must be a positive integer. The run is aborted before the puzzle is read.",
            SearchError::ThreadPool(_) => "The operating system refused to create the worker threads for the search pool.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SearchError::InvalidThreadCount { .. } => Some("Pass a thread count of 1 or more, e.g. 'wordgrid puzzle.txt 3'"),
            SearchError::ThreadPool(_) => Some("Try a smaller thread count"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Validated search configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    threads: NonZeroUsize,
}

impl SearchConfig {
    /// # Errors
    ///
    /// Returns `SearchError::InvalidThreadCount` if `threads` is zero.
    pub fn new(threads: usize) -> Result<SearchConfig, SearchError> {
        NonZeroUsize::new(threads)
            .map(|threads| SearchConfig { threads })
            .ok_or(SearchError::InvalidThreadCount { value: threads })
    }

    #[must_use]
    pub fn threads(&self) -> usize {
        self.threads.get()
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig { threads: NonZeroUsize::new(DEFAULT_THREADS).unwrap_or(NonZeroUsize::MIN) }
    }
}

/// Result of searching one word across all three axes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub word: String,
    /// At least one match on any axis.
    pub found: bool,
    per_axis: [usize; 3],
}

impl SearchOutcome {
    /// Number of matches reported on `axis`.
    #[must_use]
    pub fn matches_on(&self, axis: Axis) -> usize {
        self.per_axis[axis.index()]
    }

    /// Total number of matches across all axes.
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.per_axis.iter().sum()
    }
}

/// Runs searches on a dedicated, fixed-size worker pool.
#[derive(Debug)]
pub struct SearchCoordinator {
    pool: rayon::ThreadPool,
    config: SearchConfig,
}

impl SearchCoordinator {
    /// Start the worker pool.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::ThreadPool` if the threads cannot be spawned.
    pub fn new(config: SearchConfig) -> Result<SearchCoordinator, SearchError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads())
            .thread_name(|i| format!("wordgrid-scan-{i}"))
            .build()?;
        debug!("Search pool started with {} threads", config.threads());
        Ok(SearchCoordinator { pool, config })
    }

    #[must_use]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Search one word on all three axes concurrently and report every match to `sink`.
    ///
    /// Blocks until all three scans have covered their whole index range.
    pub fn search<S: MatchSink + ?Sized>(&self, grid: &Grid, word: &str, sink: &S) -> SearchOutcome {
        let pattern = Orientations::new(word);
        let counts: [AtomicUsize; 3] = Default::default();

        self.pool.scope(|scope| {
            for axis in Axis::ALL {
                let (pattern, counts) = (&pattern, &counts);
                scope.spawn(move |_| {
                    let n = scan(axis, grid, pattern).inspect(|record| sink.report(record)).count();
                    counts[axis.index()].store(n, Ordering::Relaxed);
                    debug!("'{}' {axis}: {n} matches", pattern.word());
                });
            }
        });

        let per_axis = counts.map(AtomicUsize::into_inner);
        let outcome = SearchOutcome {
            word: word.to_string(),
            found: per_axis.iter().any(|&n| n > 0),
            per_axis,
        };
        info!("'{word}': {} matches", outcome.match_count());
        outcome
    }

    /// Search every word in order, one word at a time.
    pub fn search_all<W, S>(&self, grid: &Grid, words: &[W], sink: &S) -> Vec<SearchOutcome>
    where
        W: AsRef<str>,
        S: MatchSink + ?Sized,
    {
        words.iter().map(|word| self.search(grid, word.as_ref(), sink)).collect()
    }
}
