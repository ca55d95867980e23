//!
//! Traits Module
//!
//! - [`policy`]: the strategy trait every scoring formula implements.

pub mod policy;
