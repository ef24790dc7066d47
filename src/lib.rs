//! Word Duel
//!
//! Ranks two words against each other for a turn-based word game. Each word
//! falls into one of six categories; the higher category wins, and words in
//! the same category are separated by that category's tie-break rule.
//!
//! # Quick Start
//!
//! ```rust
//! use std::cmp::Ordering;
//! use word_duel::core::{Category, classify, compare};
//!
//! let first = classify("aaaaa");
//! let second = classify("hello");
//! assert_eq!(first.category(), Category::Quintessential);
//! assert_eq!(compare(&first, &second), Ordering::Greater);
//! ```

// Core domain types
pub mod core;

// Reading words and pairs
pub mod input;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
