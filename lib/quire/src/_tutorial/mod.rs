//! # Tutorial: Encoding Query Parameters with quire
//!
//! Learn to turn Rust values into query strings step by step.
//!
//! ## Chapters
//!
//! 1. [Getting Started][chapter_0] - Your first query struct
//! 2. [Field Tags][chapter_1] - Names, omitempty, sequences, times
//! 3. [Nesting][chapter_2] - Scopes, inline, flatten, maps
//! 4. [Extending][chapter_3] - Custom encoders, configuration, errors
//!
//! Ready? Start with [Chapter 0: Getting Started][chapter_0].

pub mod chapter_0;
pub mod chapter_1;
pub mod chapter_2;
pub mod chapter_3;
