//! # Lambda Lesson
//!
//! Closure basics: small unary functions written both as named `fn` items and
//! as closures, applied to a fixed list of integers with `map` and `filter`.
//!
//! ## Modules
//!
//! - [`lambdas`]: the six functions in both forms
//! - [`evaluator`]: `NumberList` with order-preserving `map`/`filter`
//! - [`transcript`]: the labeled results of one run and their rendering
//! - [`config`]: optional `lambda_lesson.toml` settings
//! - [`logging`]: `tracing` setup (stderr only)

pub mod config;
pub mod error;
pub mod evaluator;
pub mod lambdas;
pub mod logging;
pub mod transcript;

pub use config::{ConfigSource, Language, Settings};
pub use error::{LessonError, Result};
pub use evaluator::NumberList;
pub use transcript::{Label, Line, Value};
