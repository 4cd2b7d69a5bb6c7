//! # sql-dump-trim
//!
//! `sql-dump-trim` streams MySQL dump files one line at a time, so multi-gigabyte dumps are
//! handled in constant memory.
//!
//! ## Main Functionalities
//!
//! - **Table Census**: Count INSERT statements per table and rank the largest tables. See the [`census`] module for more information.
//! - **Rewriting**: Copy a dump with INSERT rows split one per line and the INSERT statements of selected tables left out. See the [`rewriter`] module for more information.
//! - **Timestamp Normalization**: Drop the `(6)` precision from `TIMESTAMP(6)` columns. See the [`normalizer`] module for more information.
//! - **Row Splitting**: Put each row of a multi-row INSERT on its own line. See the [`formatter`] module for more information.
//!
//! ## Quick Start
//!
//! ```rust
//! use sql_dump_trim::RewriteOptions;
//!
//! let dump = "CREATE TABLE `t1` (`at` TIMESTAMP(6));\nINSERT INTO `t1` VALUES ('a'),('b');\n";
//! let mut output = Vec::new();
//! sql_dump_trim::rewrite(dump.as_bytes(), &mut output, &RewriteOptions::new()).unwrap();
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "CREATE TABLE `t1` (`at` TIMESTAMP);\nINSERT INTO `t1` VALUES ('a'),\n\t('b');\n"
//! );
//! ```

pub mod census;
pub mod classifier;
pub mod error;
pub mod formatter;
mod helper;
pub mod normalizer;
pub mod rewriter;

pub use census::*;
pub use classifier::*;
pub use formatter::*;
pub use normalizer::*;
pub use rewriter::*;

#[doc(hidden)]
// Internal module for testing. Made public for use in integration tests.
pub mod test_utils;
