//! Line-oriented text filters.
//!
//! Two small pipelines share this crate:
//!
//! - [`ChatFilter`] masks denylisted words with `*` and capitalizes the rest.
//! - [`PalindromeHighlighter`] wraps palindromic words in a marker and counts them.
//!
//! Both run normalize, tokenize, classify and transform each word, then
//! reassemble. Each line is processed independently.
//!
//! ```rust
//! use rust_text_filter::{ChatFilter, PalindromeHighlighter};
//!
//! let out = ChatFilter::default().filter("You are stupid");
//! assert_eq!(out.render(), "Final message: You Are ******");
//!
//! let out = PalindromeHighlighter::default().highlight("wow that is neat");
//! assert_eq!(out.count, 1);
//! ```

#![warn(missing_docs)]

pub mod chat;
pub mod config;
pub mod denylist;
pub mod error;
pub mod highlight;
pub mod input;
pub mod normalize;
pub mod palindrome;
#[cfg(feature = "python")]
mod python;
pub mod reassemble;
pub mod tokenize;
pub mod transform;

pub use chat::{ChatFilter, FilteredMessage, WordClass};
pub use config::{ChatConfig, PalindromeConfig};
pub use denylist::Denylist;
pub use error::{FilterError, Result};
pub use highlight::{Highlighted, PalindromeHighlighter};
