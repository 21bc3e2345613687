//! Client toolkit for the Khmer stop-word removal web service.
//!
//! The server segments Khmer text, filters stop words, and renders the
//! result; this crate is the client side of that exchange. It can submit
//! text for analysis, reconstruct a result from the server-rendered page
//! when no structured copy is at hand, and re-serialize results for
//! export as JSON, CSV, or a plain-text report. A terminal frequency
//! chart, a character/word counter, and the language-switch call round
//! out the toolkit.

pub mod alert;
pub mod chart;
pub mod cli;
pub mod client;
pub mod counter;
pub mod error;
pub mod export;
pub mod i18n;
pub mod model;
pub mod source;

pub use error::{Error, Result};
pub use model::{AnalysisResult, AnalysisStats};
