//! Local lexical analysis: language profiles, the scanning engine and the
//! summary aggregator.

pub mod languages;
pub mod profile;
pub mod scanner;
pub mod summary;

pub use profile::{LanguageId, LanguageProfile, profile_for};
pub use scanner::{ScanMode, ScanState, Scanner, scan};
pub use summary::summarize;
