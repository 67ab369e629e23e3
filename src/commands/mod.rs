//! Command implementations

pub mod analyze;
pub mod check;
pub mod simple;

pub use analyze::{AnalysisResult, AnalyzeError, analyze_guess};
pub use check::{CheckError, CheckResult, check_guess};
pub use simple::{SimpleError, play_simple, run_simple};
