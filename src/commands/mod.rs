//! Command implementations

pub mod analyze;
pub mod simple;
pub mod solve;
pub mod solve_all;
pub mod survey;

pub use analyze::{AnalysisResult, analyze_word};
pub use simple::run_simple;
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
pub use solve_all::{SecretSelection, SolveAllStatistics, print_solve_all_statistics, run_solve_all};
pub use survey::{ChunkSpec, SurveyConfig, SurveyResult, print_survey_result, run_survey};
