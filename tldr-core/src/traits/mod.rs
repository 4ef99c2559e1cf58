mod rank_solver;
mod summarizer;

pub use rank_solver::IRankSolver;
pub use summarizer::ISummarizer;
