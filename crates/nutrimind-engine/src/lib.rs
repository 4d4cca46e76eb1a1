pub mod analysis;
pub mod logistics;
pub mod rendering;
pub mod triggers;

// Re-export key types for easier usage
pub use analysis::{
    AnalysisError, AnalysisRequest, AnalysisResponse, AnalysisResults, RenderedResults,
    render_page, render_results, render_results_with_markers, user_message,
};
pub use logistics::{
    LOGISTICS_MARKERS, extract_section, render_logistics, render_logistics_with_markers,
};
pub use rendering::{blocks::build_table, render_recommendation};
pub use triggers::render_triggers;
