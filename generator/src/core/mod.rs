//! Pure generation logic: prompts, candidate ordering, extraction, checks and the fallback loop

pub mod candidates;
pub mod extractor;
pub mod fallback;
pub mod prompt;
pub mod validator;

pub use candidates::merge_candidates;
pub use extractor::extract_json;
pub use fallback::{AttemptOutcome, Event, FallbackLoop, FallbackOutcome, LoopState, next_state};
pub use prompt::{
    Clock, DEFAULT_ROADMAP_ITEM_ESTIMATE, DEFAULT_TRAIL_DAYS, DayBucket, PromptBuilder, RoadmapConstraints, TimeHorizon,
    trail_activities_per_day,
};
pub use validator::{StructuralCheck, parse_artifact};
