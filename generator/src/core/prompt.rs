//! Prompt construction and structural constraint derivation
//!
//! Pure code: no I/O. The numeric constraints stated in a prompt are hints to
//! the model; only the roadmap item ceiling is enforced afterwards, by the
//! validator.

use std::fmt;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use shared::{
    ArtifactKind, EducationalRoadmapRequest, EducationalTrailRequest, GenerationRequest, KeyResultsRequest,
    RoadmapRequest, TopicsRequest,
};

use crate::types::{BuiltPrompt, CountRange, PromptContext};

/// Total item estimate stated in a roadmap prompt when no day budget is given
pub const DEFAULT_ROADMAP_ITEM_ESTIMATE: u32 = 30;

/// Trail length used when the caller gives no day budget
pub const DEFAULT_TRAIL_DAYS: u32 = 12;

/// Category/item policy for one roadmap request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoadmapConstraints {
    pub categories: CountRange,
    pub items_per_category: CountRange,
    /// Total items stated to the model as the maximum
    pub item_estimate: u32,
    pub bucket: DayBucket,
}

/// Discrete `available_days` range mapping to a fixed policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayBucket {
    Unbounded,
    Short,
    Medium,
    Extended,
    Long,
}

impl RoadmapConstraints {
    /// Derive the policy for a day budget (inclusive boundaries at 14, 30 and 60)
    pub fn for_days(days: Option<u32>) -> Self {
        let Some(d) = days else {
            return Self {
                categories: CountRange::new(4, 6),
                items_per_category: CountRange::new(5, 10),
                item_estimate: DEFAULT_ROADMAP_ITEM_ESTIMATE,
                bucket: DayBucket::Unbounded,
            };
        };

        let (categories, items_per_category, bucket) = match d {
            0..=13 => (CountRange::new(3, 4), CountRange::new(3, 5), DayBucket::Short),
            14..=30 => (CountRange::new(4, 6), CountRange::new(5, 8), DayBucket::Medium),
            31..=60 => (CountRange::new(5, 7), CountRange::new(6, 10), DayBucket::Extended),
            _ => {
                // one extra category per 15 days past 60
                let estimated_categories = 6 + (d - 60) / 15;
                let per_category = d / estimated_categories;
                (
                    CountRange::around(estimated_categories, 1, 2),
                    CountRange::around(per_category, 2, 3),
                    DayBucket::Long,
                )
            }
        };

        Self {
            categories,
            items_per_category,
            item_estimate: d,
            bucket,
        }
    }
}

/// Activities per trail day (boundaries at 7 and 14, inclusive)
pub fn trail_activities_per_day(days: Option<u32>) -> CountRange {
    match days {
        Some(d) if d < 7 => CountRange::new(1, 2),
        Some(d) if d <= 14 => CountRange::new(2, 3),
        Some(_) => CountRange::new(3, 4),
        None => CountRange::new(2, 3),
    }
}

/// Distance between today and an OKR completion date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeHorizon {
    PastDue,
    ShortTerm { days: i64 },
    MidTerm { days: i64, months: i64 },
    LongTerm { days: i64, months: i64 },
}

impl TimeHorizon {
    /// Classify by calendar days remaining, counting 30-day months
    pub fn from_days_remaining(days: i64) -> Self {
        if days < 0 {
            return TimeHorizon::PastDue;
        }
        let months = days / 30;
        if months < 3 {
            TimeHorizon::ShortTerm { days }
        } else if months <= 6 {
            TimeHorizon::MidTerm { days, months }
        } else {
            TimeHorizon::LongTerm { days, months }
        }
    }

    pub fn between(today: NaiveDate, deadline: NaiveDate) -> Self {
        Self::from_days_remaining((deadline - today).num_days())
    }

    fn deadline_clause(&self, deadline: &str) -> String {
        match *self {
            TimeHorizon::PastDue => format!(
                "\n\n⚠️ WARNING: the completion date ({deadline}) has already passed. Make every Key Result achievable immediately."
            ),
            TimeHorizon::ShortTerm { days } => format!(
                "\n\n⏰ DEADLINE: this OKR must be completed in {days} days (less than 3 months). Generate SIMPLE, DIRECT Key Results achievable in the short term, with low complexity."
            ),
            TimeHorizon::MidTerm { days, months } => format!(
                "\n\n⏰ DEADLINE: this OKR must be completed in {days} days (about {months} months). Spread the Key Results over the period: some in the first month, some mid-period and some at the end. MODERATE complexity."
            ),
            TimeHorizon::LongTerm { days, months } => format!(
                "\n\n⏰ DEADLINE: this OKR must be completed in {days} days (about {months} months). Distribute the Key Results progressively: initial (first month), intermediate (mid-period) and final (last month). They may be more complex and ambitious."
            ),
        }
    }

    fn distribution_instruction(&self) -> String {
        match *self {
            TimeHorizon::PastDue => {
                "Time distribution: every Key Result must be doable immediately, favouring quick wins.".to_string()
            }
            TimeHorizon::ShortTerm { .. } => {
                "Time distribution: every Key Result must be doable within weeks. Favour quick, simple results.".to_string()
            }
            TimeHorizon::MidTerm { months, .. } => format!(
                "Time distribution: spread the Key Results over {months} months, some at the start, some in the middle and some at the end. Moderate complexity."
            ),
            TimeHorizon::LongTerm { months, .. } => format!(
                "Time distribution: spread the Key Results progressively over {months} months, from initial to intermediate to final. Ambitious Key Results are welcome."
            ),
        }
    }
}

/// Source of "today" for deadline arithmetic, consulted on every build
pub type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

/// Builds model prompts and their derived constraints
#[derive(Clone)]
pub struct PromptBuilder {
    clock: Clock,
}

impl fmt::Debug for PromptBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptBuilder").field("today", &self.today()).finish()
    }
}

impl PromptBuilder {
    /// Builder reading the current UTC date at each build
    pub fn new() -> Self {
        Self::with_clock(|| Utc::now().date_naive())
    }

    pub fn with_clock<F>(clock: F) -> Self
    where
        F: Fn() -> NaiveDate + Send + Sync + 'static,
    {
        Self { clock: Arc::new(clock) }
    }

    /// Builder pinned to a fixed date, for deterministic deadline clauses
    pub fn with_today(today: NaiveDate) -> Self {
        Self::with_clock(move || today)
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    pub fn build(&self, request: &GenerationRequest) -> BuiltPrompt {
        match request {
            GenerationRequest::Roadmap(r) => self.roadmap(r),
            GenerationRequest::Topics(r) => self.topics(r),
            GenerationRequest::KeyResults(r) => self.key_results(r),
            GenerationRequest::EducationalRoadmap(r) => self.educational_roadmap(r),
            GenerationRequest::EducationalTrail(r) => self.educational_trail(r),
        }
    }

    pub fn roadmap(&self, request: &RoadmapRequest) -> BuiltPrompt {
        let topic = &request.topic;
        let days = request.day_budget();
        let constraints = RoadmapConstraints::for_days(days);
        let categories = constraints.categories;
        let items = constraints.items_per_category;
        let ceiling = constraints.item_estimate;

        let time_clause = match days {
            Some(d) => {
                let focus = match constraints.bucket {
                    DayBucket::Short => "Prioritize only what is ESSENTIAL",
                    DayBucket::Medium => "Keep the structure balanced and practical",
                    DayBucket::Extended => "There is enough time for a more complete structure",
                    DayBucket::Long | DayBucket::Unbounded => "Keep the amount proportional to the available time",
                };
                format!(
                    "\n\n⏰ HARD DEADLINE: this roadmap MUST be completed in EXACTLY {d} days.\n\nMANDATORY RULES:\n- Create AT MOST {d} items in total (do not exceed this number)\n- Spread them across {categories} categories\n- Each category must have {items} items\n- Creating more than {d} items makes the roadmap invalid\n- {focus}"
                )
            }
            None => String::new(),
        };

        let text = format!(
            r#"You are an expert at designing detailed, well-structured study roadmaps.

Create a complete, well-organized roadmap about: "{topic}"{time_clause}

Return the roadmap ONLY as valid JSON, with no markdown and no extra text, following EXACTLY this structure:

{{
  "topic": "{topic}",
  "roadmap": [
    {{
      "category": "Category name",
      "items": [
        {{"id": "1", "title": "Item title", "completed": false}},
        {{"id": "2", "title": "Item title", "completed": false}}
      ]
    }}
  ]
}}

MANDATORY requirements:
- Create EXACTLY {categories} main categories (no more, no less)
- Each category must have between {items} items (respect this range)
- The TOTAL number of items in the whole roadmap MUST NOT EXCEED {ceiling}
- Items must be progressive (from basic to advanced)
- Be specific and practical in the titles
- Organize the content logically and sequentially

VALIDATION: a roadmap with more than {ceiling} items in total will be rejected and generated again.

Return ONLY the valid JSON, without markdown code blocks and without any text before or after it."#
        );

        let mut context = PromptContext::new(ArtifactKind::Roadmap);
        context.categories = Some(categories);
        context.items_per_category = Some(items);
        context.item_ceiling = days;
        context.time_clause = time_clause;

        BuiltPrompt { text, context }
    }

    pub fn topics(&self, request: &TopicsRequest) -> BuiltPrompt {
        let subject = &request.subject;
        let count = request.effective_count();

        let text = format!(
            r#"You are an expert at organizing knowledge.

Generate a list of {count} important, relevant topics about: "{subject}"

The answer must be ONLY valid JSON, with no markdown and no extra text, following EXACTLY this structure:

{{
  "subject": "{subject}",
  "topics": [
    "Topic 1",
    "Topic 2",
    "Topic 3"
  ]
}}

Requirements:
- List practical, specific topics
- Organize them logically
- Keep topic names concise
- Return ONLY the JSON, with no explanations

IMPORTANT: return only valid JSON, without markdown code blocks and without any text before or after it."#
        );

        BuiltPrompt {
            text,
            context: PromptContext::new(ArtifactKind::Topics),
        }
    }

    pub fn key_results(&self, request: &KeyResultsRequest) -> BuiltPrompt {
        let objective = &request.objective;
        let count = request.effective_count();
        let today = self.today();

        let horizon = request
            .deadline()
            .map(|deadline| (deadline, TimeHorizon::between(today, deadline)));
        let (time_clause, distribution) = match horizon {
            Some((deadline, horizon)) => (
                horizon.deadline_clause(&deadline.format(shared::COMPLETION_DATE_FORMAT).to_string()),
                horizon.distribution_instruction(),
            ),
            None => (String::new(), String::new()),
        };

        let text = format!(
            r#"You are an expert in OKRs (Objectives and Key Results).

Generate a list of {count} measurable, specific Key Results for the following objective: "{objective}"{time_clause}

Key Results must be:
- Measurable (with clear metrics)
- Specific and actionable
- Aligned with the objective
- Focused on outcomes, not just activities
- Realistic and achievable

{distribution}

The answer must be ONLY valid JSON, with no markdown and no extra text, following EXACTLY this structure:

{{
  "objective": "{objective}",
  "key_results": [
    "Key Result 1",
    "Key Result 2",
    "Key Result 3"
  ]
}}

Requirements:
- Each Key Result must be one clear, measurable sentence
- Use specific metrics whenever possible (numbers, percentages, etc.)
- Focus on results that show progress towards the objective
- Be concise but specific
- Return ONLY the JSON, with no explanations

IMPORTANT: return only valid JSON, without markdown code blocks and without any text before or after it."#
        );

        let mut context = PromptContext::new(ArtifactKind::KeyResults);
        context.time_clause = time_clause;

        BuiltPrompt { text, context }
    }

    pub fn educational_roadmap(&self, request: &EducationalRoadmapRequest) -> BuiltPrompt {
        let topic = &request.topic;

        let text = format!(
            r#"You are an expert at designing detailed, well-structured educational roadmaps.

Create a complete, well-organized educational roadmap about: "{topic}"

The roadmap must be returned ONLY as valid JSON, with no markdown and no extra text, following EXACTLY this structure:

{{
  "topic": "{topic}",
  "books": [
    {{
      "title": "Book title",
      "description": "What the book covers",
      "author": "Author name",
      "chapters": ["Chapter 1", "Chapter 2", "Chapter 3"],
      "url": "Book URL (if available)"
    }}
  ],
  "courses": [
    {{
      "title": "Course title",
      "description": "What the course covers",
      "duration": "Estimated duration",
      "url": "Course URL"
    }}
  ],
  "videos": [
    {{
      "title": "Video title",
      "description": "What the video covers",
      "duration": "Video length",
      "url": "Video URL"
    }}
  ],
  "articles": [
    {{
      "title": "Article title",
      "description": "What the article covers",
      "url": "Article URL"
    }}
  ],
  "projects": [
    {{
      "title": "Project title",
      "description": "A playful hands-on project to consolidate the knowledge",
      "url": "Reference URL (if available)"
    }}
  ]
}}

Requirements:
- Include 3-5 relevant books with their main chapters
- Include 3-5 online or in-person courses
- Include 5-10 educational videos
- Include 5-10 technical articles or tutorials
- Include 3-5 practical, playful projects to consolidate the knowledge
- Be specific and practical in the descriptions
- Order everything progressively (from basic to advanced)
- Return ONLY the JSON, with no explanations

IMPORTANT: return only valid JSON, without markdown code blocks and without any text before or after it."#
        );

        BuiltPrompt {
            text,
            context: PromptContext::new(ArtifactKind::EducationalRoadmap),
        }
    }

    pub fn educational_trail(&self, request: &EducationalTrailRequest) -> BuiltPrompt {
        let topic = &request.topic;
        let budget = request.day_budget();
        let total_days = budget.unwrap_or(DEFAULT_TRAIL_DAYS);
        let activities = trail_activities_per_day(budget);

        let time_clause = match budget {
            Some(d) if d < 7 => format!(
                "\n\n⏰ LIMITED TIME: this trail must be completed in {d} days. Focus on ESSENTIAL, DIRECT content with quick, practical activities. Fewer activities per day ({activities}), but well focused."
            ),
            Some(d) if d <= 14 => format!(
                "\n\n⏰ DEADLINE: this trail must be completed in {d} days. Keep a balanced pace with {activities} activities per day."
            ),
            Some(d) => format!(
                "\n\n⏰ DEADLINE: this trail must be completed in {d} days. There is enough time for deeper content: include {activities} activities per day and longer materials."
            ),
            None => String::new(),
        };

        let text = format!(
            r#"Create a {total_days}-day educational trail about: "{topic}"{time_clause}

Return ONLY valid JSON, with no markdown:

{{
  "topic": "{topic}",
  "total_days": {total_days},
  "description": "Progressive learning trail",
  "resources": {{
    "resource_1": {{"title": "Name", "description": "Desc", "author": "Author", "chapters": ["Ch 1"], "url": ""}},
    "resource_2": {{"title": "Video", "description": "Desc", "duration": "30 min", "url": ""}}
  }},
  "steps": [
    {{
      "day": 1,
      "title": "Day 1: Title",
      "description": "What will be learned",
      "activities": [
        {{
          "type": "read_chapters",
          "resource_id": "resource_1",
          "title": "Read chapters 1-3",
          "description": "Focus on...",
          "chapters": ["Ch 1", "Ch 2"],
          "progress": "3 of 10 chapters"
        }}
      ]
    }}
  ]
}}

IMPORTANT rules:
- EXACTLY {total_days} days, {activities} activities per day
- The "total_days" field in the JSON MUST be {total_days}
- Types: read_chapters, watch_video, read_article, take_course, do_project
- Progressive: basics → advanced → practice
- Be specific: "Read chapters 1-3", not "Read the book"
- Include progress when relevant
- Projects at the end
- Spread the content proportionally across the {total_days} days

CRITERIA FOR RESOURCES (BOOKS, COURSES, VIDEOS, ARTICLES):
- Use ONLY widely known, established and recognized resources in the field
- Prefer classics, best-sellers and widely used materials
- Avoid very recent, niche or obscure resources that may not exist
- Courses: well-known platforms (Coursera, edX, Udemy) and popular, verified courses
- Videos: well-known channels and popular videos
- Articles: established, well-known sites
- If unsure whether a resource exists, prefer a generic or well-known one
- URLs must be valid and reachable; if you do not know a specific URL, leave "url" empty instead of inventing one

ONLY JSON, no markdown."#
        );

        let mut context = PromptContext::new(ArtifactKind::EducationalTrail);
        context.activities_per_day = Some(activities);
        context.total_days = Some(total_days);
        context.time_clause = time_clause;

        BuiltPrompt { text, context }
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roadmap(days: Option<i64>) -> RoadmapRequest {
        RoadmapRequest {
            topic: "Rust".to_string(),
            available_days: days,
        }
    }

    fn fixed_builder() -> PromptBuilder {
        PromptBuilder::with_today(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
    }

    #[test]
    fn test_bucket_boundaries() {
        let cases = [
            (1, (3, 4), (3, 5)),
            (13, (3, 4), (3, 5)),
            (14, (4, 6), (5, 8)),
            (30, (4, 6), (5, 8)),
            (31, (5, 7), (6, 10)),
            (60, (5, 7), (6, 10)),
        ];

        for (days, (cmin, cmax), (imin, imax)) in cases {
            let constraints = RoadmapConstraints::for_days(Some(days));
            assert_eq!(constraints.categories, CountRange::new(cmin, cmax), "categories for {days} days");
            assert_eq!(constraints.items_per_category, CountRange::new(imin, imax), "items for {days} days");
            assert_eq!(constraints.item_estimate, days);
        }
    }

    #[test]
    fn test_long_horizon_is_computed() {
        let constraints = RoadmapConstraints::for_days(Some(61));
        assert_eq!(constraints.bucket, DayBucket::Long);
        // 6 categories, 61 / 6 = 10 items each
        assert_eq!(constraints.categories, CountRange::new(5, 8));
        assert_eq!(constraints.items_per_category, CountRange::new(8, 13));

        let constraints = RoadmapConstraints::for_days(Some(120));
        // 6 + 60 / 15 = 10 categories, 12 items each
        assert_eq!(constraints.categories, CountRange::new(9, 12));
        assert_eq!(constraints.items_per_category, CountRange::new(10, 15));
    }

    #[test]
    fn test_long_horizon_ranges_stay_positive() {
        for days in [61, 75, 90, 365, 1000, 100_000] {
            let constraints = RoadmapConstraints::for_days(Some(days));
            assert!(constraints.categories.min >= 1);
            assert!(constraints.items_per_category.min >= 1);
            assert!(constraints.categories.min <= constraints.categories.max);
            assert!(constraints.items_per_category.min <= constraints.items_per_category.max);
        }
    }

    #[test]
    fn test_roadmap_without_budget() {
        let prompt = fixed_builder().roadmap(&roadmap(None));

        assert_eq!(prompt.context.categories, Some(CountRange::new(4, 6)));
        assert_eq!(prompt.context.items_per_category, Some(CountRange::new(5, 10)));
        assert_eq!(prompt.context.item_ceiling, None);
        assert!(prompt.context.time_clause.is_empty());
        assert!(prompt.text.contains("MUST NOT EXCEED 30"));
    }

    #[test]
    fn test_roadmap_with_budget_states_ceiling() {
        let prompt = fixed_builder().roadmap(&roadmap(Some(10)));

        assert_eq!(prompt.context.item_ceiling, Some(10));
        assert!(prompt.context.time_clause.contains("EXACTLY 10 days"));
        assert!(prompt.text.contains("MUST NOT EXCEED 10"));
        assert!(prompt.text.contains("more than 10 items in total will be rejected"));
        assert!(prompt.text.contains("EXACTLY 3-4 main categories"));
        assert!(prompt.text.contains(r#""topic": "Rust""#));
    }

    #[test]
    fn test_roadmap_zero_days_is_no_budget() {
        let prompt = fixed_builder().roadmap(&roadmap(Some(0)));
        assert_eq!(prompt.context.item_ceiling, None);
        assert!(prompt.context.time_clause.is_empty());
    }

    #[test]
    fn test_trail_activity_buckets() {
        assert_eq!(trail_activities_per_day(Some(6)), CountRange::new(1, 2));
        assert_eq!(trail_activities_per_day(Some(7)), CountRange::new(2, 3));
        assert_eq!(trail_activities_per_day(Some(14)), CountRange::new(2, 3));
        assert_eq!(trail_activities_per_day(Some(15)), CountRange::new(3, 4));
        assert_eq!(trail_activities_per_day(None), CountRange::new(2, 3));
    }

    #[test]
    fn test_trail_defaults_to_twelve_days() {
        let prompt = fixed_builder().educational_trail(&EducationalTrailRequest {
            topic: "Kubernetes".to_string(),
            available_days: None,
        });

        assert_eq!(prompt.context.total_days, Some(DEFAULT_TRAIL_DAYS));
        assert!(prompt.text.starts_with("Create a 12-day educational trail"));
        assert!(prompt.text.contains(r#""total_days": 12"#));
        assert!(prompt.context.time_clause.is_empty());
    }

    #[test]
    fn test_trail_with_short_budget() {
        let prompt = fixed_builder().educational_trail(&EducationalTrailRequest {
            topic: "SQL".to_string(),
            available_days: Some(5),
        });

        assert_eq!(prompt.context.activities_per_day, Some(CountRange::new(1, 2)));
        assert!(prompt.context.time_clause.contains("LIMITED TIME"));
        assert!(prompt.text.contains("EXACTLY 5 days, 1-2 activities per day"));
    }

    #[test]
    fn test_topics_prompt_uses_default_count() {
        let prompt = fixed_builder().topics(&TopicsRequest {
            subject: "Python".to_string(),
            count: 0,
        });

        assert!(prompt.text.contains("Generate a list of 10 important"));
        assert!(prompt.text.contains(r#""subject": "Python""#));
        assert_eq!(prompt.context, PromptContext::new(ArtifactKind::Topics));
    }

    #[test]
    fn test_time_horizon_classification() {
        assert_eq!(TimeHorizon::from_days_remaining(-1), TimeHorizon::PastDue);
        assert_eq!(TimeHorizon::from_days_remaining(0), TimeHorizon::ShortTerm { days: 0 });
        assert_eq!(TimeHorizon::from_days_remaining(89), TimeHorizon::ShortTerm { days: 89 });
        assert_eq!(TimeHorizon::from_days_remaining(90), TimeHorizon::MidTerm { days: 90, months: 3 });
        assert_eq!(TimeHorizon::from_days_remaining(209), TimeHorizon::MidTerm { days: 209, months: 6 });
        assert_eq!(TimeHorizon::from_days_remaining(210), TimeHorizon::LongTerm { days: 210, months: 7 });
    }

    #[test]
    fn test_key_results_deadline_clauses() {
        let builder = fixed_builder();
        let mut request = KeyResultsRequest {
            objective: "Improve onboarding".to_string(),
            count: 0,
            completion_date: Some("2025-12-01".to_string()),
        };

        let past = builder.key_results(&request);
        assert!(past.context.time_clause.contains("2025-12-01"));
        assert!(past.text.contains("doable immediately"));
        assert!(past.text.contains("Generate a list of 5 measurable"));

        request.completion_date = Some("2026-02-01".to_string());
        let short = builder.key_results(&request);
        assert!(short.context.time_clause.contains("31 days"));
        assert!(short.text.contains("within weeks"));

        request.completion_date = Some("2026-05-01".to_string());
        let mid = builder.key_results(&request);
        assert!(mid.context.time_clause.contains("120 days (about 4 months)"));

        request.completion_date = Some("2027-01-01".to_string());
        let long = builder.key_results(&request);
        assert!(long.context.time_clause.contains("ambitious"));
    }

    #[test]
    fn test_deadline_measured_at_each_build() {
        use std::sync::atomic::{AtomicI64, Ordering};

        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let elapsed = Arc::new(AtomicI64::new(0));
        let clock_elapsed = elapsed.clone();
        let builder =
            PromptBuilder::with_clock(move || start + chrono::Duration::days(clock_elapsed.load(Ordering::SeqCst)));

        let request = GenerationRequest::KeyResults(KeyResultsRequest {
            objective: "Ship v2".to_string(),
            count: 0,
            completion_date: Some("2026-02-15".to_string()),
        });

        let early = builder.build(&request);
        assert!(early.context.time_clause.contains("45 days (less than 3 months)"));

        elapsed.store(288, Ordering::SeqCst);
        assert_eq!(builder.today(), NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());

        let late = builder.build(&request);
        assert!(late.context.time_clause.contains("has already passed"));
        assert!(late.text.contains("doable immediately"));
    }

    #[test]
    fn test_key_results_without_deadline() {
        let prompt = fixed_builder().key_results(&KeyResultsRequest {
            objective: "Grow revenue".to_string(),
            count: 3,
            completion_date: Some("not a date".to_string()),
        });

        assert!(prompt.context.time_clause.is_empty());
        assert!(!prompt.text.contains("Time distribution"));
        assert!(prompt.text.contains("Generate a list of 3 measurable"));
    }

    #[test]
    fn test_build_dispatches_on_kind() {
        let request = GenerationRequest::EducationalRoadmap(EducationalRoadmapRequest {
            topic: "Compilers".to_string(),
        });

        let prompt = fixed_builder().build(&request);
        assert_eq!(prompt.context.kind, ArtifactKind::EducationalRoadmap);
        assert!(prompt.text.contains("Include 3-5 relevant books"));
    }
}
