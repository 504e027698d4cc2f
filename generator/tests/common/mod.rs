//! Shared fixtures for generator integration tests

#![allow(dead_code)]

use std::time::Duration;

use chrono::NaiveDate;
use generator::core::PromptBuilder;
use generator::{Generator, GenerationConfig, MockCompletionClient, MockModelDirectory};

pub const TEST_BACKOFF: Duration = Duration::from_millis(40);

pub fn test_config(fallback: &[&str]) -> GenerationConfig {
    GenerationConfig::default()
        .with_fallback_models(fallback.iter().copied())
        .with_quota_backoff(TEST_BACKOFF)
}

/// Directory that reports `models` exactly once
pub fn directory_returning(models: &[&str]) -> MockModelDirectory {
    let models: Vec<String> = models.iter().map(|m| m.to_string()).collect();
    let mut directory = MockModelDirectory::new();
    directory.expect_list_models().times(1).returning(move || models.clone());
    directory
}

/// Directory that must never be consulted
pub fn untouched_directory() -> MockModelDirectory {
    let mut directory = MockModelDirectory::new();
    directory.expect_list_models().times(0);
    directory
}

pub fn build_generator(
    directory: MockModelDirectory,
    completion: MockCompletionClient,
    fallback: &[&str],
) -> Generator<MockModelDirectory, MockCompletionClient> {
    let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    Generator::new(directory, completion, test_config(fallback)).with_prompt_builder(PromptBuilder::with_today(today))
}

pub fn fenced(json: &str) -> String {
    format!("```json\n{json}\n```")
}

pub fn topics_json(subject: &str, count: usize) -> String {
    let topics: Vec<String> = (1..=count).map(|i| format!("Topic {i}")).collect();
    serde_json::json!({ "subject": subject, "topics": topics }).to_string()
}

/// Roadmap JSON with `categories` categories of `items_each` items
pub fn roadmap_json(topic: &str, categories: usize, items_each: usize) -> String {
    let roadmap: Vec<serde_json::Value> = (0..categories)
        .map(|c| {
            let items: Vec<serde_json::Value> = (0..items_each)
                .map(|i| serde_json::json!({ "id": format!("{c}-{i}"), "title": format!("Item {i}"), "completed": false }))
                .collect();
            serde_json::json!({ "category": format!("Category {c}"), "items": items })
        })
        .collect();
    serde_json::json!({ "topic": topic, "roadmap": roadmap }).to_string()
}

pub fn trail_json(topic: &str, days: u32) -> String {
    let steps: Vec<serde_json::Value> = (1..=days)
        .map(|day| {
            serde_json::json!({
                "day": day,
                "title": format!("Day {day}"),
                "description": "Progress",
                "activities": [{
                    "type": "read_chapters",
                    "resource_id": "resource_1",
                    "title": "Read chapters 1-3",
                    "description": "Basics",
                    "chapters": ["Ch 1", "Ch 2", "Ch 3"],
                    "progress": "3 of 10 chapters"
                }]
            })
        })
        .collect();

    serde_json::json!({
        "topic": topic,
        "total_days": days,
        "description": "Progressive learning trail",
        "resources": {
            "resource_1": {"title": "The Book", "description": "Reference", "author": "A. Author", "chapters": ["Ch 1"]}
        },
        "steps": steps
    })
    .to_string()
}
