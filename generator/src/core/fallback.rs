//! Candidate fallback loop as an explicit state machine
//!
//! [`next_state`] is pure and holds every retry/backoff/advance rule.
//! [`FallbackLoop::run`] drives it: it performs the attempt or the backoff
//! pause each state asks for and feeds the result back in as an [`Event`].

use std::future::Future;
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use shared::{ArtifactKind, Component, service_debug, service_info, service_warn};

use crate::error::{GenerationError, GenerationResult};
use crate::types::ModelCandidate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    /// Calling candidate `index`; `retried` is set on the post-backoff attempt
    Trying { index: usize, retried: bool },
    /// Waiting out a quota signal before retrying candidate `index`
    Backoff { index: usize },
    Success,
    Exhausted,
}

impl LoopState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoopState::Success | LoopState::Exhausted)
    }
}

/// Result of one candidate attempt, as seen by the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Artifact parsed and passed its structural check
    Accepted,
    /// The provider answered 429
    Quota,
    /// Any other per-candidate failure
    Failed,
    /// Failure that no other candidate can fix (missing credential)
    Fatal,
}

impl AttemptOutcome {
    pub fn classify<T>(result: &GenerationResult<T>) -> Self {
        match result {
            Ok(_) => AttemptOutcome::Accepted,
            Err(e) if e.is_quota() => AttemptOutcome::Quota,
            Err(e) if e.is_configuration() => AttemptOutcome::Fatal,
            Err(_) => AttemptOutcome::Failed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Start,
    Attempted(AttemptOutcome),
    BackoffElapsed,
}

fn advance(index: usize, candidate_count: usize) -> LoopState {
    if index + 1 < candidate_count {
        LoopState::Trying {
            index: index + 1,
            retried: false,
        }
    } else {
        LoopState::Exhausted
    }
}

/// Transition function; events that do not apply to a state leave it unchanged
pub fn next_state(state: LoopState, event: Event, candidate_count: usize) -> LoopState {
    match (state, event) {
        (LoopState::Idle, Event::Start) if candidate_count == 0 => LoopState::Exhausted,
        (LoopState::Idle, Event::Start) => LoopState::Trying {
            index: 0,
            retried: false,
        },
        (LoopState::Trying { .. }, Event::Attempted(AttemptOutcome::Accepted)) => LoopState::Success,
        (LoopState::Trying { .. }, Event::Attempted(AttemptOutcome::Fatal)) => LoopState::Exhausted,
        (LoopState::Trying { index, retried: false }, Event::Attempted(AttemptOutcome::Quota)) => {
            LoopState::Backoff { index }
        }
        (LoopState::Trying { index, .. }, Event::Attempted(_)) => advance(index, candidate_count),
        (LoopState::Backoff { index }, Event::BackoffElapsed) => LoopState::Trying { index, retried: true },
        (state, _) => state,
    }
}

/// A successful run and how it got there
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackOutcome<T> {
    pub artifact: T,
    pub model: String,
    pub attempts: u32,
    pub backoffs: u32,
}

/// One request's pass over its candidate list
pub struct FallbackLoop<'a> {
    kind: ArtifactKind,
    candidates: &'a [ModelCandidate],
    quota_backoff: Duration,
    generation_id: Uuid,
}

impl<'a> FallbackLoop<'a> {
    pub fn new(kind: ArtifactKind, candidates: &'a [ModelCandidate], quota_backoff: Duration) -> Self {
        Self {
            kind,
            candidates,
            quota_backoff,
            generation_id: Uuid::new_v4(),
        }
    }

    pub fn with_generation_id(mut self, generation_id: Uuid) -> Self {
        self.generation_id = generation_id;
        self
    }

    /// Try candidates in order until one yields an accepted artifact
    ///
    /// `attempt` receives a model id and must perform the full
    /// complete/extract/parse/check pipeline for it. Returns the last
    /// per-candidate error wrapped in [`GenerationError::Exhausted`] when every
    /// candidate fails, [`GenerationError::Configuration`] as soon as the
    /// credential is found missing, and [`GenerationError::Cancelled`] if
    /// `cancel` fires during an attempt or a backoff.
    pub async fn run<T, F, Fut>(&self, cancel: &CancellationToken, mut attempt: F) -> GenerationResult<FallbackOutcome<T>>
    where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = GenerationResult<T>>,
    {
        let count = self.candidates.len();
        let mut state = next_state(LoopState::Idle, Event::Start, count);
        let mut last_error: Option<GenerationError> = None;
        let mut accepted: Option<(T, String)> = None;
        let mut attempts = 0u32;
        let mut backoffs = 0u32;
        let started = Instant::now();

        while !state.is_terminal() {
            let event = match state {
                LoopState::Trying { index, retried } => {
                    let candidate = &self.candidates[index];
                    attempts += 1;
                    service_debug!(
                        Component::Generator,
                        generation_id = %self.generation_id,
                        model = %candidate,
                        attempt = attempts,
                        retried,
                        "Trying candidate {}/{}",
                        index + 1,
                        count
                    );

                    let result = tokio::select! {
                        _ = cancel.cancelled() => return Err(GenerationError::Cancelled),
                        result = attempt(candidate.id.clone()) => result,
                    };

                    let outcome = AttemptOutcome::classify(&result);
                    match result {
                        Ok(artifact) => accepted = Some((artifact, candidate.id.clone())),
                        Err(e) => {
                            service_debug!(
                                Component::Generator,
                                generation_id = %self.generation_id,
                                model = %candidate,
                                error = %e,
                                "Candidate failed"
                            );
                            last_error = Some(e);
                        }
                    }
                    Event::Attempted(outcome)
                }
                LoopState::Backoff { index } => {
                    backoffs += 1;
                    service_warn!(
                        Component::Generator,
                        generation_id = %self.generation_id,
                        model = %self.candidates[index],
                        backoff_ms = self.quota_backoff.as_millis() as u64,
                        "Quota exceeded, backing off before retry"
                    );

                    tokio::select! {
                        _ = cancel.cancelled() => return Err(GenerationError::Cancelled),
                        _ = tokio::time::sleep(self.quota_backoff) => {}
                    }
                    Event::BackoffElapsed
                }
                LoopState::Idle | LoopState::Success | LoopState::Exhausted => break,
            };

            state = next_state(state, event, count);
        }

        if let (LoopState::Success, Some((artifact, model))) = (state, accepted) {
            service_info!(
                Component::Generator,
                generation_id = %self.generation_id,
                model = %model,
                attempts,
                backoffs,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Generated {}",
                self.kind
            );
            return Ok(FallbackOutcome {
                artifact,
                model,
                attempts,
                backoffs,
            });
        }

        match last_error {
            Some(GenerationError::Configuration) => Err(GenerationError::Configuration),
            Some(last) => Err(GenerationError::Exhausted {
                kind: self.kind,
                last: Box::new(last),
            }),
            None => Err(GenerationError::NoModelWorked { kind: self.kind }),
        }
    }
}
