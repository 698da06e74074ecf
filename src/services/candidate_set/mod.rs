//! Canonical candidate collection for an event under construction.
//!
//! Owns the time-ordered set of candidate slots, enforces the maximum-count
//! invariant, and defers sorting to gesture completion so blocks don't jump
//! around mid-drag.

use chrono::{DateTime, Local, NaiveDate};
use thiserror::Error;
use uuid::Uuid;

use crate::models::candidate::Candidate;
use crate::utils::date::{end_of_day, start_of_day};

/// Maximum number of candidate slots per event.
pub const MAX_CANDIDATES: usize = 20;

/// Rejected candidate mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CandidateSetError {
    #[error("up to {MAX_CANDIDATES} candidate slots can be selected")]
    CapacityReached,
}

/// Source of fresh candidate ids.
///
/// Injected rather than read from an ambient generator so the collection
/// stays deterministic under test.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Collision-resistant default id source.
#[derive(Debug, Default)]
pub struct UuidSource;

impl IdSource for UuidSource {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// The ordered candidate slots of one event.
pub struct CandidateSet {
    candidates: Vec<Candidate>,
    ids: Box<dyn IdSource>,
}

impl Default for CandidateSet {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateSet {
    /// Create an empty set backed by UUID ids.
    pub fn new() -> Self {
        Self::with_id_source(Box::new(UuidSource))
    }

    /// Create an empty set with an injected id source.
    pub fn with_id_source(ids: Box<dyn IdSource>) -> Self {
        Self {
            candidates: Vec::new(),
            ids,
        }
    }

    /// Add a new candidate slot, re-sorting the collection.
    ///
    /// Rejects when the set already holds [`MAX_CANDIDATES`] slots; the
    /// caller surfaces that as a user-visible notice.
    pub fn add(
        &mut self,
        start: DateTime<Local>,
        end: DateTime<Local>,
        is_all_day: bool,
    ) -> Result<Candidate, CandidateSetError> {
        if self.candidates.len() >= MAX_CANDIDATES {
            return Err(CandidateSetError::CapacityReached);
        }

        let candidate = Candidate {
            id: self.ids.next_id(),
            start_date: start,
            end_date: end,
            is_all_day,
        };
        self.candidates.push(candidate.clone());
        self.settle();
        Ok(candidate)
    }

    /// Replace a candidate's bounds in place. Unknown ids are a no-op.
    ///
    /// Does not re-sort; sorting is deferred to [`settle`](Self::settle) at
    /// gesture completion.
    pub fn update(&mut self, id: &str, new_start: DateTime<Local>, new_end: DateTime<Local>) {
        if let Some(candidate) = self.candidates.iter_mut().find(|c| c.id == id) {
            candidate.start_date = new_start;
            candidate.end_date = new_end;
        }
    }

    /// Remove a candidate. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) {
        self.candidates.retain(|c| c.id != id);
    }

    /// Toggle the all-day candidate for a calendar day: remove it if one
    /// exists, otherwise add one spanning the full day. Always settles.
    pub fn toggle_all_day(&mut self, day: NaiveDate) -> Result<(), CandidateSetError> {
        if let Some(existing) = self.candidates.iter().find(|c| c.is_all_day_on(day)) {
            let id = existing.id.clone();
            self.remove(&id);
            self.settle();
            return Ok(());
        }

        self.add(start_of_day(day), end_of_day(day), true)?;
        Ok(())
    }

    /// Re-sort ascending by start instant. The sort is stable, so slots
    /// sharing a start keep their insertion order.
    pub fn settle(&mut self) {
        self.candidates.sort_by_key(|c| c.start_date);
    }

    pub fn get(&self, id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// True if the day already has an all-day candidate (drives the
    /// day-header highlight).
    pub fn has_all_day_on(&self, day: NaiveDate) -> bool {
        self.candidates.iter().any(|c| c.is_all_day_on(day))
    }

    /// Consume the set, yielding the sorted candidates.
    pub fn into_candidates(mut self) -> Vec<Candidate> {
        self.settle();
        self.candidates
    }
}
