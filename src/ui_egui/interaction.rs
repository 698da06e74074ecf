//! Pointer-gesture state machine for the weekly time picker.
//!
//! The picker's mouse handling is modeled as an explicit tagged-union state
//! with pure transition functions over grid-local coordinates. Every gesture
//! edge case (click-vs-drag threshold, minimum-duration rejection, clamped
//! day columns) is testable here without synthesizing real pointer events.
//!
//! A gesture runs from pointer-down through release; the pointer leaving the
//! interactive surface completes the gesture exactly like a release. There
//! is no other way to end one — no escape-key cancel.

use chrono::{DateTime, Duration, Local};

use super::geometry::GridGeometry;
use crate::models::candidate::{Candidate, MIN_SLOT_MINUTES};

/// Drawing spans shorter than this count as a click, which creates a fixed
/// 30-minute slot at the anchor instead of a drag selection.
pub const CLICK_THRESHOLD_MINUTES: i64 = 10;

/// Which edge of a slot a resize gesture is dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    /// Top handle - adjusts the start instant
    Start,
    /// Bottom handle - adjusts the end instant
    End,
}

/// Captured state of an in-progress move gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveContext {
    /// Snapshot of the candidate at pointer-down; moves are computed against
    /// these bounds, not the incrementally updated ones.
    pub candidate: Candidate,
    #[allow(dead_code)]
    pub origin_day_index: usize,
    #[allow(dead_code)]
    pub origin_pointer_y: f32,
    /// Minutes between the unsnapped press instant and the slot's start, so
    /// the grabbed visual offset is preserved while dragging.
    pub grab_offset_minutes: i64,
}

/// The interaction state of the picker surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    Idle,
    /// Rubber-band selection on empty grid. No candidate exists yet; the
    /// view renders a transient selection box from `anchor` to `live`.
    Drawing {
        anchor: DateTime<Local>,
        live: DateTime<Local>,
        day_index: usize,
    },
    Moving(MoveContext),
    Resizing {
        candidate: Candidate,
        edge: ResizeEdge,
    },
}

/// A bounds change a gesture wants applied to one candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotUpdate {
    pub candidate_id: String,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
}

/// The slot a completed drawing gesture produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewSlot {
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
}

/// Outcome of completing a gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureEnd {
    /// Slot to add, when a drawing gesture resolved into one.
    pub new_slot: Option<NewSlot>,
    /// True when any gesture actually ran; the candidate collection should
    /// settle (re-sort) afterwards.
    pub settled: bool,
}

impl GestureEnd {
    fn none() -> Self {
        Self {
            new_slot: None,
            settled: false,
        }
    }
}

fn minutes_of_day(instant: DateTime<Local>) -> i64 {
    use chrono::Timelike;
    (instant.time().hour() * 60 + instant.time().minute()) as i64
}

impl Interaction {
    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }

    /// Pointer-down on empty grid: begin drawing at the snapped press point.
    pub fn begin_drawing(geometry: &GridGeometry, x: f32, y: f32) -> Interaction {
        let day_index = geometry.day_index_at(x);
        let anchor = geometry.offset_to_time(y, day_index, true);
        Interaction::Drawing {
            anchor,
            live: anchor,
            day_index,
        }
    }

    /// Pointer-down on a slot body: begin moving it.
    ///
    /// Records the offset between the unsnapped press instant and the slot's
    /// start so the grab point stays fixed under the pointer during the drag.
    pub fn begin_moving(
        candidate: &Candidate,
        geometry: &GridGeometry,
        x: f32,
        y: f32,
    ) -> Interaction {
        let day_index = geometry.day_index_at(x);
        let pressed = geometry.offset_to_time(y, day_index, false);
        let grab_offset_minutes = minutes_of_day(pressed) - minutes_of_day(candidate.start_date);
        Interaction::Moving(MoveContext {
            candidate: candidate.clone(),
            origin_day_index: day_index,
            origin_pointer_y: y,
            grab_offset_minutes,
        })
    }

    /// Pointer-down on a slot's top or bottom edge handle.
    pub fn begin_resizing(candidate: &Candidate, edge: ResizeEdge) -> Interaction {
        Interaction::Resizing {
            candidate: candidate.clone(),
            edge,
        }
    }

    /// Advance the gesture for a pointer move, returning the candidate
    /// update to apply, if any.
    ///
    /// Drawing only moves its live edge (the selection box); no candidate is
    /// mutated until release. Resize updates that would shrink the slot
    /// below the minimum duration are dropped, leaving the slot unchanged
    /// for that move event.
    pub fn pointer_moved(
        &mut self,
        geometry: &GridGeometry,
        x: f32,
        y: f32,
    ) -> Option<SlotUpdate> {
        match self {
            Interaction::Idle => None,
            Interaction::Drawing {
                live, day_index, ..
            } => {
                // The selection stays in the anchor's day column
                *live = geometry.offset_to_time(y, *day_index, true);
                None
            }
            Interaction::Moving(context) => {
                let day_index = geometry.day_index_at(x);
                let pointer_instant = geometry.offset_to_time(y, day_index, false);

                // Subtract the grab offset on the raw position, then re-snap,
                // so repeated moves don't accumulate rounding drift
                let target_minutes = minutes_of_day(pointer_instant) - context.grab_offset_minutes;
                let new_start = geometry.offset_to_time(
                    GridGeometry::minutes_to_offset(target_minutes),
                    day_index,
                    true,
                );
                let duration = context.candidate.duration();

                Some(SlotUpdate {
                    candidate_id: context.candidate.id.clone(),
                    start: new_start,
                    end: new_start + duration,
                })
            }
            Interaction::Resizing { candidate, edge } => {
                // The slot stays in its own day column while resizing
                let day_index = geometry.day_index_of(candidate.day())?;
                let edge_instant = geometry.offset_to_time(y, day_index, true);
                let min_duration = Duration::minutes(MIN_SLOT_MINUTES);

                match edge {
                    ResizeEdge::Start => {
                        if candidate.end_date - edge_instant >= min_duration {
                            Some(SlotUpdate {
                                candidate_id: candidate.id.clone(),
                                start: edge_instant,
                                end: candidate.end_date,
                            })
                        } else {
                            None
                        }
                    }
                    ResizeEdge::End => {
                        if edge_instant - candidate.start_date >= min_duration {
                            Some(SlotUpdate {
                                candidate_id: candidate.id.clone(),
                                start: candidate.start_date,
                                end: edge_instant,
                            })
                        } else {
                            None
                        }
                    }
                }
            }
        }
    }

    /// Complete the gesture on pointer release, returning to `Idle`.
    ///
    /// Pointer-leave of the interactive surface routes here too; it is
    /// treated identically to a release.
    pub fn finish(&mut self) -> GestureEnd {
        let state = std::mem::replace(self, Interaction::Idle);
        match state {
            Interaction::Idle => GestureEnd::none(),
            Interaction::Drawing { anchor, live, .. } => GestureEnd {
                new_slot: resolve_drawn_slot(anchor, live),
                settled: true,
            },
            Interaction::Moving(_) | Interaction::Resizing { .. } => GestureEnd {
                new_slot: None,
                settled: true,
            },
        }
    }

    /// The day column and time span of the in-progress selection box.
    pub fn selection_span(&self) -> Option<(usize, DateTime<Local>, DateTime<Local>)> {
        match self {
            Interaction::Drawing {
                anchor,
                live,
                day_index,
            } => {
                let (lo, hi) = if anchor <= live {
                    (*anchor, *live)
                } else {
                    (*live, *anchor)
                };
                Some((*day_index, lo, hi))
            }
            _ => None,
        }
    }

    /// The candidate currently being moved or resized.
    pub fn active_candidate_id(&self) -> Option<&str> {
        match self {
            Interaction::Moving(context) => Some(&context.candidate.id),
            Interaction::Resizing { candidate, .. } => Some(&candidate.id),
            _ => None,
        }
    }
}

/// Resolve a finished drawing gesture into a slot, if any.
///
/// Spans under the click threshold count as a click and produce a fixed
/// 30-minute slot at the anchor; longer spans become anchor..live ordered
/// ascending, but only when they reach the minimum duration.
fn resolve_drawn_slot(anchor: DateTime<Local>, live: DateTime<Local>) -> Option<NewSlot> {
    let spanned = (live - anchor).num_minutes().abs();

    if spanned < CLICK_THRESHOLD_MINUTES {
        return Some(NewSlot {
            start: anchor,
            end: anchor + Duration::minutes(MIN_SLOT_MINUTES),
        });
    }

    let (start, end) = if anchor <= live {
        (anchor, live)
    } else {
        (live, anchor)
    };

    if end - start >= Duration::minutes(MIN_SLOT_MINUTES) {
        Some(NewSlot { start, end })
    } else {
        None
    }
}
