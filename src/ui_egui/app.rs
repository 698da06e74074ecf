//! Application shell: route state, the token boundary, and notices.
//!
//! Two routes exist: the creation view and the event view (parameterized by
//! a token). Transitions replace the current route outright; the only state
//! that survives navigation is whatever the next token carries.

use super::toast::ToastManager;
use super::views::{CreateOutput, CreateViewState, EventAction, EventViewState};
use crate::models::event_data::EventData;
use crate::models::response::Response;
use crate::services::candidate_set::MAX_CANDIDATES;
use crate::services::token;

enum Route {
    Create(CreateViewState),
    Event(EventViewState),
}

pub struct SlotPollApp {
    route: Route,
    toasts: ToastManager,
}

impl SlotPollApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, initial_token: Option<String>) -> Self {
        let mut app = Self {
            route: Route::Create(CreateViewState::new()),
            toasts: ToastManager::default(),
        };
        if let Some(raw) = initial_token {
            app.open_token(&raw);
        }
        app
    }

    /// Decode a shared token, falling back to the creation view when the
    /// link is malformed. No partial state is ever shown.
    fn open_token(&mut self, raw: &str) {
        let token = token::token_from_url(raw).to_string();
        match token::decode(&token) {
            Ok(data) => {
                log::info!(
                    "Opened event '{}' with {} candidate(s), {} response(s)",
                    data.event_name,
                    data.candidates.len(),
                    data.responses.len()
                );
                self.route = Route::Event(EventViewState::new(token, data));
            }
            Err(err) => {
                log::warn!("Failed to decode event token: {}", err);
                self.toasts
                    .error("That link looks invalid — starting a fresh event");
                self.route = Route::Create(CreateViewState::new());
            }
        }
    }

    fn handle_create(
        state: &mut CreateViewState,
        output: CreateOutput,
        toasts: &mut ToastManager,
    ) -> Option<Route> {
        if output.cap_hit {
            toasts.warning(format!(
                "Up to {} candidate slots can be selected",
                MAX_CANDIDATES
            ));
        }
        if !output.submit {
            return None;
        }

        let candidates = state.candidates.candidates().to_vec();
        match EventData::new(
            state.event_name.clone(),
            state.description.clone(),
            candidates,
        ) {
            Ok(data) => match token::encode(&data) {
                Ok(token) => {
                    log::info!("Created event '{}'", data.event_name);
                    Some(Route::Event(EventViewState::new(token, data)))
                }
                Err(err) => {
                    log::error!("Failed to encode event: {}", err);
                    toasts.error("Could not create the event link");
                    None
                }
            },
            Err(message) => {
                toasts.warning(message);
                None
            }
        }
    }

    fn handle_event(
        state: &mut EventViewState,
        action: EventAction,
        toasts: &mut ToastManager,
    ) -> Option<Route> {
        match action {
            EventAction::None => None,
            EventAction::LinkCopied => {
                toasts.success("Link copied — share it with participants");
                None
            }
            EventAction::BackToCreate => Some(Route::Create(CreateViewState::new())),
            EventAction::SubmitResponse => {
                let response = Response::new(
                    state.participant_name.clone(),
                    state.answers.clone(),
                    state.comment.clone(),
                );
                match response {
                    Ok(response) => {
                        state.data.upsert_response(response);
                        match token::encode(&state.data) {
                            Ok(token) => {
                                // The new token replaces the current one in
                                // place; there is no history to walk back
                                state.token = token;
                                state.mark_submitted();
                                toasts.success("Response saved — copy the updated link to share");
                            }
                            Err(err) => {
                                log::error!("Failed to re-encode event: {}", err);
                                toasts.error("Could not update the event link");
                            }
                        }
                        None
                    }
                    Err(message) => {
                        toasts.warning(message);
                        None
                    }
                }
            }
        }
    }
}

impl eframe::App for SlotPollApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut next_route = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_source("page")
                .auto_shrink([false, false])
                .show(ui, |ui| match &mut self.route {
                    Route::Create(state) => {
                        let output = state.render(ui);
                        next_route = Self::handle_create(state, output, &mut self.toasts);
                    }
                    Route::Event(state) => {
                        let action = state.render(ui);
                        next_route = Self::handle_event(state, action, &mut self.toasts);
                    }
                });
        });

        if let Some(route) = next_route {
            self.route = route;
        }

        let is_dark = ctx.style().visuals.dark_mode;
        self.toasts.render(ctx, is_dark);
    }
}
