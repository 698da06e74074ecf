//! Event view: the summary table with per-candidate tallies and the
//! response form.

use std::collections::HashMap;

use egui::{Color32, RichText};

use crate::models::answer::AnswerType;
use crate::models::event_data::EventData;
use crate::models::response::{COMMENT_MAX, PARTICIPANT_NAME_MAX};
use crate::services::summary::{summarize, Summary};
use crate::services::token;

const BEST_COLOR: Color32 = Color32::from_rgb(30, 140, 80);

/// Actions the event view hands back to the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventAction {
    None,
    /// The share link was copied; surface a confirmation.
    LinkCopied,
    BackToCreate,
    SubmitResponse,
}

/// State of the event view for one decoded token.
pub struct EventViewState {
    /// The token currently representing `data`; replaced in place after
    /// each response submission.
    pub token: String,
    pub data: EventData,
    pub participant_name: String,
    pub comment: String,
    pub answers: HashMap<String, AnswerType>,
    pub is_updating: bool,
    last_loaded_name: String,
}

impl EventViewState {
    pub fn new(token: String, data: EventData) -> Self {
        let answers = data
            .candidates
            .iter()
            .map(|c| (c.id.clone(), AnswerType::Maybe))
            .collect();
        Self {
            token,
            data,
            participant_name: String::new(),
            comment: String::new(),
            answers,
            is_updating: false,
            last_loaded_name: String::new(),
        }
    }

    /// Note a submitted response so the form stays in "update" mode.
    pub fn mark_submitted(&mut self) {
        self.is_updating = true;
        self.last_loaded_name = self.participant_name.trim().to_string();
    }

    /// When the typed name matches a stored response, prefill the form from
    /// it; otherwise reset to the all-Maybe default.
    fn sync_form_with_name(&mut self) {
        let trimmed = self.participant_name.trim().to_string();
        if trimmed == self.last_loaded_name {
            return;
        }
        self.last_loaded_name = trimmed.clone();

        if let Some(existing) = self.data.response_for(&trimmed) {
            self.answers = self
                .data
                .candidates
                .iter()
                .map(|c| (c.id.clone(), existing.effective_answer(&c.id)))
                .collect();
            self.comment = existing.comment.clone();
            self.is_updating = true;
        } else {
            self.answers = self
                .data
                .candidates
                .iter()
                .map(|c| (c.id.clone(), AnswerType::Maybe))
                .collect();
            self.comment.clear();
            self.is_updating = false;
        }
    }

    pub fn render(&mut self, ui: &mut egui::Ui) -> EventAction {
        let mut action = EventAction::None;
        self.sync_form_with_name();

        ui.heading(&self.data.event_name);
        if !self.data.description.is_empty() {
            ui.label(&self.data.description);
        }
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            if ui.button("📋 Copy share link").clicked() {
                let url = token::event_url(&self.token);
                ui.output_mut(|out| out.copied_text = url);
                action = EventAction::LinkCopied;
            }
            if ui.button("‹ Back to event creation").clicked() {
                action = EventAction::BackToCreate;
            }
        });

        ui.add_space(12.0);
        ui.separator();

        let summary = summarize(&self.data.candidates, &self.data.responses);
        self.render_summary_table(ui, &summary);

        ui.add_space(12.0);
        ui.separator();
        if self.render_response_form(ui) {
            action = EventAction::SubmitResponse;
        }

        action
    }

    fn render_summary_table(&self, ui: &mut egui::Ui, summary: &Summary) {
        if self.data.candidates.is_empty() {
            ui.label("No candidate slots.");
            return;
        }

        egui::ScrollArea::horizontal()
            .id_source("summary_table")
            .show(ui, |ui| {
                egui::Grid::new("summary_grid")
                    .striped(true)
                    .min_col_width(56.0)
                    .show(ui, |ui| {
                        ui.label(RichText::new("Date").strong());
                        for answer in AnswerType::ALL {
                            ui.label(RichText::new(answer.symbol()).strong());
                        }
                        for response in &self.data.responses {
                            ui.label(RichText::new(&response.participant_name).strong());
                        }
                        ui.end_row();

                        for candidate in &self.data.candidates {
                            let is_best = summary.is_best(&candidate.id);
                            let label = super::format_candidate(candidate);
                            if is_best {
                                ui.label(
                                    RichText::new(format!("★ {}", label))
                                        .color(BEST_COLOR)
                                        .strong(),
                                );
                            } else {
                                ui.label(label);
                            }

                            let tally = summary.tally(&candidate.id);
                            for answer in AnswerType::ALL {
                                ui.label(tally.count(answer).to_string());
                            }

                            for response in &self.data.responses {
                                ui.label(response.effective_answer(&candidate.id).symbol());
                            }
                            ui.end_row();
                        }

                        if !self.data.responses.is_empty() {
                            ui.label(RichText::new("Comment").strong());
                            for _ in AnswerType::ALL {
                                ui.label("");
                            }
                            for response in &self.data.responses {
                                ui.label(RichText::new(&response.comment).size(11.0));
                            }
                            ui.end_row();
                        }
                    });
            });
    }

    /// Returns true when the submit button was pressed.
    fn render_response_form(&mut self, ui: &mut egui::Ui) -> bool {
        ui.heading(if self.is_updating {
            "Edit your response"
        } else {
            "Add your availability"
        });
        ui.add_space(6.0);

        ui.label(RichText::new("Your name *").strong());
        ui.add(
            egui::TextEdit::singleline(&mut self.participant_name)
                .char_limit(PARTICIPANT_NAME_MAX)
                .hint_text("e.g. Alex Smith")
                .desired_width(240.0),
        );
        ui.add_space(8.0);

        egui::ScrollArea::horizontal()
            .id_source("answer_columns")
            .show(ui, |ui| {
                ui.horizontal_top(|ui| {
                    for candidate in &self.data.candidates {
                        ui.group(|ui| {
                            ui.vertical(|ui| {
                                ui.label(
                                    RichText::new(super::format_candidate(candidate)).strong(),
                                );
                                let entry = self
                                    .answers
                                    .entry(candidate.id.clone())
                                    .or_default();
                                for answer in AnswerType::ALL {
                                    ui.radio_value(
                                        entry,
                                        answer,
                                        format!("{} {}", answer.symbol(), answer.label()),
                                    );
                                }
                            });
                        });
                    }
                });
            });

        ui.add_space(8.0);
        ui.label(RichText::new("Comment (optional)").strong());
        ui.add(
            egui::TextEdit::multiline(&mut self.comment)
                .char_limit(COMMENT_MAX)
                .hint_text("Running late, can only stay an hour, ...")
                .desired_rows(2)
                .desired_width(520.0),
        );
        ui.add_space(8.0);

        let can_submit = !self.participant_name.trim().is_empty();
        let label = if self.is_updating {
            "Update response"
        } else {
            "Submit response"
        };
        ui.add_enabled(can_submit, egui::Button::new(RichText::new(label).strong()))
            .clicked()
    }
}
