//! Event creation view: name and description fields, the weekly picker,
//! and the selected-candidates panel.

use egui::RichText;

use super::week_picker::WeekPicker;
use crate::models::event_data::{DESCRIPTION_MAX, EVENT_NAME_MAX};
use crate::services::candidate_set::CandidateSet;

/// State of the creation form.
pub struct CreateViewState {
    pub event_name: String,
    pub description: String,
    pub candidates: CandidateSet,
    picker: WeekPicker,
}

/// What the create view reported this frame.
#[derive(Debug, Default)]
pub struct CreateOutput {
    /// The user pressed the create button with a valid form.
    pub submit: bool,
    /// A candidate was rejected by the 20-slot cap.
    pub cap_hit: bool,
}

impl Default for CreateViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateViewState {
    pub fn new() -> Self {
        Self {
            event_name: String::new(),
            description: String::new(),
            candidates: CandidateSet::new(),
            picker: WeekPicker::new(),
        }
    }

    pub fn render(&mut self, ui: &mut egui::Ui) -> CreateOutput {
        let mut output = CreateOutput::default();

        ui.heading("Create a new event");
        ui.add_space(8.0);

        ui.label(RichText::new("Event name *").strong());
        ui.add(
            egui::TextEdit::singleline(&mut self.event_name)
                .char_limit(EVENT_NAME_MAX)
                .hint_text("e.g. Team dinner, project kickoff")
                .desired_width(360.0),
        );
        ui.add_space(6.0);

        ui.label(RichText::new("Description (optional)").strong());
        ui.add(
            egui::TextEdit::multiline(&mut self.description)
                .char_limit(DESCRIPTION_MAX)
                .hint_text("Venue link, notes, anything attendees should know")
                .desired_rows(3)
                .desired_width(520.0),
        );
        ui.add_space(10.0);

        ui.label(RichText::new("Candidate slots *").strong());
        ui.label(
            RichText::new(
                "Drag on the calendar to select a time range, or click to create a \
                 30-minute slot. Day headers toggle all-day candidates.",
            )
            .size(11.0)
            .weak(),
        );
        ui.add_space(4.0);

        let picker_output = self.picker.show(ui, &mut self.candidates);
        output.cap_hit = picker_output.cap_hit;

        ui.add_space(8.0);
        self.render_selected_panel(ui);
        ui.add_space(12.0);

        let can_submit = !self.event_name.trim().is_empty() && !self.candidates.is_empty();
        ui.vertical_centered(|ui| {
            if ui
                .add_enabled(
                    can_submit,
                    egui::Button::new(RichText::new("Create event and share the link").strong()),
                )
                .clicked()
            {
                output.submit = true;
            }
        });

        output
    }

    fn render_selected_panel(&mut self, ui: &mut egui::Ui) {
        if self.candidates.is_empty() {
            ui.group(|ui| {
                ui.label(RichText::new("Three steps to a scheduled meeting").strong());
                ui.label("1. Name the event");
                ui.label("2. Drag candidate slots on the calendar");
                ui.label("3. Create the event and share the link");
            });
            return;
        }

        ui.label(
            RichText::new(format!("Selected candidates ({})", self.candidates.len())).strong(),
        );
        let mut to_remove = None;
        ui.horizontal_wrapped(|ui| {
            for candidate in self.candidates.candidates() {
                ui.group(|ui| {
                    ui.label(RichText::new(super::format_candidate(candidate)).size(11.0));
                    if ui.small_button("✕").clicked() {
                        to_remove = Some(candidate.id.clone());
                    }
                });
            }
        });
        if let Some(id) = to_remove {
            self.candidates.remove(&id);
        }
    }
}
