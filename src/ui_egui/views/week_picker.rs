//! The weekly time picker: a 7-day by 24-hour grid where candidate slots
//! are drawn, moved, and resized with the pointer.
//!
//! All gesture math lives in [`interaction`](crate::ui_egui::interaction)
//! and [`geometry`](crate::ui_egui::geometry); this module only maps egui
//! input onto those transitions and paints the result.

use chrono::{Datelike, Local, Months, NaiveDate};
use egui::{Align2, Color32, CursorIcon, FontId, Pos2, Rect, RichText, Sense, Shape, Stroke, Vec2};

use crate::models::candidate::Candidate;
use crate::services::candidate_set::CandidateSet;
use crate::ui_egui::geometry::{GridGeometry, DAYS_SHOWN, HOUR_HEIGHT};
use crate::ui_egui::interaction::{Interaction, ResizeEdge};
use crate::utils::date::week_days;

/// Width of the hour-label gutter.
const TIME_LABEL_WIDTH: f32 = 48.0;
/// Reserved for the scroll bar so the day header lines up with the grid.
const SCROLLBAR_ALLOWANCE: f32 = 15.0;
/// Height of the visible timeline window (the rest scrolls).
const VISIBLE_HOURS: f32 = 12.0;
/// Hit zone at a block's top and bottom edge that starts a resize.
const HANDLE_ZONE: f32 = 8.0;

/// What the picker wants the caller to surface after a frame.
#[derive(Debug, Default)]
pub struct WeekPickerOutput {
    /// A slot was rejected because the candidate cap was reached.
    pub cap_hit: bool,
}

/// State of the weekly picker widget.
pub struct WeekPicker {
    /// First displayed day; the grid shows this day and the six after it.
    view_date: NaiveDate,
    interaction: Interaction,
    scroll_initialized: bool,
}

impl Default for WeekPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl WeekPicker {
    pub fn new() -> Self {
        Self {
            view_date: Local::now().date_naive(),
            interaction: Interaction::Idle,
            scroll_initialized: false,
        }
    }

    /// Render the picker and apply gesture mutations to `candidates`.
    pub fn show(&mut self, ui: &mut egui::Ui, candidates: &mut CandidateSet) -> WeekPickerOutput {
        let mut output = WeekPickerOutput::default();
        let days = week_days(self.view_date);

        self.render_navigation(ui, &days);
        ui.add_space(4.0);
        self.render_day_headers(ui, &days, candidates, &mut output);
        ui.add_space(2.0);

        let scroll = egui::ScrollArea::vertical()
            .id_source("week_picker_grid")
            .max_height(VISIBLE_HOURS * HOUR_HEIGHT)
            .auto_shrink([false, false]);
        // Land on working hours the first time the grid appears
        let scroll = if self.scroll_initialized {
            scroll
        } else {
            self.scroll_initialized = true;
            scroll.vertical_scroll_offset(9.0 * HOUR_HEIGHT)
        };

        scroll.show(ui, |ui| {
            self.render_grid(ui, &days, candidates, &mut output);
        });

        output
    }

    fn render_navigation(&mut self, ui: &mut egui::Ui, days: &[NaiveDate; 7]) {
        ui.horizontal(|ui| {
            if ui.button("Today").clicked() {
                self.view_date = Local::now().date_naive();
            }
            if ui.button("«").on_hover_text("Previous month").clicked() {
                self.view_date = self
                    .view_date
                    .checked_sub_months(Months::new(1))
                    .unwrap_or(self.view_date);
            }
            if ui.button("‹").on_hover_text("Previous week").clicked() {
                self.view_date -= chrono::Duration::weeks(1);
            }

            // Title from the middle of the displayed range
            ui.add_space(12.0);
            ui.label(RichText::new(days[3].format("%B %Y").to_string()).strong());
            ui.add_space(12.0);

            if ui.button("›").on_hover_text("Next week").clicked() {
                self.view_date += chrono::Duration::weeks(1);
            }
            if ui.button("»").on_hover_text("Next month").clicked() {
                self.view_date = self
                    .view_date
                    .checked_add_months(Months::new(1))
                    .unwrap_or(self.view_date);
            }
        });
    }

    /// Day-of-week headers double as all-day toggles.
    fn render_day_headers(
        &mut self,
        ui: &mut egui::Ui,
        days: &[NaiveDate; 7],
        candidates: &mut CandidateSet,
        output: &mut WeekPickerOutput,
    ) {
        let today = Local::now().date_naive();
        let col_width =
            (ui.available_width() - TIME_LABEL_WIDTH - SCROLLBAR_ALLOWANCE) / DAYS_SHOWN as f32;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.add_space(TIME_LABEL_WIDTH);

            for day in days {
                let selected = candidates.has_all_day_on(*day);
                let fill = if selected {
                    Color32::from_rgba_unmultiplied(70, 130, 240, 60)
                } else if *day == today {
                    Color32::from_rgba_unmultiplied(90, 200, 140, 40)
                } else {
                    Color32::TRANSPARENT
                };

                let text = format!("{}\n{}", day.format("%a"), day.day());
                let button = egui::Button::new(RichText::new(text).size(12.0))
                    .fill(fill)
                    .min_size(Vec2::new(col_width, 40.0));

                if ui
                    .add(button)
                    .on_hover_text("Toggle an all-day candidate")
                    .clicked()
                    && candidates.toggle_all_day(*day).is_err()
                {
                    output.cap_hit = true;
                }
            }
        });
    }

    fn render_grid(
        &mut self,
        ui: &mut egui::Ui,
        days: &[NaiveDate; 7],
        candidates: &mut CandidateSet,
        output: &mut WeekPickerOutput,
    ) {
        let grid_height = 24.0 * HOUR_HEIGHT;

        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;

            // Hour label gutter
            let (label_rect, _) = ui.allocate_exact_size(
                Vec2::new(TIME_LABEL_WIDTH, grid_height),
                Sense::hover(),
            );
            for hour in 1..24 {
                ui.painter().text(
                    Pos2::new(
                        label_rect.right() - 6.0,
                        label_rect.top() + hour as f32 * HOUR_HEIGHT,
                    ),
                    Align2::RIGHT_CENTER,
                    format!("{}:00", hour),
                    FontId::proportional(10.0),
                    Color32::GRAY,
                );
            }

            // Interactive grid surface
            let grid_width = ui.available_width();
            let (rect, _response) = ui.allocate_exact_size(
                Vec2::new(grid_width, grid_height),
                Sense::click_and_drag(),
            );
            let geometry = GridGeometry::new(days[0], grid_width);

            self.paint_grid_lines(ui, rect, &geometry);
            let (blocks, to_remove) = self.paint_candidates(ui, rect, &geometry, candidates);
            self.paint_selection_box(ui, rect, &geometry);

            if let Some(id) = to_remove {
                candidates.remove(&id);
            } else {
                self.handle_pointer(ui, rect, &geometry, &blocks, candidates, output);
            }
        });
    }

    fn paint_grid_lines(&self, ui: &egui::Ui, rect: Rect, geometry: &GridGeometry) {
        let painter = ui.painter();
        let line = Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color);

        for hour in 0..24 {
            let y = rect.top() + hour as f32 * HOUR_HEIGHT;
            painter.line_segment(
                [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
                line,
            );
        }
        for day_index in 0..DAYS_SHOWN {
            let (x0, _) = geometry.day_x_range(day_index);
            painter.line_segment(
                [
                    Pos2::new(rect.left() + x0, rect.top()),
                    Pos2::new(rect.left() + x0, rect.bottom()),
                ],
                line,
            );
        }
    }

    /// Paint timed candidate blocks, returning their hitboxes in z-order and
    /// the id of a block whose delete button was clicked, if any.
    fn paint_candidates(
        &self,
        ui: &mut egui::Ui,
        rect: Rect,
        geometry: &GridGeometry,
        candidates: &CandidateSet,
    ) -> (Vec<(Rect, Candidate)>, Option<String>) {
        let mut blocks = Vec::new();
        let mut to_remove = None;
        let hover_pos = ui.input(|i| i.pointer.hover_pos());

        for candidate in candidates.candidates() {
            if candidate.is_all_day {
                continue;
            }
            let Some(day_index) = geometry.day_index_of(candidate.day()) else {
                continue;
            };

            let (x0, x1) = geometry.day_x_range(day_index);
            let top = GridGeometry::time_to_offset(candidate.start_date);
            let bottom = GridGeometry::time_to_offset(candidate.end_date);
            let block = Rect::from_min_max(
                Pos2::new(rect.left() + x0 + 2.0, rect.top() + top),
                Pos2::new(rect.left() + x1 - 2.0, rect.top() + bottom.max(top + 10.0)),
            );

            let is_active = self.interaction.active_candidate_id() == Some(candidate.id.as_str());
            let fill_alpha = if is_active { 110 } else { 70 };
            ui.painter().rect_filled(
                block,
                4.0,
                Color32::from_rgba_unmultiplied(70, 130, 240, fill_alpha),
            );
            ui.painter().rect_stroke(
                block,
                4.0,
                Stroke::new(1.0, Color32::from_rgb(70, 130, 240)),
            );

            if block.height() >= 16.0 {
                let label = format!(
                    "{} - {}",
                    candidate.start_date.format("%H:%M"),
                    candidate.end_date.format("%H:%M")
                );
                ui.painter().text(
                    block.center(),
                    Align2::CENTER_CENTER,
                    label,
                    FontId::proportional(10.0),
                    Color32::from_rgb(25, 60, 140),
                );
            }

            // Hover affordances: delete button and resize cursor
            let hovered = hover_pos.is_some_and(|p| block.contains(p));
            if hovered && self.interaction.is_idle() {
                if let Some(pos) = hover_pos {
                    if Self::handle_at(block, pos).is_some() {
                        ui.ctx().set_cursor_icon(CursorIcon::ResizeVertical);
                    } else {
                        ui.ctx().set_cursor_icon(CursorIcon::Grab);
                    }
                }

                if ui
                    .put(Self::delete_zone(block), egui::Button::new("✕").small())
                    .on_hover_text("Remove this slot")
                    .clicked()
                {
                    to_remove = Some(candidate.id.clone());
                }
            }

            blocks.push((block, candidate.clone()));
        }

        (blocks, to_remove)
    }

    fn paint_selection_box(&self, ui: &egui::Ui, rect: Rect, geometry: &GridGeometry) {
        let Some((day_index, from, to)) = self.interaction.selection_span() else {
            return;
        };

        let y0 = GridGeometry::time_to_offset(from);
        let y1 = GridGeometry::time_to_offset(to);
        if y1 - y0 < 5.0 {
            return;
        }

        let (x0, x1) = geometry.day_x_range(day_index);
        let selection = Rect::from_min_max(
            Pos2::new(rect.left() + x0, rect.top() + y0),
            Pos2::new(rect.left() + x1, rect.top() + y1),
        );

        let painter = ui.painter();
        painter.rect_filled(
            selection,
            4.0,
            Color32::from_rgba_unmultiplied(70, 130, 240, 40),
        );
        let stroke = Stroke::new(1.5, Color32::from_rgb(70, 130, 240));
        let corners = [
            selection.left_top(),
            selection.right_top(),
            selection.right_bottom(),
            selection.left_bottom(),
            selection.left_top(),
        ];
        for edge in corners.windows(2) {
            painter.extend(Shape::dashed_line(edge, stroke, 6.0, 4.0));
        }
    }

    fn handle_pointer(
        &mut self,
        ui: &mut egui::Ui,
        rect: Rect,
        geometry: &GridGeometry,
        blocks: &[(Rect, Candidate)],
        candidates: &mut CandidateSet,
        output: &mut WeekPickerOutput,
    ) {
        let (pressed, released, pointer_pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.interact_pos().or_else(|| i.pointer.hover_pos()),
            )
        });

        // Gestures end at the edge of the visible grid surface
        let surface = rect.intersect(ui.clip_rect());

        if pressed && self.interaction.is_idle() {
            if let Some(pos) = pointer_pos.filter(|p| surface.contains(*p)) {
                let local = pos - rect.min;
                self.interaction = Self::begin_gesture(geometry, blocks, pos, local.x, local.y);
            }
        }

        if !self.interaction.is_idle() {
            match pointer_pos {
                Some(pos) if surface.contains(pos) => {
                    let local = pos - rect.min;
                    if let Some(update) = self.interaction.pointer_moved(geometry, local.x, local.y)
                    {
                        candidates.update(&update.candidate_id, update.start, update.end);
                    }
                    if released {
                        self.complete_gesture(candidates, output);
                    } else {
                        ui.ctx().request_repaint();
                    }
                }
                // Pointer left the surface: complete exactly like a release
                _ => self.complete_gesture(candidates, output),
            }
        }
    }

    /// Resolve a pointer-down into the gesture it starts.
    fn begin_gesture(
        geometry: &GridGeometry,
        blocks: &[(Rect, Candidate)],
        pos: Pos2,
        local_x: f32,
        local_y: f32,
    ) -> Interaction {
        // Topmost block wins; presses on a delete button start no gesture
        for (block, candidate) in blocks.iter().rev() {
            if !block.contains(pos) {
                continue;
            }
            if Self::delete_zone(*block).contains(pos) {
                return Interaction::Idle;
            }
            return match Self::handle_at(*block, pos) {
                Some(edge) => Interaction::begin_resizing(candidate, edge),
                None => Interaction::begin_moving(candidate, geometry, local_x, local_y),
            };
        }

        Interaction::begin_drawing(geometry, local_x, local_y)
    }

    fn complete_gesture(&mut self, candidates: &mut CandidateSet, output: &mut WeekPickerOutput) {
        let end = self.interaction.finish();
        if let Some(slot) = end.new_slot {
            if candidates.add(slot.start, slot.end, false).is_err() {
                output.cap_hit = true;
            }
        } else if end.settled {
            candidates.settle();
        }
    }

    fn handle_at(block: Rect, pos: Pos2) -> Option<ResizeEdge> {
        if pos.y <= block.top() + HANDLE_ZONE {
            Some(ResizeEdge::Start)
        } else if pos.y >= block.bottom() - HANDLE_ZONE {
            Some(ResizeEdge::End)
        } else {
            None
        }
    }

    fn delete_zone(block: Rect) -> Rect {
        Rect::from_center_size(
            Pos2::new(block.right() - 10.0, block.top() + 10.0),
            Vec2::splat(16.0),
        )
    }
}
