//! Main application UI and state management.
//! Handles set selection, the quiz itself, the result screen and the authoring window.

use crate::skin::Skin;
use chrono::{DateTime, Local};
use eframe::egui;
use quiz_app::models::correct_answer_choices;
use quiz_app::models::question::OPTION_COUNT;
use quiz_app::models::{AnswerOutcome, SessionState};
use quiz_app::{QuestionSetDraft, QuestionSetStore, QuizError, QuizResult, QuizSession};
use std::time::SystemTime;

/// Application screen states
#[derive(Default, PartialEq)]
enum AppScreen {
    #[default]
    Setup,
    Quiz,
    Result,
}

#[derive(Clone, Copy)]
enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// Message shown in a modal window until dismissed.
struct Notice {
    kind: NoticeKind,
    message: String,
}

impl Notice {
    fn title(&self) -> &'static str {
        match self.kind {
            NoticeKind::Info => "Success",
            NoticeKind::Warning => "Warning",
            NoticeKind::Error => "Error",
        }
    }
}

/// A stored set as listed on the selection screen.
struct SetEntry {
    file_name: String,
    modified: Option<String>,
}

/// Form state of the "Create Question Set" window.
#[derive(Default)]
struct AuthoringForm {
    set_name: String,
    question_text: String,
    options: [String; OPTION_COUNT],
    correct_answer: String,
    draft: QuestionSetDraft,
}

impl AuthoringForm {
    fn clear_inputs(&mut self) {
        self.question_text.clear();
        for option in &mut self.options {
            option.clear();
        }
        self.correct_answer.clear();
    }
}

/// Main application state
pub struct QuizApp {
    store: QuestionSetStore,
    skin: Box<dyn Skin>,
    current_screen: AppScreen,

    available_sets: Vec<SetEntry>,
    selected_set_index: Option<usize>,

    session: Option<QuizSession>,
    selected_option: Option<String>,
    last_outcome: Option<AnswerOutcome>,
    result: Option<QuizResult>,

    authoring: Option<AuthoringForm>,
    notice: Option<Notice>,

    show_confirmation_dialog: bool,
    allowed_to_close: bool,
}

/// Feedback on the previous answer, shown above the next question
fn outcome_feedback(outcome: &AnswerOutcome) -> String {
    if outcome.correct {
        "Previous answer: correct".to_string()
    } else {
        format!("Previous answer: wrong (correct was \"{}\")", outcome.correct_answer)
    }
}

/// Formats SystemTime as YYYY-MM-DD string
fn format_system_time(time: SystemTime) -> String {
    let datetime: DateTime<Local> = time.into();
    datetime.format("%Y-%m-%d").to_string()
}

impl eframe::App for QuizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.current_screen {
            AppScreen::Setup => self.render_setup_screen(ctx),
            AppScreen::Quiz => self.render_quiz_screen(ctx),
            AppScreen::Result => self.render_result_screen(ctx),
        }

        if self.authoring.is_some() {
            self.render_authoring_window(ctx);
        }

        // Leaving mid-quiz loses the session, so ask first
        if ctx.input(|i| i.viewport().close_requested())
            && !self.allowed_to_close
            && self.current_screen == AppScreen::Quiz
        {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.show_confirmation_dialog = true;
        }

        if self.show_confirmation_dialog {
            egui::Window::new("Quit in the middle of the quiz?")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        if ui.button("No").clicked() {
                            self.show_confirmation_dialog = false;
                            self.allowed_to_close = false;
                        }

                        if ui.button("Yes").clicked() {
                            self.show_confirmation_dialog = false;
                            self.allowed_to_close = true;
                            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                });
        }

        let mut dismiss_notice = false;
        if let Some(notice) = &self.notice {
            egui::Window::new(notice.title())
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&notice.message);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        dismiss_notice = true;
                    }
                });
        }
        if dismiss_notice {
            self.notice = None;
        }
    }
}

impl QuizApp {
    /// Creates the application and reads the list of stored sets
    pub fn new(store: QuestionSetStore, skin: Box<dyn Skin>) -> Self {
        let mut app = Self {
            store,
            skin,
            current_screen: AppScreen::Setup,
            available_sets: Vec::new(),
            selected_set_index: None,
            session: None,
            selected_option: None,
            last_outcome: None,
            result: None,
            authoring: None,
            notice: None,
            show_confirmation_dialog: false,
            allowed_to_close: false,
        };
        app.refresh_sets();
        app
    }

    fn show_notice(&mut self, kind: NoticeKind, message: impl Into<String>) {
        self.notice = Some(Notice {
            kind,
            message: message.into(),
        });
    }

    /// Surfaces an error to the user. State is left as it was before the action.
    fn report_error(&mut self, error: QuizError) {
        if error.is_warning() {
            log::warn!("{}", error);
            self.show_notice(NoticeKind::Warning, error.to_string());
        } else {
            log::error!("{}", error);
            self.show_notice(NoticeKind::Error, error.to_string());
        }
    }

    fn refresh_sets(&mut self) {
        match self.store.list_sets() {
            Ok(sets) => {
                log::debug!("Found {} question sets", sets.len());
                self.available_sets = sets
                    .into_iter()
                    .map(|file_name| SetEntry {
                        modified: self.store.last_modified(&file_name).map(format_system_time),
                        file_name,
                    })
                    .collect();
            }
            Err(e) => self.report_error(e.into()),
        }
        if self
            .selected_set_index
            .is_some_and(|i| i >= self.available_sets.len())
        {
            self.selected_set_index = None;
        }
    }

    /// Renders the set selection screen
    fn render_setup_screen(&mut self, ctx: &egui::Context) {
        let mut action_select: Option<usize> = None;
        let mut action_load = false;
        let mut action_import = false;
        let mut action_create = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.heading(egui::RichText::new(self.skin.heading()).size(26.0).strong());
                ui.add_space(20.0);

                if ui.button("Import Questions").clicked() {
                    action_import = true;
                }
                if ui.button("Create New Question Set").clicked() {
                    action_create = true;
                }
            });

            ui.separator();
            ui.heading(format!("Existing Question Sets ({})", self.available_sets.len()));

            egui::ScrollArea::vertical()
                .id_source("question_sets_list")
                .max_height(300.0)
                .show(ui, |ui| {
                    if self.available_sets.is_empty() {
                        ui.label("No question sets yet. Import or create one.");
                    }
                    for (i, entry) in self.available_sets.iter().enumerate() {
                        let is_selected = self.selected_set_index == Some(i);
                        let label = match &entry.modified {
                            Some(date) => format!("{}  ({})", entry.file_name, date),
                            None => entry.file_name.clone(),
                        };
                        if ui.selectable_label(is_selected, label).clicked() {
                            action_select = Some(i);
                        }
                    }
                });

            ui.separator();
            ui.vertical_centered(|ui| {
                if ui.button("Load Selected Set").clicked() {
                    action_load = true;
                }
            });
        });

        // Execute deferred actions
        if let Some(i) = action_select {
            self.selected_set_index = Some(i);
        }
        if action_import {
            self.handle_import();
        }
        if action_create && self.authoring.is_none() {
            self.authoring = Some(AuthoringForm::default());
        }
        if action_load {
            self.load_selected_set();
        }
    }

    /// Loads the selected set and starts a new session on it.
    /// A failed load leaves the current screen and any previous session untouched.
    fn load_selected_set(&mut self) {
        let Some(file_name) = self
            .selected_set_index
            .and_then(|i| self.available_sets.get(i))
            .map(|entry| entry.file_name.clone())
        else {
            self.show_notice(NoticeKind::Warning, "Please select a question set");
            return;
        };

        let started = self
            .store
            .load_set(&file_name)
            .map_err(QuizError::from)
            .and_then(|set| QuizSession::start(&set.questions).map_err(QuizError::from));

        match started {
            Ok(session) => {
                log::info!("Starting quiz '{}' ({} questions)", file_name, session.total());
                self.session = Some(session);
                self.selected_option = None;
                self.last_outcome = None;
                self.result = None;
                self.current_screen = AppScreen::Quiz;
            }
            Err(e) => self.report_error(e),
        }
    }

    /// Renders the current question with its options
    fn render_quiz_screen(&mut self, ctx: &egui::Context) {
        let mut action_submit = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(session) = &self.session else {
                return;
            };
            if let Some(outcome) = &self.last_outcome {
                let color = if outcome.correct {
                    egui::Color32::from_rgb(0x27, 0xAE, 0x60)
                } else {
                    egui::Color32::from_rgb(0xC0, 0x39, 0x2B)
                };
                ui.colored_label(color, outcome_feedback(outcome));
            }
            if let Ok(question) = session.current_question() {
                self.skin.render_question(
                    ui,
                    question,
                    session.progress(),
                    &mut self.selected_option,
                );
            }

            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                if ui.button("Submit").clicked() {
                    action_submit = true;
                }
            });
        });

        if action_submit {
            self.submit_answer();
        }
    }

    /// Scores the selected option and moves on, to the result screen after the last question
    fn submit_answer(&mut self) {
        let choice = self.selected_option.clone().unwrap_or_default();
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let submitted = session.submit_answer(&choice).and_then(|outcome| {
            let result = match session.state() {
                SessionState::Complete => Some(session.result()?),
                SessionState::InProgress => None,
            };
            Ok((outcome, result))
        });

        match submitted {
            Ok((_, Some(result))) => {
                log::info!(
                    "Quiz finished: {} / {} ({})",
                    result.score,
                    result.total,
                    result.percentage_label()
                );
                self.selected_option = None;
                self.last_outcome = None;
                self.result = Some(result);
                self.current_screen = AppScreen::Result;
            }
            Ok((outcome, None)) => {
                log::debug!("{}", outcome_feedback(&outcome));
                self.selected_option = None;
                self.last_outcome = Some(outcome);
            }
            Err(e) => self.report_error(e.into()),
        }
    }

    /// Renders the final score with a restart control
    fn render_result_screen(&mut self, ctx: &egui::Context) {
        let mut action_restart = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(result) = &self.result {
                self.skin.render_result(ui, result);
            }

            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                if ui.button("Restart Quiz").clicked() {
                    action_restart = true;
                }
            });
        });

        if action_restart {
            self.restart();
        }
    }

    /// Discards the finished session and returns to set selection
    fn restart(&mut self) {
        self.session = None;
        self.result = None;
        self.selected_option = None;
        self.last_outcome = None;
        self.current_screen = AppScreen::Setup;
        self.refresh_sets();
    }

    /// Renders the "Create Question Set" window
    fn render_authoring_window(&mut self, ctx: &egui::Context) {
        let mut action_add = false;
        let mut action_save = false;
        let mut action_cancel = false;

        let Some(form) = &mut self.authoring else {
            return;
        };

        egui::Window::new("Create Question Set")
            .collapsible(false)
            .default_width(480.0)
            .show(ctx, |ui| {
                ui.label("Question Set Name:");
                ui.text_edit_singleline(&mut form.set_name);

                ui.add_space(10.0);
                ui.label("Question Text:");
                ui.add(egui::TextEdit::multiline(&mut form.question_text).desired_rows(3));

                ui.add_space(10.0);
                egui::Grid::new("options_grid")
                    .num_columns(2)
                    .spacing([5.0, 5.0])
                    .show(ui, |ui| {
                        for (i, option) in form.options.iter_mut().enumerate() {
                            ui.label(format!("Option {}:", i + 1));
                            ui.text_edit_singleline(option);
                            ui.end_row();
                        }
                    });

                ui.add_space(10.0);
                ui.label("Correct Answer:");
                let choices = correct_answer_choices(&form.options);
                if !choices.contains(&form.correct_answer) {
                    form.correct_answer.clear();
                }
                egui::ComboBox::from_id_source("correct_answer")
                    .selected_text(form.correct_answer.clone())
                    .width(300.0)
                    .show_ui(ui, |ui| {
                        for choice in choices {
                            ui.selectable_value(&mut form.correct_answer, choice.clone(), choice);
                        }
                    });

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("Add Question").clicked() {
                        action_add = true;
                    }
                    if ui.button("Save Question Set").clicked() {
                        action_save = true;
                    }
                    if ui.button("Cancel").clicked() {
                        action_cancel = true;
                    }
                });

                ui.separator();
                ui.label(format!("Added Questions ({}):", form.draft.len()));
                egui::ScrollArea::vertical()
                    .id_source("added_questions_list")
                    .max_height(120.0)
                    .show(ui, |ui| {
                        for summary in form.draft.summaries() {
                            ui.label(summary);
                        }
                    });
            });

        // Execute deferred actions
        if action_add {
            self.add_authoring_question();
        }
        if action_save {
            self.save_authoring_set();
        }
        if action_cancel {
            self.authoring = None;
        }
    }

    /// Validates the form and appends the question to the draft
    fn add_authoring_question(&mut self) {
        let Some(form) = self.authoring.as_mut() else {
            return;
        };

        let added = form
            .draft
            .add_question(&form.question_text, &form.options, &form.correct_answer)
            .map(|_| ());

        match added {
            Ok(()) => form.clear_inputs(),
            Err(e) => self.report_error(e.into()),
        }
    }

    /// Writes the draft to the store and closes the window
    fn save_authoring_set(&mut self) {
        let Some(form) = self.authoring.as_ref() else {
            return;
        };

        let saved = form
            .draft
            .finish(&form.set_name)
            .map_err(QuizError::from)
            .and_then(|set| {
                self.store
                    .save_set(&set.name, &set.questions)
                    .map(|_| set.name)
                    .map_err(QuizError::from)
            });

        match saved {
            Ok(name) => {
                self.authoring = None;
                self.show_notice(
                    NoticeKind::Info,
                    format!("Question set '{}' saved successfully", name),
                );
                self.refresh_sets();
            }
            Err(e) => self.report_error(e),
        }
    }

    /// Handles question set import from a JSON file
    fn handle_import(&mut self) {
        // Open file selection dialog
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON files", &["json"])
            .pick_file()
        else {
            return;
        };

        match self.store.import_set(&path) {
            Ok(file_name) => {
                self.show_notice(
                    NoticeKind::Info,
                    format!("Questions imported from {}", file_name),
                );
                self.refresh_sets();
            }
            Err(e) => self.report_error(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_feedback() {
        let correct = AnswerOutcome {
            correct: true,
            correct_answer: "4".to_string(),
        };
        let wrong = AnswerOutcome {
            correct: false,
            correct_answer: "Paris".to_string(),
        };

        assert_eq!(outcome_feedback(&correct), "Previous answer: correct");
        assert_eq!(
            outcome_feedback(&wrong),
            "Previous answer: wrong (correct was \"Paris\")"
        );
    }

    #[test]
    fn test_submitted_outcome_reaches_feedback() {
        let questions = quiz_app::store::json_store::sample_questions();
        let mut session = QuizSession::start(&questions).unwrap();

        let outcome = session.submit_answer("not an option").unwrap();
        assert!(!outcome.correct);
        assert_eq!(session.state(), SessionState::InProgress);
        assert!(outcome_feedback(&outcome).contains(&outcome.correct_answer));
    }
}
