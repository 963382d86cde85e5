//! Presentation skins. Both share the same screens and engine; they only
//! differ in window chrome, palette and how a question and the result are drawn.

use eframe::egui::{self, Color32, RichText};
use quiz_app::{PerformanceTier, Question, QuizResult, SkinKind};

pub trait Skin {
    fn window_title(&self) -> &'static str;
    fn window_size(&self) -> [f32; 2];
    fn resizable(&self) -> bool;
    /// Heading on the set selection screen.
    fn heading(&self) -> &'static str;
    /// Installs the skin's visuals. Called once at startup.
    fn apply(&self, ctx: &egui::Context);
    fn render_question(
        &self,
        ui: &mut egui::Ui,
        question: &Question,
        progress: (usize, usize),
        selected: &mut Option<String>,
    );
    fn render_result(&self, ui: &mut egui::Ui, result: &QuizResult);
}

pub fn skin_for(kind: SkinKind) -> Box<dyn Skin> {
    match kind {
        SkinKind::Plain => Box::new(PlainSkin),
        SkinKind::Modern => Box::new(ModernSkin),
    }
}

pub struct PlainSkin;

impl Skin for PlainSkin {
    fn window_title(&self) -> &'static str {
        "Competitive Exam Quiz App"
    }

    fn window_size(&self) -> [f32; 2] {
        [600.0, 700.0]
    }

    fn resizable(&self) -> bool {
        true
    }

    fn heading(&self) -> &'static str {
        "Quiz Application"
    }

    fn apply(&self, _ctx: &egui::Context) {
        log::debug!("Using plain skin");
    }

    fn render_question(
        &self,
        ui: &mut egui::Ui,
        question: &Question,
        progress: (usize, usize),
        selected: &mut Option<String>,
    ) {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.label(RichText::new(&question.text).size(18.0));
            ui.add_space(20.0);

            for option in &question.options {
                ui.radio_value(selected, Some(option.clone()), RichText::new(option).size(16.0));
                ui.add_space(10.0);
            }

            ui.add_space(10.0);
            ui.label(format!("Question {} of {}", progress.0, progress.1));
        });
    }

    fn render_result(&self, ui: &mut egui::Ui, result: &QuizResult) {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.heading(RichText::new("Quiz Completed!").size(26.0).strong());
            ui.add_space(10.0);
            ui.label(
                RichText::new(format!("Your Score: {} / {}", result.score, result.total)).size(20.0),
            );
            ui.add_space(10.0);
            ui.label(RichText::new(format!("Percentage: {}", result.percentage_label())).size(18.0));
            ui.add_space(10.0);
            ui.label(RichText::new(result.tier().message()).size(18.0).strong());
        });
    }
}

/// Flat themed look with a palette for both the dark and the light theme.
pub struct ModernSkin;

struct Palette {
    background: Color32,
    text: Color32,
    accent: Color32,
    button: Color32,
}

impl Palette {
    fn for_mode(dark: bool) -> Self {
        if dark {
            Self {
                background: Color32::from_rgb(0x1E, 0x1E, 0x1E),
                text: Color32::WHITE,
                accent: Color32::from_rgb(0x34, 0x98, 0xDB),
                button: Color32::from_rgb(0x2C, 0x3E, 0x50),
            }
        } else {
            Self {
                background: Color32::from_rgb(0xF5, 0xF5, 0xF5),
                text: Color32::from_rgb(0x33, 0x33, 0x33),
                accent: Color32::from_rgb(0x29, 0x80, 0xB9),
                button: Color32::from_rgb(0xEC, 0xF0, 0xF1),
            }
        }
    }
}

fn tier_color(tier: PerformanceTier, accent: Color32) -> Color32 {
    match tier {
        PerformanceTier::Excellent => Color32::from_rgb(0x27, 0xAE, 0x60),
        PerformanceTier::Great => accent,
        PerformanceTier::Good => Color32::from_rgb(0xE6, 0x7E, 0x22),
        PerformanceTier::NeedsPractice => Color32::from_rgb(0xC0, 0x39, 0x2B),
    }
}

fn modern_style(base: &egui::Style, theme: egui::Theme) -> egui::Style {
    let dark = matches!(theme, egui::Theme::Dark);
    let palette = Palette::for_mode(dark);

    let mut visuals = if dark {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    visuals.panel_fill = palette.background;
    visuals.window_fill = palette.background;
    visuals.override_text_color = Some(palette.text);
    visuals.selection.bg_fill = palette.accent;
    visuals.widgets.inactive.bg_fill = palette.button;
    visuals.widgets.inactive.weak_bg_fill = palette.button;
    visuals.widgets.hovered.weak_bg_fill = palette.accent;
    visuals.widgets.active.weak_bg_fill = palette.accent;

    let mut style = base.clone();
    style.visuals = visuals;
    style.spacing.button_padding = egui::vec2(12.0, 8.0);
    style.spacing.item_spacing = egui::vec2(10.0, 10.0);
    style
}

impl Skin for ModernSkin {
    fn window_title(&self) -> &'static str {
        "Smart Quiz"
    }

    fn window_size(&self) -> [f32; 2] {
        [800.0, 700.0]
    }

    fn resizable(&self) -> bool {
        false
    }

    fn heading(&self) -> &'static str {
        "Smart Quiz"
    }

    /// Installs the palette for both themes, so a later switch between the
    /// system's dark and light mode keeps the skin.
    fn apply(&self, ctx: &egui::Context) {
        log::debug!("Using modern skin");
        for theme in [egui::Theme::Dark, egui::Theme::Light] {
            let style = modern_style(&ctx.style_of(theme), theme);
            ctx.set_style_of(theme, style);
        }
    }

    fn render_question(
        &self,
        ui: &mut egui::Ui,
        question: &Question,
        progress: (usize, usize),
        selected: &mut Option<String>,
    ) {
        let (position, total) = progress;
        ui.add(
            egui::ProgressBar::new(position as f32 / total.max(1) as f32)
                .text(format!("Question {} of {}", position, total)),
        );
        ui.add_space(16.0);

        egui::Frame::group(ui.style())
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(&question.text).size(20.0).strong());
                ui.add_space(16.0);

                for option in &question.options {
                    ui.radio_value(selected, Some(option.clone()), RichText::new(option).size(16.0));
                }
            });
    }

    fn render_result(&self, ui: &mut egui::Ui, result: &QuizResult) {
        let accent = ui.visuals().selection.bg_fill;
        let tier = result.tier();

        ui.vertical_centered(|ui| {
            ui.add_space(30.0);
            ui.heading(RichText::new("Quiz Completed!").size(28.0).strong());
            ui.add_space(20.0);

            egui::Frame::group(ui.style())
                .inner_margin(20.0)
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new(format!("{} / {}", result.score, result.total))
                                .size(36.0)
                                .color(accent)
                                .strong(),
                        );
                        ui.label(RichText::new(result.percentage_label()).size(20.0));
                        ui.add_space(10.0);
                        ui.label(
                            RichText::new(tier.message())
                                .size(20.0)
                                .color(tier_color(tier, accent))
                                .strong(),
                        );
                    });
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skin_for_kind() {
        assert_eq!(skin_for(SkinKind::Plain).window_title(), "Competitive Exam Quiz App");
        assert_eq!(skin_for(SkinKind::Modern).window_title(), "Smart Quiz");
        assert_eq!(skin_for(SkinKind::Modern).window_size(), [800.0, 700.0]);
    }

    #[test]
    fn test_palettes_differ_by_mode() {
        let dark = Palette::for_mode(true);
        let light = Palette::for_mode(false);
        assert_ne!(dark.background, light.background);
        assert_ne!(dark.accent, light.accent);
        assert_eq!(dark.text, Color32::WHITE);
    }

    #[test]
    fn test_modern_skin_styles_both_themes() {
        let ctx = egui::Context::default();
        ModernSkin.apply(&ctx);

        let dark = ctx.style_of(egui::Theme::Dark);
        let light = ctx.style_of(egui::Theme::Light);
        assert_eq!(dark.visuals.panel_fill, Palette::for_mode(true).background);
        assert_eq!(light.visuals.panel_fill, Palette::for_mode(false).background);
        assert!(dark.visuals.dark_mode);
        assert!(!light.visuals.dark_mode);
    }

    #[test]
    fn test_tier_colors() {
        let accent = Color32::from_rgb(1, 2, 3);
        assert_eq!(tier_color(PerformanceTier::Great, accent), accent);
        assert_ne!(
            tier_color(PerformanceTier::Excellent, accent),
            tier_color(PerformanceTier::NeedsPractice, accent)
        );
    }
}
