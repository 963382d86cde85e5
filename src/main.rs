mod app;
mod skin;

use app::QuizApp;
use quiz_app::{AppConfig, QuestionSetStore};

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    let store = QuestionSetStore::new(config.sets_dir.clone());

    match store.seed_sample_set() {
        Ok(true) => log::info!("Sample question set created in '{}'", store.root().display()),
        Ok(false) => {}
        Err(e) => log::warn!("Could not create sample question set: {}", e),
    }

    match store.list_sets() {
        Ok(sets) => {
            log::info!("Found {} question sets in '{}'", sets.len(), store.root().display());
            for set in &sets {
                log::info!("  - {}", set);
            }
        }
        Err(e) => log::error!("{}", e),
    }

    let skin = skin::skin_for(config.skin);
    let title = skin.window_title();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(skin.window_size())
            .with_resizable(skin.resizable()),
        ..Default::default()
    };
    eframe::run_native(
        title,
        options,
        Box::new(move |cc| {
            skin.apply(&cc.egui_ctx);
            Ok(Box::new(QuizApp::new(store, skin)))
        }),
    )
}
