//! Headless demo binary
//!
//! Runs a short scripted duel against a null renderer. Pass a config
//! JSON path as the first argument and an asset directory as the
//! second; both are optional.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use tank_duel::app::GameApp;
use tank_duel::assets::AssetCatalog;
use tank_duel::config::GameConfig;
use tank_duel::input::{InputEvent, ScriptedInput};
use tank_duel::render::NullRenderer;
use tank_duel::sim::GameState;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match GameConfig::from_file(Path::new(&path)) {
            Ok(config) => config,
            Err(err) => {
                log::error!("failed to load config {path}: {err}");
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    if let Some(dir) = args.next() {
        match AssetCatalog::load(Path::new(&dir)) {
            Ok(_) => log::info!("all textures resolved under {dir}"),
            Err(err) => {
                log::error!("{err}");
                std::process::exit(1);
            }
        }
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0);
    log::info!("seed {seed}");

    let state = GameState::new(config, seed);
    let mut app = GameApp::new(state);
    let mut input = demo_script();
    app.run(&mut NullRenderer, &mut input);

    println!(
        "scores after {} ticks: player 1 = {}, player 2 = {}",
        app.state.time_ticks, app.state.scores[0], app.state.scores[1]
    );
}

/// A canned duel: charge a shot at the sky, release, then watch the
/// fallout for two seconds.
fn demo_script() -> ScriptedInput {
    let mut script = ScriptedInput::new();
    script.push_frame(vec![
        InputEvent::PointerMoved(Vec2::new(1200.0, 600.0)),
        InputEvent::PointerDown,
    ]);
    script.idle_frames(30);
    script.push_frame(vec![InputEvent::PointerUp]);
    script.idle_frames(240);
    script.end_with_quit = true;
    script
}
