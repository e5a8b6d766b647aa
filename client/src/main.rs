mod camera;
mod input;
mod render;
mod settings;
mod textures;

use anyhow::{Context, Result};
use camera::follow_camera;
use input::{input_handler, quit_requested};
use macroquad::Window;
use macroquad::camera::{set_camera, set_default_camera};
use macroquad::time::{get_frame_time, get_time};
use macroquad::window::{Conf, clear_background, next_frame, screen_height, screen_width};
use render::{SKY, draw_debug_overlay, render};
use settings::{Bindings, Settings};
use textures::PlayerTextures;
use tilewalk_shared::map::TileMap;
use tilewalk_shared::state::Player;

const SETTINGS_PATH: &str = "settings.json";

fn window_conf(settings: &Settings) -> Conf {
    Conf {
        window_title: settings.window.title.clone(),
        window_width: settings.window.width as i32,
        window_height: settings.window.height as i32,
        high_dpi: false,
        fullscreen: settings.window.fullscreen,
        sample_count: 1,
        window_resizable: true,
        ..Default::default()
    }
}

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let (settings, bindings) = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e:#}");
            std::process::exit(1);
        }
    };

    Window::from_config(window_conf(&settings), async move {
        if let Err(e) = run(settings, bindings).await {
            log::error!("{e:#}");
        }
    });
}

fn load_config() -> Result<(Settings, Bindings)> {
    let settings = Settings::load(SETTINGS_PATH)?;
    let bindings = settings.controls.bindings().context("invalid controls")?;
    Ok((settings, bindings))
}

async fn run(settings: Settings, bindings: Bindings) -> Result<()> {
    let map = TileMap::load(&settings.map)
        .with_context(|| format!("load map {}", settings.map.display()))?;
    let textures = PlayerTextures::load().await?;
    let mut player = Player::new(map.spawn_point(), get_time());

    loop {
        if quit_requested() {
            break;
        }

        // Update
        let commands = input_handler(&bindings);
        player.state.mutate(&commands, &map, get_frame_time());
        let camera = follow_camera(&player, screen_width(), screen_height());

        // Render
        clear_background(SKY);
        set_camera(&camera);
        render(&mut player, &map, &textures, get_time());

        set_default_camera();
        if settings.debug_overlay {
            draw_debug_overlay(&player);
        }

        next_frame().await;
    }

    textures.cleanup();
    Ok(())
}
