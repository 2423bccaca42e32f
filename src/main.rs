mod animation;
mod audio;
mod config;
mod error;
mod game;
mod gui;
mod host;
mod input_system;
mod localization;
mod platform;
mod render;
mod text;
mod video;

use audio::VolumeController;
use config::{CONFIG_PATH, SCREEN_HEIGHT, SCREEN_WIDTH, ShellConfig};
use game::{Shell, TickOutcome};
use host::{KiraAudio, SdlAssets, SdlInput, SdlRenderer};
use log::{error, info, warn};
use platform::AssetLoader;
use sdl2::event::Event;
use sdl2::pixels::Color;
use sdl2::render::BlendMode;
use std::time::{Duration, Instant};
use video::FrameSource;

/// Opens the audio device and loads the menu track
///
/// Any failure leaves the shell running without music.
fn load_music(config: &ShellConfig, assets: &SdlAssets) -> VolumeController<KiraAudio> {
    let audio = match KiraAudio::new() {
        Ok(audio) => audio,
        Err(e) => {
            warn!("Audio disabled: {}", e);
            return VolumeController::silent(&config.audio);
        }
    };

    match assets.read_file(&config.assets.music) {
        Ok(bytes) => VolumeController::load(audio, bytes, &config.audio),
        Err(e) => {
            warn!("Background music disabled: {}", e);
            VolumeController::silent(&config.audio)
        }
    }
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ShellConfig::load_or_default(CONFIG_PATH);

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context =
        sdl2::image::init(sdl2::image::InitFlag::PNG | sdl2::image::InitFlag::JPG)?;

    let mut window_builder =
        video_subsystem.window(&config.window.title, SCREEN_WIDTH, SCREEN_HEIGHT);
    window_builder.position_centered();
    if config.window.fullscreen {
        window_builder.fullscreen_desktop();
    }
    let window = window_builder.build().map_err(|e| e.to_string())?;

    let mut canvas = window
        .into_canvas()
        .accelerated()
        .build()
        .map_err(|e| e.to_string())?;

    // Logical size keeps layout coordinates fixed at any window size
    canvas
        .set_logical_size(SCREEN_WIDTH, SCREEN_HEIGHT)
        .map_err(|e| e.to_string())?;
    canvas.set_blend_mode(BlendMode::Blend);

    let texture_creator = canvas.texture_creator();
    let assets = SdlAssets::new(&texture_creator);

    let background = FrameSource::open(&config, &assets).map_err(|e| {
        error!("No usable menu background: {}", e);
        e.to_string()
    })?;
    let volume = load_music(&config, &assets);

    let mut shell = Shell::new(&config, background, volume);
    let mut input = SdlInput::new();
    let mut event_pump = sdl_context.event_pump()?;

    let tick = Duration::from_secs_f64(1.0 / config.tick_rate as f64);
    info!("Shell running at {} ticks/s", config.tick_rate);

    'running: loop {
        let tick_start = Instant::now();

        for event in event_pump.poll_iter() {
            if let Event::Quit { .. } = event {
                break 'running;
            }
            input.handle_event(&event);
        }
        input.sample_keys(&event_pump);

        if shell.advance(&input, &assets, 1) == TickOutcome::Exit {
            break 'running;
        }

        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();
        shell.render(&mut SdlRenderer::new(&mut canvas))?;
        canvas.present();

        if let Some(remaining) = tick.checked_sub(tick_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    info!("Exiting from {:?}", shell.screen());
    Ok(())
}
