use super::state::ScreenStateMachine;
use super::types::{Screen, ShellEvent, TickOutcome};
use crate::animation::AnimatedValue;
use crate::audio::VolumeController;
use crate::config::ShellConfig;
use crate::input_system::InputSystem;
use crate::platform::{AssetLoader, AudioService, InputDevice, Renderer};
use crate::render;
use crate::video::FrameSource;

/// The whole front-end: screens, input, music and background
///
/// The host calls `advance` then `render` once per tick. Everything a
/// tick changes is applied inside `advance`, so `render` never sees a
/// half-finished transition.
pub struct Shell<I, A: AudioService> {
    input: InputSystem,
    state: ScreenStateMachine,
    volume: VolumeController<A>,
    glow: AnimatedValue,
    background: FrameSource<I>,
}

impl<I, A: AudioService> Shell<I, A> {
    /// Builds the shell and starts the menu music
    pub fn new(
        config: &ShellConfig,
        background: FrameSource<I>,
        volume: VolumeController<A>,
    ) -> Self {
        let mut shell = Shell {
            input: InputSystem::new(),
            state: ScreenStateMachine::new(volume.master()),
            volume,
            glow: AnimatedValue::glow(&config.glow),
            background,
        };
        shell.volume.start();
        shell
    }

    pub fn screen(&self) -> Screen {
        self.state.screen()
    }

    #[cfg(test)]
    pub fn state(&self) -> &ScreenStateMachine {
        &self.state
    }

    #[cfg(test)]
    pub fn glow(&self) -> f64 {
        self.glow.value()
    }

    /// Runs `ticks` ticks worth of logic with one input sample
    pub fn advance<D, L>(&mut self, device: &D, loader: &L, ticks: u32) -> TickOutcome
    where
        D: InputDevice,
        L: AssetLoader<Image = I>,
    {
        self.volume.watchdog();

        for action in self.input.poll_actions(device) {
            match self.state.handle(action) {
                Some(ShellEvent::ScreenChanged(screen)) => {
                    self.volume.on_screen_change(screen);
                    // The rest of this tick's input belonged to the old screen
                    break;
                }
                Some(ShellEvent::MasterVolumeChanged(master)) => {
                    self.volume.on_master_volume_changed(master);
                }
                Some(ShellEvent::ExitRequested) => return TickOutcome::Exit,
                None => {}
            }
        }

        if matches!(self.state.screen(), Screen::Menu | Screen::Settings) {
            for _ in 0..ticks {
                self.glow.advance();
            }
        }
        self.background.advance(ticks, loader);

        TickOutcome::Continue
    }

    /// Draws the background and the current screen
    pub fn render<R>(&self, renderer: &mut R) -> Result<(), String>
    where
        R: Renderer<Image = I>,
    {
        render::draw_background(renderer, self.background.current_image())?;

        let language = self.state.language();
        let glow = self.glow.value();
        match self.state.screen() {
            Screen::Menu => render::draw_menu(renderer, self.state.menu(), language, glow),
            Screen::Settings => {
                render::draw_settings(renderer, self.state.settings(), self.state.cursor(), glow)
            }
            Screen::Playing => render::draw_playing(renderer, language),
        }
    }
}
