/// Which screen the shell is showing
///
/// Exactly one is current at any time. Transitions go through
/// `ScreenStateMachine` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Menu,
    Settings,
    Playing,
}

/// Side effects produced by the state machine for the rest of the shell
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShellEvent {
    ScreenChanged(Screen),
    MasterVolumeChanged(f64),
    /// Leave the process; not a screen
    ExitRequested,
}

/// Result of one `Shell::advance`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Exit,
}
