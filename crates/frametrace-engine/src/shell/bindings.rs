use crate::input::Key;

/// Commands the shell runs in response to bound keys.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShellCommand {
    ToggleRecording,
    SaveLog,
    ClearLog,
    Quit,
}

/// Key assignments for shell commands. `None` disables a command.
///
/// Defaults: Enter toggles recording, W writes the log, C clears it,
/// Escape quits.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyBindings {
    pub toggle_recording: Option<Key>,
    pub save_log: Option<Key>,
    pub clear_log: Option<Key>,
    pub quit: Option<Key>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            toggle_recording: Some(Key::Enter),
            save_log: Some(Key::W),
            clear_log: Some(Key::C),
            quit: Some(Key::Escape),
        }
    }
}

impl KeyBindings {
    /// Bindings with every command disabled.
    pub fn none() -> Self {
        Self {
            toggle_recording: None,
            save_log: None,
            clear_log: None,
            quit: None,
        }
    }

    /// Command bound to `key`. Quit wins if a key is bound twice.
    pub fn command_for(&self, key: Key) -> Option<ShellCommand> {
        let table = [
            (self.quit, ShellCommand::Quit),
            (self.toggle_recording, ShellCommand::ToggleRecording),
            (self.save_log, ShellCommand::SaveLog),
            (self.clear_log, ShellCommand::ClearLog),
        ];
        table
            .into_iter()
            .find(|(bound, _)| *bound == Some(key))
            .map(|(_, cmd)| cmd)
    }
}
