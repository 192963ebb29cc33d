use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::ShellConfig;
use crate::core::{AppControl, FrameCtx, Sample};
use crate::event::{EventHandler, ShellEvent};
use crate::input::InputState;
use crate::recorder::{FrameRecorder, RecorderError};
use crate::time::FrameTimer;

use super::bindings::{KeyBindings, ShellCommand};

/// Hosts a sample and its frame recorder.
///
/// Key presses reach the sample first; bound keys then run a shell command.
/// `Paint` times one update+render cycle and records it. `Destroy` writes the
/// shutdown log and tears the sample down, once.
pub struct Shell<S: Sample> {
    sample: S,
    recorder: FrameRecorder,
    timer: FrameTimer,
    input: InputState,
    bindings: KeyBindings,
    shutdown_log_path: PathBuf,
    initialized: bool,
    destroyed: bool,
}

impl<S: Sample> Shell<S> {
    pub fn new(config: &ShellConfig, sample: S) -> Self {
        let mut recorder = FrameRecorder::new(config.frame_log_path.clone());
        recorder.set_recording(config.record_on_start);

        Self {
            sample,
            recorder,
            timer: FrameTimer::new(),
            input: InputState::default(),
            bindings: config.bindings,
            shutdown_log_path: config.shutdown_log_path.clone(),
            initialized: false,
            destroyed: false,
        }
    }

    /// Runs `Sample::on_init`. Later calls do nothing.
    pub fn init(&mut self) -> Result<()> {
        if self.initialized {
            return Ok(());
        }
        self.sample
            .on_init()
            .with_context(|| format!("failed to initialize sample {:?}", self.sample.title()))?;
        self.initialized = true;

        log::info!(
            "sample {:?} initialized (recording {})",
            self.sample.title(),
            if self.recorder.is_recording() { "on" } else { "off" }
        );
        Ok(())
    }

    /// Runs a shell command. Only the save command can fail.
    pub fn run_command(&mut self, cmd: ShellCommand) -> Result<AppControl, RecorderError> {
        match cmd {
            ShellCommand::ToggleRecording => {
                let on = self.recorder.toggle_recording();
                log::info!(
                    "frame recording {} ({} samples buffered)",
                    if on { "started" } else { "stopped" },
                    self.recorder.len()
                );
            }
            ShellCommand::SaveLog => self.recorder.flush_to_output()?,
            ShellCommand::ClearLog => {
                let dropped = self.recorder.len();
                self.recorder.clear();
                log::info!("cleared {dropped} frame samples");
            }
            ShellCommand::Quit => {
                log::info!("quit requested");
                return Ok(AppControl::Exit);
            }
        }
        Ok(AppControl::Continue)
    }

    /// Times one update+render cycle and records it.
    pub fn paint(&mut self) -> AppControl {
        if self.destroyed {
            return AppControl::Exit;
        }

        let tick = self.timer.begin();
        let ctx = FrameCtx {
            tick,
            input: &self.input,
            recording: self.recorder.is_recording(),
        };
        let update = self.sample.on_update(&ctx);
        let render = self.sample.on_render(&ctx);
        let ft = self.timer.end();

        if self.recorder.record_frame(ft.frame_number, ft.millis()) {
            log::trace!("frame {} took {:.3} ms", ft.frame_number, ft.millis());
        }

        merge(update, render)
    }

    /// Writes the shutdown log and calls `Sample::on_destroy`.
    ///
    /// Runs once; the sample is torn down even when the write fails.
    pub fn destroy(&mut self) -> Result<(), RecorderError> {
        if self.destroyed {
            return Ok(());
        }
        self.destroyed = true;

        let written = self.recorder.flush(&self.shutdown_log_path);
        self.sample.on_destroy();
        log::info!("sample {:?} destroyed", self.sample.title());
        written
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn sample(&self) -> &S {
        &self.sample
    }

    pub fn sample_mut(&mut self) -> &mut S {
        &mut self.sample
    }

    pub fn recorder(&self) -> &FrameRecorder {
        &self.recorder
    }

    pub fn recorder_mut(&mut self) -> &mut FrameRecorder {
        &mut self.recorder
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Input state, for the platform layer to keep current.
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn shutdown_log_path(&self) -> &Path {
        &self.shutdown_log_path
    }

    fn run_bound(&mut self, cmd: ShellCommand) -> AppControl {
        match self.run_command(cmd) {
            Ok(control) => control,
            Err(e) => {
                log::error!("{cmd:?} failed: {e}");
                AppControl::Continue
            }
        }
    }
}

impl<S: Sample> EventHandler for Shell<S> {
    fn handle(&mut self, event: ShellEvent) -> AppControl {
        if self.destroyed {
            return AppControl::Exit;
        }

        match event {
            ShellEvent::KeyDown(ev) => {
                let control = self.sample.on_key_down(&ev);
                if ev.repeat {
                    return control;
                }
                match self.bindings.command_for(ev.key) {
                    Some(cmd) => merge(control, self.run_bound(cmd)),
                    None => control,
                }
            }
            ShellEvent::KeyUp(ev) => self.sample.on_key_up(&ev),
            ShellEvent::MouseMove(ev) => self.sample.on_mouse_move(&ev),
            ShellEvent::ButtonDown(ev) => self.sample.on_button_down(&ev),
            ShellEvent::Paint => self.paint(),
            ShellEvent::Destroy => {
                if let Err(e) = self.destroy() {
                    log::error!("failed to write shutdown frame log: {e}");
                }
                AppControl::Exit
            }
        }
    }
}

fn merge(a: AppControl, b: AppControl) -> AppControl {
    if a == AppControl::Exit || b == AppControl::Exit {
        AppControl::Exit
    } else {
        AppControl::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{ButtonEvent, Key, KeyEvent, Modifiers, MouseButton, MouseMoveEvent};
    use crate::recorder::{load, FrameSample};

    #[derive(Default)]
    struct Probe {
        inits: usize,
        updates: usize,
        renders: usize,
        destroys: usize,
        keys_down: Vec<Key>,
        keys_up: Vec<Key>,
        moves: usize,
        buttons: Vec<MouseButton>,
        seen_frames: Vec<u64>,
        exit_on_render: bool,
        fail_init: bool,
    }

    impl Sample for Probe {
        fn title(&self) -> &str {
            "probe"
        }

        fn on_init(&mut self) -> anyhow::Result<()> {
            if self.fail_init {
                anyhow::bail!("no device");
            }
            self.inits += 1;
            Ok(())
        }

        fn on_update(&mut self, ctx: &FrameCtx<'_>) -> AppControl {
            self.updates += 1;
            self.seen_frames.push(ctx.frame_number());
            AppControl::Continue
        }

        fn on_render(&mut self, _ctx: &FrameCtx<'_>) -> AppControl {
            self.renders += 1;
            if self.exit_on_render { AppControl::Exit } else { AppControl::Continue }
        }

        fn on_destroy(&mut self) {
            self.destroys += 1;
        }

        fn on_key_down(&mut self, event: &KeyEvent) -> AppControl {
            self.keys_down.push(event.key);
            AppControl::Continue
        }

        fn on_key_up(&mut self, event: &KeyEvent) -> AppControl {
            self.keys_up.push(event.key);
            AppControl::Continue
        }

        fn on_mouse_move(&mut self, _event: &MouseMoveEvent) -> AppControl {
            self.moves += 1;
            AppControl::Continue
        }

        fn on_button_down(&mut self, event: &ButtonEvent) -> AppControl {
            self.buttons.push(event.button);
            AppControl::Continue
        }
    }

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("frametrace-shell-{}-{name}.csv", std::process::id()))
    }

    fn shell(name: &str) -> Shell<Probe> {
        let config = ShellConfig::new()
            .frame_log_path(scratch(&format!("{name}-save")))
            .shutdown_log_path(scratch(&format!("{name}-final")));
        Shell::new(&config, Probe::default())
    }

    fn press(key: Key) -> ShellEvent {
        ShellEvent::KeyDown(KeyEvent::new(key))
    }

    fn cleanup(shell: &Shell<Probe>) {
        let _ = std::fs::remove_file(shell.recorder().output_path());
        let _ = std::fs::remove_file(shell.shutdown_log_path());
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn init_runs_once() {
        let mut sh = shell("init");
        sh.init().unwrap();
        sh.init().unwrap();
        assert_eq!(sh.sample().inits, 1);
    }

    #[test]
    fn init_failure_is_reported() {
        let mut sh = Shell::new(&ShellConfig::default(), Probe { fail_init: true, ..Probe::default() });
        let err = sh.init().unwrap_err();
        assert!(format!("{err:#}").contains("no device"));
    }

    #[test]
    fn destroy_flushes_once_and_tears_down() {
        let mut sh = shell("destroy");
        sh.handle(press(Key::Enter));
        sh.handle(ShellEvent::Paint);

        assert_eq!(sh.handle(ShellEvent::Destroy), AppControl::Exit);
        assert_eq!(sh.handle(ShellEvent::Destroy), AppControl::Exit);
        assert_eq!(sh.sample().destroys, 1);
        assert!(sh.is_destroyed());

        let written = load(sh.shutdown_log_path()).unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].frame_number, 0);
        cleanup(&sh);
    }

    #[test]
    fn events_after_destroy_are_dropped() {
        let mut sh = shell("after-destroy");
        sh.handle(ShellEvent::Destroy);
        assert_eq!(sh.handle(press(Key::A)), AppControl::Exit);
        assert_eq!(sh.handle(ShellEvent::Paint), AppControl::Exit);
        assert!(sh.sample().keys_down.is_empty());
        assert_eq!(sh.sample().updates, 0);
        cleanup(&sh);
    }

    #[test]
    fn shutdown_write_failure_still_tears_down() {
        let config = ShellConfig::new().shutdown_log_path(
            std::env::temp_dir()
                .join(format!("frametrace-no-such-dir-{}", std::process::id()))
                .join("final.csv"),
        );
        let mut sh = Shell::new(&config, Probe::default());
        assert!(matches!(sh.destroy(), Err(RecorderError::Io { .. })));
        assert_eq!(sh.sample().destroys, 1);
    }

    // ── paint ─────────────────────────────────────────────────────────────

    #[test]
    fn paint_runs_update_then_render() {
        let mut sh = shell("paint");
        for _ in 0..3 {
            assert_eq!(sh.handle(ShellEvent::Paint), AppControl::Continue);
        }
        assert_eq!(sh.sample().updates, 3);
        assert_eq!(sh.sample().renders, 3);
        assert_eq!(sh.sample().seen_frames, vec![0, 1, 2]);
    }

    #[test]
    fn paint_records_only_while_recording() {
        let mut sh = shell("paint-record");
        sh.handle(ShellEvent::Paint);
        assert!(sh.recorder().is_empty());

        sh.handle(press(Key::Enter));
        sh.handle(ShellEvent::Paint);
        sh.handle(ShellEvent::Paint);
        sh.handle(press(Key::Enter));
        sh.handle(ShellEvent::Paint);

        let frames: Vec<u64> = sh.recorder().samples().iter().map(|s| s.frame_number).collect();
        assert_eq!(frames, vec![1, 2]);
        assert!(sh.recorder().samples().iter().all(|s| s.frame_time_ms >= 0.0));
    }

    #[test]
    fn record_on_start_records_first_frame() {
        let config = ShellConfig::new().record_on_start(true);
        let mut sh = Shell::new(&config, Probe::default());
        sh.handle(ShellEvent::Paint);
        assert_eq!(sh.recorder().len(), 1);
    }

    #[test]
    fn sample_can_exit_from_render() {
        let mut sh = Shell::new(&ShellConfig::default(), Probe { exit_on_render: true, ..Probe::default() });
        assert_eq!(sh.handle(ShellEvent::Paint), AppControl::Exit);
    }

    // ── key commands ──────────────────────────────────────────────────────

    #[test]
    fn keys_reach_sample_before_commands() {
        let mut sh = shell("forward");
        sh.handle(press(Key::Enter));
        sh.handle(press(Key::A));
        sh.handle(ShellEvent::KeyUp(KeyEvent::new(Key::A)));
        assert_eq!(sh.sample().keys_down, vec![Key::Enter, Key::A]);
        assert_eq!(sh.sample().keys_up, vec![Key::A]);
        assert!(sh.recorder().is_recording());
    }

    #[test]
    fn repeat_presses_do_not_toggle() {
        let mut sh = shell("repeat");
        sh.handle(press(Key::Enter));
        let repeat = KeyEvent { repeat: true, ..KeyEvent::new(Key::Enter) };
        sh.handle(ShellEvent::KeyDown(repeat));
        sh.handle(ShellEvent::KeyDown(repeat));
        assert!(sh.recorder().is_recording());
        assert_eq!(sh.sample().keys_down.len(), 3);
    }

    #[test]
    fn escape_quits() {
        let mut sh = shell("quit");
        assert_eq!(sh.handle(press(Key::Escape)), AppControl::Exit);
        assert!(!sh.is_destroyed());
    }

    #[test]
    fn save_and_clear_keys() {
        let mut sh = shell("save-clear");
        sh.handle(press(Key::Enter));
        sh.handle(ShellEvent::Paint);
        sh.handle(ShellEvent::Paint);

        assert_eq!(sh.handle(press(Key::W)), AppControl::Continue);
        let saved = load(sh.recorder().output_path()).unwrap();
        assert_eq!(saved, sh.recorder().samples());

        sh.handle(press(Key::C));
        assert!(sh.recorder().is_empty());
        sh.handle(press(Key::W));
        assert!(load(sh.recorder().output_path()).unwrap().is_empty());
        cleanup(&sh);
    }

    #[test]
    fn failed_save_keeps_samples_and_running() {
        let config = ShellConfig::new().frame_log_path(
            std::env::temp_dir()
                .join(format!("frametrace-no-such-dir-{}", std::process::id()))
                .join("save.csv"),
        );
        let mut sh = Shell::new(&config, Probe::default());
        sh.recorder_mut().set_recording(true);
        sh.recorder_mut().record_frame(0, 1.5);

        assert!(matches!(sh.run_command(ShellCommand::SaveLog), Err(RecorderError::Io { .. })));
        assert_eq!(sh.handle(press(Key::W)), AppControl::Continue);
        assert_eq!(sh.recorder().samples(), &[FrameSample::new(0, 1.5)]);
    }

    #[test]
    fn custom_bindings_are_honoured() {
        let bindings = KeyBindings { toggle_recording: Some(Key::R), ..KeyBindings::none() };
        let config = ShellConfig::new().bindings(bindings);
        let mut sh = Shell::new(&config, Probe::default());
        assert_eq!(sh.handle(press(Key::Escape)), AppControl::Continue);
        sh.handle(press(Key::Enter));
        assert!(!sh.recorder().is_recording());
        sh.handle(press(Key::R));
        assert!(sh.recorder().is_recording());
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn pointer_events_are_forwarded() {
        let mut sh = shell("pointer");
        sh.handle(ShellEvent::MouseMove(MouseMoveEvent {
            x: 1.0,
            y: 2.0,
            held: Default::default(),
            modifiers: Modifiers::default(),
        }));
        sh.handle(ShellEvent::ButtonDown(ButtonEvent {
            button: MouseButton::Middle,
            x: 1.0,
            y: 2.0,
            modifiers: Modifiers::default(),
        }));
        assert_eq!(sh.sample().moves, 1);
        assert_eq!(sh.sample().buttons, vec![MouseButton::Middle]);
    }
}
