use std::time::Duration;

use anyhow::Result;

use frametrace_engine::input::{ButtonEvent, KeyEvent, MouseMoveEvent};
use frametrace_engine::logging::init_logging;
use frametrace_engine::{AppControl, FrameCtx, Runtime, Sample, ShellConfig};

/// Stand-in sample: burns a pointer-dependent amount of CPU per frame so the
/// recorded frame times have something to show.
struct BusySample {
    load: u32,
    checksum: f64,
}

impl BusySample {
    fn new() -> Self {
        Self { load: 20_000, checksum: 0.0 }
    }
}

impl Sample for BusySample {
    fn title(&self) -> &str {
        "frametrace studio"
    }

    fn width(&self) -> u32 {
        960
    }

    fn height(&self) -> u32 {
        540
    }

    fn on_init(&mut self) -> Result<()> {
        log::info!("busy sample ready (load {})", self.load);
        Ok(())
    }

    fn on_update(&mut self, ctx: &FrameCtx<'_>) -> AppControl {
        let phase = ctx.frame_number() as f64 * ctx.dt() as f64;
        self.checksum = (0..self.load).map(|i| (phase + i as f64).sin()).sum();
        AppControl::Continue
    }

    fn on_render(&mut self, _ctx: &FrameCtx<'_>) -> AppControl {
        // Presenting is left to real samples; pace roughly like a 60 Hz swap.
        std::thread::sleep(Duration::from_millis(10));
        AppControl::Continue
    }

    fn on_destroy(&mut self) {
        log::debug!("busy sample checksum {:.3}", self.checksum);
    }

    fn on_key_down(&mut self, event: &KeyEvent) -> AppControl {
        log::debug!("key down {}", event.key);
        AppControl::Continue
    }

    fn on_mouse_move(&mut self, event: &MouseMoveEvent) -> AppControl {
        // More work towards the right edge.
        self.load = 5_000 + (event.x.max(0.0) as u32) * 100;
        AppControl::Continue
    }

    fn on_button_down(&mut self, event: &ButtonEvent) -> AppControl {
        log::info!("{:?} button at ({:.0}, {:.0})", event.button, event.x, event.y);
        AppControl::Continue
    }
}

fn main() -> Result<()> {
    let config = ShellConfig::default();
    init_logging(&config.logging);
    let config = config.from_env();

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║          FRAMETRACE STUDIO v0.1        ║");
    println!("  ╠════════════════════════════════════════╣");
    println!("  ║  Enter  start / stop recording         ║");
    println!("  ║  W      write frame log                ║");
    println!("  ║  C      clear recorded frames          ║");
    println!("  ║  Esc    quit                           ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();
    println!("  save log     > {}", config.frame_log_path.display());
    println!("  shutdown log > {}", config.shutdown_log_path.display());
    println!();

    Runtime::run(config, BusySample::new())
}
