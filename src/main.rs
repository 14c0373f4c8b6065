//! Ripple Rings entry point
//!
//! Native headless driver: advances the simulation at a fixed frame rate,
//! feeds it scripted (and optionally random) taps, and prints each frame's
//! draw list.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use ripple_rings::consts::STROKE_WIDTH;
use ripple_rings::renderer::frame_geometry;
use ripple_rings::sim::{FrameInput, RenderedCircle, SimulationState, step_frame};
use ripple_rings::{OutputMode, ScriptedEvent, Settings, Viewport};

/// Driver instance holding all state
struct Driver {
    settings: Settings,
    state: SimulationState,
    input: FrameInput,
    /// Separate source for random taps so tap placement never shifts colors
    tap_rng: Pcg32,
    viewport: Viewport,
}

impl Driver {
    fn new(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
        log::info!(
            "Simulation seed: {}, viewport {}x{}, {} fps, output {}",
            seed,
            settings.width,
            settings.height,
            settings.frame_rate,
            settings.output.as_str()
        );

        let viewport = Viewport::new(settings.width, settings.height);
        Self {
            state: SimulationState::new(seed),
            input: FrameInput::default(),
            tap_rng: Pcg32::seed_from_u64(seed.wrapping_add(1)),
            viewport,
            settings,
        }
    }

    /// Queue every input event due before `frame`
    fn queue_input(&mut self, frame: u64) {
        for event in self.settings.script.iter().filter(|e| e.frame() == frame) {
            match *event {
                ScriptedEvent::Tap { x, y, .. } => self.input.on_tap(Vec2::new(x, y)),
                ScriptedEvent::Clear { .. } => self.input.on_clear(),
            }
        }

        if self.settings.random_tap_chance > 0.0
            && self.tap_rng.random_bool(self.settings.random_tap_chance)
        {
            let x = self.tap_rng.random_range(0.0..self.viewport.width.max(1.0));
            let y = self.tap_rng.random_range(0.0..self.viewport.height.max(1.0));
            self.input.on_tap(Vec2::new(x, y));
        }
    }

    /// Run one frame and return its draw list
    fn frame(&mut self, frame: u64) -> Vec<RenderedCircle> {
        self.queue_input(frame);
        step_frame(&mut self.state, &mut self.input, self.viewport)
    }

    fn run(&mut self, out: &mut impl Write) -> io::Result<()> {
        let period = Duration::from_secs_f64(1.0 / self.settings.frame_rate as f64);
        let frames_per_cycle = self.settings.frames_per_cycle();
        let mut next_deadline = Instant::now();
        let mut frame = 0u64;

        while self.settings.frames == 0 || frame < self.settings.frames {
            let drawn = self.frame(frame);
            write_frame(out, self.settings.output, self.state.frame(), &drawn)?;

            frame += 1;
            if frame % frames_per_cycle == 0 && log::log_enabled!(log::Level::Debug) {
                log::debug!("{}", cycle_report(&self.state, frame / frames_per_cycle));
            }

            if !self.settings.fast {
                out.flush()?;
                next_deadline += period;
                let now = Instant::now();
                if next_deadline > now {
                    std::thread::sleep(next_deadline - now);
                } else {
                    // Fell behind; don't try to catch up with a burst of frames
                    next_deadline = now;
                }
            }
        }

        out.flush()?;
        log::info!(
            "Stopped after {} frames with {} circles",
            frame,
            self.state.len()
        );
        Ok(())
    }
}

/// One-line description of the state at the end of an animation cycle
fn cycle_report(state: &SimulationState, cycle: u64) -> String {
    match serde_json::to_string(&state.snapshot()) {
        Ok(json) => format!("Animation cycle {} complete: {}", cycle, json),
        Err(e) => format!("Animation cycle {} complete (snapshot failed: {})", cycle, e),
    }
}

fn write_frame(
    out: &mut impl Write,
    mode: OutputMode,
    frame: u64,
    drawn: &[RenderedCircle],
) -> io::Result<()> {
    match mode {
        OutputMode::Json => {
            serde_json::to_writer(&mut *out, &serde_json::json!({ "frame": frame, "circles": drawn }))?;
            writeln!(out)
        }
        OutputMode::Summary => {
            let vertices = frame_geometry(drawn, STROKE_WIDTH).len();
            let largest = drawn.iter().map(|c| c.radius).fold(0.0_f32, f32::max);
            writeln!(
                out,
                "frame {:>6} | circles {:>2} | largest r={:>7.1} | vertices {}",
                frame,
                drawn.len(),
                largest,
                vertices
            )
        }
        OutputMode::Quiet => Ok(()),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Ripple Rings (headless) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let settings = match Settings::from_args(&args) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut driver = Driver::new(settings);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match driver.run(&mut out) {
        Ok(()) => ExitCode::SUCCESS,
        // Downstream closed the pipe (e.g. `| head`); that's a normal stop
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Output failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
