//! Hexad Demo Application
//!
//! Runs the frame loop headless:
//! - A scripted input source drags the camera, toggles realms and unfolds
//! - A logging renderer reports what would be drawn
//!
//! Set `RUST_LOG=debug` to see realm classification and lattice sizes.

use std::collections::VecDeque;
use std::time::Duration;

use hexad_core::{LatticeRules, RealmId};
use hexad_view::{
    EventSource, FrameGeometry, InputEvent, Key, Renderer, Viewer, ViewerConfig,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Frames to run before quitting
const DEMO_FRAMES: usize = 240;

/// Plays back a fixed gesture script, one batch of events per frame
struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    fn new() -> Self {
        let mut frames: VecDeque<Vec<InputEvent>> = (0..DEMO_FRAMES).map(|_| Vec::new()).collect();
        let mut at = |frame: usize, event: InputEvent| {
            if let Some(batch) = frames.get_mut(frame) {
                batch.push(event);
            }
        };

        // Lattices for the interesting realms
        for (i, digit) in [2u8, 3, 8].into_iter().enumerate() {
            at(5 + i, InputEvent::KeyDown(Key::Digit(digit)));
        }

        // Drag right and slightly down, then let go
        at(20, InputEvent::PointerDown);
        for frame in 21..40 {
            at(frame, InputEvent::PointerMotion { dx: 6.0, dy: 1.5 });
        }
        at(40, InputEvent::PointerUp);

        at(60, InputEvent::Scroll { steps: 3 });

        // Unfold for a while, then fold back
        at(80, InputEvent::KeyDown(Key::SliderUp));
        at(140, InputEvent::KeyUp(Key::SliderUp));
        at(160, InputEvent::KeyDown(Key::SliderDown));
        at(220, InputEvent::KeyUp(Key::SliderDown));

        at(DEMO_FRAMES - 1, InputEvent::Quit);

        ScriptedInput { frames }
    }
}

impl EventSource for ScriptedInput {
    fn poll(&mut self) -> Option<Vec<InputEvent>> {
        self.frames.pop_front()
    }
}

/// Logs a summary of every `every`-th frame
struct LogRenderer {
    every: u64,
    presented: u64,
}

impl Renderer for LogRenderer {
    fn present(&mut self, frame: &FrameGeometry) {
        self.presented += 1;
        if frame.frame % self.every != 0 {
            return;
        }

        info!(
            frame = frame.frame,
            realms = frame.realms.len(),
            markers = frame.marker_count(),
            wireframe = frame.wireframe_segment_count(),
            lattice = frame.lattice_segment_count(),
            zoom = frame.zoom,
            eye = ?frame.look_at.eye,
            "frame"
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // The script unfolds, so connect the realms that start on the origin
    let config = ViewerConfig::default()
        .with_frame_delay(Duration::from_millis(2))
        .with_lattice_rules(LatticeRules::unfolding());
    let mut viewer = Viewer::with_config(config)?;

    for realm in RealmId::all() {
        let record = viewer.scene().realm(realm);
        info!(
            realm = realm.get(),
            members = record.tetrads.len(),
            lattice_edges = record.lattice.len(),
            "realm"
        );
    }

    let mut input = ScriptedInput::new();
    let mut renderer = LogRenderer {
        every: 40,
        presented: 0,
    };
    let stats = viewer.run(&mut input, &mut renderer);

    info!(
        frames = stats.frames,
        presented = renderer.presented,
        events = stats.events,
        toggles = stats.realm_toggles,
        renormalizations = stats.renormalizations,
        "demo finished"
    );

    Ok(())
}
