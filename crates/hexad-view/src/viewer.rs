//! Viewer - the frame loop
//!
//! Each tick runs the same stages:
//! 1. Apply input events (realm toggles, held keys, drag, zoom)
//! 2. Idle spin when no drag is in progress
//! 3. Move the unfold slider while a slider key is held
//! 4. Renormalize the camera on schedule
//!
//! Geometry is produced on demand by [`Viewer::frame`] and handed to a
//! [`Renderer`]. Everything runs on one thread; the viewer owns all state.

use std::thread;
use std::time::{Duration, Instant};

use hexad_core::{HexadResult, RealmId, Unfold};
use tracing::{debug, info, trace};

use crate::{
    ActiveInputs, Camera, FrameGeometry, InputEvent, InputId, Key, Scene, ViewerConfig,
    Viewport, VisibilityMode,
};

/// Source of input events, polled once per frame
pub trait EventSource {
    /// Events since the last poll. `None` once the source is closed.
    fn poll(&mut self) -> Option<Vec<InputEvent>>;
}

/// Consumer of frame geometry
pub trait Renderer {
    fn present(&mut self, frame: &FrameGeometry);
}

/// Outcome of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Quit,
}

#[derive(Clone, Debug, Default)]
pub struct ViewerStats {
    pub frames: u64,
    pub events: u64,
    pub idle_frames: u64,
    pub realm_toggles: u64,
    pub renormalizations: u64,
    pub last_tick_duration: Duration,
}

/// Owns the scene, camera and input state of one view
pub struct Viewer {
    scene: Scene,
    camera: Camera,
    unfold: Unfold,
    inputs: ActiveInputs,
    viewport: Viewport,
    config: ViewerConfig,
    stats: ViewerStats,
    quit: bool,
}

impl Viewer {
    /// Create a viewer with default configuration
    pub fn new() -> HexadResult<Self> {
        Self::with_config(ViewerConfig::default())
    }

    pub fn with_config(config: ViewerConfig) -> HexadResult<Self> {
        config.validate()?;

        let camera = Camera::new(config.initial_position, config.initial_up)?
            .with_momentum(config.initial_aspeed, config.initial_moment)
            .with_spin_rate(config.spin_rate);
        let scene = Scene::build(&config.lattice);

        info!(
            tetrads = scene.tetrad_count(),
            frame_delay_ms = config.frame_delay.as_millis() as u64,
            "viewer ready"
        );

        Ok(Viewer {
            scene,
            camera,
            unfold: Unfold::default(),
            inputs: ActiveInputs::new(),
            viewport: Viewport::default(),
            config,
            stats: ViewerStats::default(),
            quit: false,
        })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn unfold(&self) -> &Unfold {
        &self.unfold
    }

    pub fn inputs(&self) -> &ActiveInputs {
        &self.inputs
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn stats(&self) -> &ViewerStats {
        &self.stats
    }

    pub fn mode(&self, realm: RealmId) -> VisibilityMode {
        self.scene.mode(realm)
    }

    pub fn toggle_realm(&mut self, realm: RealmId) -> VisibilityMode {
        self.stats.realm_toggles += 1;
        self.scene.toggle(realm)
    }

    /// Apply one input event
    pub fn handle_event(&mut self, event: InputEvent) {
        self.stats.events += 1;

        match event {
            InputEvent::Quit => {
                info!("quit requested");
                self.quit = true;
            }
            InputEvent::KeyDown(key) => match key.realm() {
                Some(realm) => {
                    self.toggle_realm(realm);
                }
                None => {
                    if self.inputs.activate(InputId::Key(key)) {
                        debug!(?key, "key down");
                    }
                }
            },
            InputEvent::KeyUp(key) => {
                if key.realm().is_none() && self.inputs.deactivate(InputId::Key(key)) {
                    debug!(?key, "key up");
                }
            }
            InputEvent::PointerDown => {
                self.inputs.activate(InputId::PointerDrag);
            }
            InputEvent::PointerUp => {
                self.inputs.deactivate(InputId::PointerDrag);
            }
            InputEvent::PointerMotion { dx, dy } => {
                if self.inputs.is_dragging() {
                    self.drag(dx, dy);
                }
            }
            InputEvent::Scroll { steps } => {
                if steps != 0 {
                    self.camera.scale(self.config.zoom_step.powi(steps));
                }
            }
            InputEvent::Resize { width, height } => {
                self.viewport = Viewport { width, height };
                debug!(width, height, "viewport resized");
            }
        }
    }

    /// Turn the camera by a pointer drag and leave the motion as idle spin
    fn drag(&mut self, dx: f64, dy: f64) {
        self.camera.rotate(-dy, self.camera.right());
        self.camera.rotate(dx, self.camera.up());

        let aspeed = (dx + dy) / self.config.drag_damping;
        let moment = dx * self.camera.up() - dy * self.camera.right();
        self.camera.set_momentum(aspeed, moment);
    }

    /// Advance one frame
    pub fn tick<I>(&mut self, events: I) -> FrameStatus
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let start = Instant::now();
        self.stats.frames += 1;

        // Stage 1: Input
        for event in events {
            self.handle_event(event);
        }
        if self.quit {
            return FrameStatus::Quit;
        }

        // Stage 2: Idle spin
        if !self.inputs.is_dragging() {
            self.camera.idle();
            self.stats.idle_frames += 1;
        }

        // Stage 3: Unfold slider
        if self.inputs.is_active(InputId::Key(Key::SliderUp)) {
            self.unfold.nudge(self.config.slider_rate);
        }
        if self.inputs.is_active(InputId::Key(Key::SliderDown)) {
            self.unfold.nudge(-self.config.slider_rate);
        }

        // Stage 4: Drift control
        let every = self.config.renormalize_every;
        if every > 0 && self.stats.frames % every == 0 {
            self.camera.renormalize();
            self.stats.renormalizations += 1;
        }

        self.stats.last_tick_duration = start.elapsed();
        trace!(frame = self.stats.frames, slider = self.unfold.slider(), "tick");
        FrameStatus::Continue
    }

    /// Geometry for the current state
    pub fn frame(&self) -> FrameGeometry {
        FrameGeometry {
            frame: self.stats.frames,
            look_at: self.camera.orient(),
            zoom: self.camera.zoom(),
            viewport: self.viewport,
            realms: self
                .scene
                .geometry(&self.camera, &self.unfold, self.config.marker_size),
        }
    }

    /// Run until quit or until the event source closes
    pub fn run<S, R>(&mut self, source: &mut S, renderer: &mut R) -> ViewerStats
    where
        S: EventSource,
        R: Renderer,
    {
        info!("frame loop started");

        while let Some(events) = source.poll() {
            if self.tick(events) == FrameStatus::Quit {
                break;
            }
            renderer.present(&self.frame());

            if !self.config.frame_delay.is_zero() {
                thread::sleep(self.config.frame_delay);
            }
        }

        info!(frames = self.stats.frames, "frame loop stopped");
        self.stats.clone()
    }
}
