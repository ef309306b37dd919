use std::path::Path;
use std::time::{Duration, Instant};

use image::RgbaImage;
use tracing::{debug, info};

use crate::config::ViewerConfig;
use crate::consts::{
    DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH, DEFAULT_PLAYBACK_INTERVAL_MS, LAST_HOUR,
};
use crate::error::{HeatmapError, Result};
use crate::io::image_io::load_floor_plan;
use crate::overlay::{render_hour, OverlayLayer};
use crate::room::Dataset;
use crate::view::{compute_geometry, render_base, DisplayGeometry, ViewState};

use super::command::SceneCommand;
use super::playback::{PlaybackDriver, PlaybackEnd, PlaybackState};
use super::surface::{BaseDraw, OverlayDraw, PresentationSurface, BASE_ROTATION_DEGREES};

/// Construction parameters for a [`SceneController`].
#[derive(Clone, Debug)]
pub struct SceneOptions {
    pub max_width: u32,
    pub max_height: u32,
    pub initial_hour: u8,
    pub playback_interval: Duration,
    pub playback_end: PlaybackEnd,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
            initial_hour: 0,
            playback_interval: Duration::from_millis(DEFAULT_PLAYBACK_INTERVAL_MS),
            playback_end: PlaybackEnd::Stop,
        }
    }
}

impl From<&ViewerConfig> for SceneOptions {
    fn from(config: &ViewerConfig) -> Self {
        Self {
            max_width: config.max_width,
            max_height: config.max_height,
            initial_hour: config.initial_hour,
            playback_interval: Duration::from_millis(config.playback.interval_ms),
            playback_end: config.playback.end,
        }
    }
}

/// Owns the view state, the selected hour and the visible overlays, and
/// rebuilds them on every command.
///
/// Every redraw is total: the previous overlay set is dropped before the new
/// one is built, so the visible layers always match exactly the rooms
/// recorded at [`hour`](Self::hour).
pub struct SceneController {
    source: RgbaImage,
    dataset: Dataset,
    max_width: u32,
    max_height: u32,
    view: ViewState,
    hour: u8,
    geometry: DisplayGeometry,
    base: RgbaImage,
    overlays: Vec<OverlayLayer>,
    playback: PlaybackDriver,
    playback_end: PlaybackEnd,
}

impl SceneController {
    /// Build the initial scene at scale 1.0. Nothing is presented until
    /// [`present`](Self::present) or the first command.
    pub fn new(source: RgbaImage, dataset: Dataset, options: SceneOptions) -> Result<Self> {
        check_hour(options.initial_hour)?;

        let view = ViewState::new();
        let (w, h) = source.dimensions();
        let geometry =
            compute_geometry(w, h, options.max_width, options.max_height, view.scale())?;
        let overlays = render_hour(
            dataset.rooms(),
            options.initial_hour,
            &geometry,
            view.scale(),
        )?;
        let base = render_base(&source, &geometry);

        info!(
            source_width = w,
            source_height = h,
            display_width = geometry.display_width,
            display_height = geometry.display_height,
            rooms = dataset.len(),
            "Scene initialised"
        );

        Ok(Self {
            source,
            dataset,
            max_width: options.max_width,
            max_height: options.max_height,
            view,
            hour: options.initial_hour,
            geometry,
            base,
            overlays,
            playback: PlaybackDriver::new(options.playback_interval),
            playback_end: options.playback_end,
        })
    }

    /// Decode the floor plan at `image_path` and build the scene. A decode
    /// failure is returned as-is; there is no fallback image.
    pub fn open(image_path: &Path, dataset: Dataset, options: SceneOptions) -> Result<Self> {
        let source = load_floor_plan(image_path)?;
        Self::new(source, dataset, options)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn scale(&self) -> f64 {
        self.view.scale()
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn geometry(&self) -> &DisplayGeometry {
        &self.geometry
    }

    pub fn base(&self) -> &RgbaImage {
        &self.base
    }

    pub fn overlays(&self) -> &[OverlayLayer] {
        &self.overlays
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn playback_state(&self) -> PlaybackState {
        self.playback.state()
    }

    pub fn playback_end(&self) -> PlaybackEnd {
        self.playback_end
    }

    /// When the event loop should next call [`tick`](Self::tick).
    pub fn next_tick(&self) -> Option<Instant> {
        self.playback.next_deadline()
    }

    /// Send the current frame to `surface` without changing any state.
    pub fn present(&self, surface: &mut dyn PresentationSurface) {
        surface.discard_overlays();
        self.emit(surface, true);
    }

    /// Dispatch one command.
    pub fn apply(
        &mut self,
        command: SceneCommand,
        now: Instant,
        surface: &mut dyn PresentationSurface,
    ) -> Result<()> {
        debug!(%command, "Applying command");
        match command {
            SceneCommand::ZoomIn => {
                self.zoom_in(surface)?;
            }
            SceneCommand::ZoomOut => {
                self.zoom_out(surface)?;
            }
            SceneCommand::SetHour(hour) => self.set_hour(hour, surface)?,
            SceneCommand::TogglePlay => {
                self.toggle_play(now, surface)?;
            }
        }
        Ok(())
    }

    /// Zoom in one step. Returns `false` without redrawing at the upper bound.
    ///
    /// If the zoomed scene cannot be built the previous zoom level is kept
    /// and the error returned.
    pub fn zoom_in(&mut self, surface: &mut dyn PresentationSurface) -> Result<bool> {
        let previous = self.view;
        if !self.view.zoom_in() {
            return Ok(false);
        }
        if let Err(e) = self.redraw(true, surface) {
            self.view = previous;
            return Err(e);
        }
        Ok(true)
    }

    /// Zoom out one step. Returns `false` without redrawing at scale 1.0.
    pub fn zoom_out(&mut self, surface: &mut dyn PresentationSurface) -> Result<bool> {
        let previous = self.view;
        if !self.view.zoom_out() {
            return Ok(false);
        }
        if let Err(e) = self.redraw(true, surface) {
            self.view = previous;
            return Err(e);
        }
        Ok(true)
    }

    /// Select an hour and rebuild the overlays. Playback, if running, carries
    /// on from the new hour.
    pub fn set_hour(&mut self, hour: u8, surface: &mut dyn PresentationSurface) -> Result<()> {
        check_hour(hour)?;
        let previous = self.hour;
        self.hour = hour;
        if let Err(e) = self.redraw(false, surface) {
            self.hour = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Start or stop hourly playback and return the new state.
    ///
    /// Starting on the last hour with [`PlaybackEnd::Stop`] rewinds to hour
    /// 0 first, otherwise playback would end immediately.
    pub fn toggle_play(
        &mut self,
        now: Instant,
        surface: &mut dyn PresentationSurface,
    ) -> Result<PlaybackState> {
        if self.playback.is_active() {
            self.stop();
            return Ok(PlaybackState::Idle);
        }
        if self.hour == LAST_HOUR && self.playback_end == PlaybackEnd::Stop {
            self.set_hour(0, surface)?;
        }
        self.playback.start(now);
        debug!(hour = self.hour, "Playback started");
        Ok(PlaybackState::Playing)
    }

    /// Cancel playback. Idempotent.
    pub fn stop(&mut self) {
        if self.playback.is_active() {
            debug!(hour = self.hour, "Playback stopped");
        }
        self.playback.cancel();
    }

    /// Advance playback if a tick is due at `now`. Returns `true` when the
    /// hour changed. A failed redraw stops playback.
    pub fn tick(&mut self, now: Instant, surface: &mut dyn PresentationSurface) -> Result<bool> {
        if !self.playback.poll(now) {
            return Ok(false);
        }
        let next = if self.hour >= LAST_HOUR {
            match self.playback_end {
                PlaybackEnd::Stop => {
                    self.stop();
                    return Ok(false);
                }
                PlaybackEnd::Loop => 0,
            }
        } else {
            self.hour + 1
        };

        if let Err(e) = self.set_hour(next, surface) {
            self.stop();
            return Err(e);
        }
        if self.hour == LAST_HOUR && self.playback_end == PlaybackEnd::Stop {
            self.stop();
        }
        Ok(true)
    }

    /// Total redraw. The base raster is only resampled when `rescale` is set;
    /// overlays are always rebuilt from scratch.
    ///
    /// Everything is built before anything is replaced: on error the previous
    /// geometry, base and overlays stay in place and nothing is presented.
    fn redraw(&mut self, rescale: bool, surface: &mut dyn PresentationSurface) -> Result<()> {
        let geometry = if rescale {
            let (w, h) = self.source.dimensions();
            compute_geometry(w, h, self.max_width, self.max_height, self.view.scale())?
        } else {
            self.geometry
        };
        let overlays = render_hour(
            self.dataset.rooms(),
            self.hour,
            &geometry,
            self.view.scale(),
        )?;
        if rescale {
            self.base = render_base(&self.source, &geometry);
            self.geometry = geometry;
        }

        self.overlays.clear();
        surface.discard_overlays();
        self.overlays = overlays;

        debug!(
            hour = self.hour,
            scale = self.view.scale(),
            display_width = self.geometry.display_width,
            display_height = self.geometry.display_height,
            overlays = self.overlays.len(),
            "Redraw"
        );
        self.emit(surface, rescale);
        Ok(())
    }

    fn emit(&self, surface: &mut dyn PresentationSurface, rescaled: bool) {
        surface.draw_base(&BaseDraw {
            image: &self.base,
            geometry: self.geometry,
            rotation_degrees: BASE_ROTATION_DEGREES,
            rescaled,
        });
        for layer in &self.overlays {
            surface.draw_overlay(&OverlayDraw {
                layer,
                anchor: (0, 0),
            });
        }
    }
}

fn check_hour(hour: u8) -> Result<()> {
    if hour > LAST_HOUR {
        return Err(HeatmapError::HourOutOfRange { hour: hour as u32 });
    }
    Ok(())
}
