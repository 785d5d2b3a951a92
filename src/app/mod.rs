//! `ExplorerApp`: the top-level egui application state.
//!
//! The struct and the frame loop live here. Drawing is split across the
//! sibling sub-modules:
//!
//! - `map_panel`: tiled map, markers, popup, legend
//! - `sidebar`: feature details, cross-section, educational topics
//! - `sections`: drift animation, earth layers, information tabs

pub mod map_panel;
pub mod sections;
pub mod sidebar;

use std::time::Instant;

use eframe::egui;
use log::{error, info, warn};

use tectonics_explorer::config::ExplorerConfig;
use tectonics_explorer::content::{EducationTopic, InfoTab};
use tectonics_explorer::cross_section::{CrossSection, Frame};
use tectonics_explorer::data::Dataset;
use tectonics_explorer::drift::DriftStepper;
use tectonics_explorer::layers::LayerExplorer;
use tectonics_explorer::map::{MapView, TileCache, TileCoord, TileLoader};
use tectonics_explorer::selection::{DetailView, SelectionState};

// ─── Application state ───────────────────────────────────────────────────────

pub struct ExplorerApp {
    pub config: ExplorerConfig,
    pub dataset: Dataset,
    pub selection: SelectionState,
    pub map: MapView,
    /// `None` when the tile template could not be used; the map then shows
    /// overlays on a plain background.
    pub tile_loader: Option<TileLoader>,
    pub tile_textures: TileCache<egui::TextureHandle>,
    pub cross_section: CrossSection,
    /// Last frame emitted by the cross-section timer
    pub cross_section_frame: Option<Frame>,
    pub education_topic: EducationTopic,
    /// `None` while the drift animation is hidden
    pub drift: Option<DriftStepper>,
    pub layers: LayerExplorer,
    pub info_tab: InfoTab,
}

impl ExplorerApp {
    pub fn new(ctx: &egui::Context, config: ExplorerConfig) -> Self {
        let dataset = Dataset::embedded().unwrap_or_else(|e| {
            error!("failed to load dataset: {}", e);
            Dataset::default()
        });

        let repaint = ctx.clone();
        let tile_loader = match TileLoader::new(&config.tile_url, &config.user_agent, config.tile_timeout) {
            Ok(loader) => Some(loader.with_notifier(move || repaint.request_repaint())),
            Err(e) => {
                warn!("tiles disabled: {}", e);
                None
            }
        };

        info!(
            "explorer ready: {} boundaries, {} earthquakes, {} volcanoes",
            dataset.boundaries.len(),
            dataset.earthquakes.len(),
            dataset.volcanoes.len()
        );

        Self {
            map: MapView::new(&dataset, config.fit_padding),
            tile_textures: TileCache::new(config.tile_cache_capacity),
            cross_section: CrossSection::from_config(&config),
            cross_section_frame: None,
            selection: SelectionState::new(),
            education_topic: EducationTopic::default(),
            drift: Some(DriftStepper::new()),
            layers: LayerExplorer::new(),
            info_tab: InfoTab::default(),
            tile_loader,
            dataset,
            config,
        }
    }

    /// Upload finished tiles as textures.
    fn poll_tiles(&mut self, ctx: &egui::Context) {
        let Some(loader) = self.tile_loader.as_mut() else {
            return;
        };
        for (coord, data) in loader.poll() {
            let image = egui::ColorImage::from_rgba_unmultiplied(
                [data.width as usize, data.height as usize],
                &data.rgba,
            );
            let tex = ctx.load_texture(
                tile_texture_name(coord),
                image,
                egui::TextureOptions::LINEAR,
            );
            // Evicted handles free their textures on drop.
            self.tile_textures.insert(coord, tex);
        }
    }

    /// Keep the cross-section timer in step with what the sidebar shows:
    /// running for the selected plate's type, cancelled otherwise.
    fn sync_cross_section(&mut self, now: Instant) {
        let wanted = match self.selection.view() {
            DetailView::Plate {
                cross_section_type, ..
            } => Some(cross_section_type),
            _ => None,
        };
        if self.cross_section.set_type(wanted.as_deref(), now) {
            self.cross_section_frame = None;
        }

        let latest = &mut self.cross_section_frame;
        self.cross_section.poll(now, &mut |frame: Frame| *latest = Some(frame));
    }
}

fn tile_texture_name(coord: TileCoord) -> String {
    format!("tile_{}_{}_{}", coord.z, coord.x, coord.y)
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.poll_tiles(ctx);
        self.sync_cross_section(now);

        let section_height = (ctx.screen_rect().height() * 0.85).max(420.0);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(crate::ui::hex("#F9FAFB")))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("page")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.add_space(8.0);
                        self.draw_explore_section(ui, section_height);
                        ui.add_space(48.0);
                        self.draw_drift_section(ui);
                        ui.add_space(48.0);
                        self.draw_layers_section(ui);
                        self.draw_info_section(ui);
                        ui.add_space(24.0);
                    });
            });

        // Selection may have changed during this frame.
        self.sync_cross_section(now);
        if let Some(wait) = self.cross_section.time_until_next(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}

impl Drop for ExplorerApp {
    fn drop(&mut self) {
        self.cross_section.teardown();
    }
}
