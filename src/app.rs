use log::{error, info};

use crate::command::Command;
use crate::document::Document;
use crate::element::ShapeKind;
use crate::input::{InputEvent, InputHandler};
use crate::persistence::{self, PersistenceResult};
use crate::renderer::Renderer;
use crate::scene::RedrawTimer;
use crate::settings::CanvasSettings;
use crate::tools::{ShapeTool, Tool};

/// We derive Deserialize/Serialize so we can persist settings on shutdown.
#[derive(serde::Deserialize, serde::Serialize, Debug)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct CanvasApp {
    settings: CanvasSettings,
    // The canvas itself only lives in the file written by Save/Reset
    #[serde(skip)]
    document: Document,
    #[serde(skip)]
    tool: ShapeTool,
    #[serde(skip)]
    renderer: Renderer,
    #[serde(skip)]
    input: InputHandler,
    #[serde(skip)]
    redraw_timer: RedrawTimer,
    // None while no anchor is hovered
    #[serde(skip)]
    hover_cursor: Option<egui::CursorIcon>,
}

impl Default for CanvasApp {
    fn default() -> Self {
        Self::with_settings(CanvasSettings::default())
    }
}

impl CanvasApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<CanvasApp>(storage, eframe::APP_KEY))
            .map(|app| app.settings)
            .unwrap_or_default();

        let app = Self::with_settings(settings);
        info!(
            "{} tool ready, canvas file: {}",
            app.tool.name(),
            app.settings.save_path.display()
        );
        app
    }

    pub fn with_settings(settings: CanvasSettings) -> Self {
        Self {
            tool: ShapeTool::new(settings.default_kind, settings.anchor_size),
            redraw_timer: RedrawTimer::new(settings.redraw_delay()),
            settings,
            document: Document::new(),
            renderer: Renderer::default(),
            input: InputHandler::default(),
            hover_cursor: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn tool(&self) -> &ShapeTool {
        &self.tool
    }

    pub fn settings(&self) -> &CanvasSettings {
        &self.settings
    }

    pub fn redraw_timer(&self) -> &RedrawTimer {
        &self.redraw_timer
    }

    /// Cursor to show over the canvas, if not the default one
    pub fn hover_cursor(&self) -> Option<egui::CursorIcon> {
        self.hover_cursor
    }

    /// Pick the kind of shape that new drags create
    pub fn set_shape_kind(&mut self, kind: ShapeKind) {
        self.settings.default_kind = kind;
        self.tool.set_kind(kind);
    }

    /// Feed one pointer event through the tool and apply whatever it produces.
    /// `now` is the frame time in seconds, used by the redraw timer.
    pub fn handle_event(&mut self, event: &InputEvent, now: f64) {
        let pos = event.position();
        let command = match event {
            InputEvent::PointerDown { .. } => {
                self.hover_cursor = None;
                self.tool.on_pointer_down(pos, &self.document)
            }
            InputEvent::PointerMove { .. } => self.tool.on_pointer_move(pos, &self.document),
            InputEvent::PointerUp { .. } => {
                self.hover_cursor = None;
                self.tool.on_pointer_up(pos, &self.document)
            }
            InputEvent::PointerHover { .. } => {
                let cursor = self.tool.hover_cursor(pos, &self.document);
                self.hover_cursor = (cursor != egui::CursorIcon::Default).then_some(cursor);
                None
            }
        };

        if let Some(command) = command {
            self.apply(command, now);
        }
    }

    fn apply(&mut self, command: Command, now: f64) {
        let added = matches!(command, Command::AddShape(_));
        if let Err(err) = command.execute(&mut self.document) {
            error!("Failed to apply {:?}: {}", command, err);
            self.tool.reset();
            return;
        }
        if added {
            self.redraw_timer.restart(now);
        }
    }

    /// Write the canvas to the configured file
    pub fn save_canvas(&self) -> PersistenceResult<()> {
        persistence::save(&self.document, &self.settings.save_path)
    }

    /// Replace the canvas with the configured file's contents.
    /// On failure the current canvas is left untouched.
    pub fn load_canvas(&mut self) -> PersistenceResult<()> {
        let document = persistence::load(&self.settings.save_path)?;
        self.tool.reset();
        self.redraw_timer.cancel();
        self.document.replace(document);
        Ok(())
    }

    /// Save, then wipe every shape and trail
    pub fn reset_canvas(&mut self) {
        if let Err(err) = self.save_canvas() {
            error!("Failed to save canvas before reset: {}", err);
        }
        self.tool.reset();
        self.redraw_timer.cancel();
        if let Err(err) = Command::Clear.execute(&mut self.document) {
            error!("Failed to clear canvas: {}", err);
            return;
        }
        info!("Canvas reset");
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Reset").clicked() {
                self.reset_canvas();
            }
            if ui.button("Save").clicked() {
                if let Err(err) = self.save_canvas() {
                    error!("Failed to save canvas: {}", err);
                }
            }

            ui.separator();

            for kind in ShapeKind::ALL {
                if ui.selectable_label(self.tool.kind() == kind, kind.name()).clicked() {
                    info!("Shape kind selected: {}", kind.name());
                    self.set_shape_kind(kind);
                }
            }
        });
    }

    fn status_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Load").clicked() {
                if let Err(err) = self.load_canvas() {
                    error!("Failed to load canvas: {}", err);
                }
            }

            ui.separator();
            ui.label(format!(
                "{} shapes, {} trails",
                self.document.shapes().len(),
                self.document.drag_paths().len()
            ));
            if let Some(pos) = ui.ctx().input(|i| i.pointer.hover_pos()) {
                ui.label(format!("({:.0}, {:.0})", pos.x, pos.y));
            }
        });
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let ctx = ui.ctx().clone();
        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, egui::Sense::drag());
        let rect = response.rect;

        self.input.set_canvas_rect(rect);
        let now = ctx.input(|i| i.time);
        for event in self.input.process_input(&ctx) {
            self.handle_event(&event, now);
        }

        if let Some(cursor) = self.hover_cursor.filter(|_| response.hovered()) {
            ctx.set_cursor_icon(cursor);
        }

        self.renderer.render(
            &painter,
            rect,
            &self.document,
            self.tool.selected_index(),
            self.tool.anchor_size(),
        );

        if self.redraw_timer.take_due(now) {
            ctx.request_repaint();
        } else if let Some(remaining) = self.redraw_timer.remaining(now) {
            ctx.request_repaint_after(remaining);
        }
    }
}

impl eframe::App for CanvasApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| self.toolbar(ui));
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| self.status_bar(ui));
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| self.canvas(ui));
    }
}
