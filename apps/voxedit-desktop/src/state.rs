use egui::Context as EguiContext;
use glam::Vec2;
use std::time::Instant;
use voxedit_author::{BrushEditor, BrushError, resolve};
use voxedit_common::{BrushShape, EditorConfig, GridBounds, GridCell, PlacedBrush};
use voxedit_input::{Action, FrameInput};
use voxedit_render::{EditorCamera, Scene};
use voxedit_tools::EditorInspector;
use winit::keyboard::KeyCode;

/// Longest frame step fed to the camera, so a stall doesn't teleport it.
const MAX_FRAME_SECONDS: f32 = 0.1;

/// Desktop key bindings.
pub fn action_for_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::KeyW => Some(Action::MoveForward),
        KeyCode::KeyS => Some(Action::MoveBack),
        KeyCode::KeyA => Some(Action::StrafeLeft),
        KeyCode::KeyD => Some(Action::StrafeRight),
        KeyCode::Space => Some(Action::MoveUp),
        KeyCode::ShiftLeft => Some(Action::MoveDown),
        KeyCode::Escape => Some(Action::ToggleLookLock),
        _ => None,
    }
}

/// Editor state driven once per frame by the window loop.
pub struct AppState {
    pub camera: EditorCamera,
    pub editor: BrushEditor,
    bounds: GridBounds,
    input: FrameInput,
    /// Cursor grabbed for mouse look; picking then uses the viewport center.
    look_locked: bool,
    /// Accumulated raw mouse motion, the camera's look cursor while locked.
    look_cursor: Vec2,
    /// Real cursor position in physical pixels.
    cursor: Vec2,
    viewport: Vec2,
    preview: Option<GridCell>,
    /// egui claimed the pointer last frame.
    ui_wants_pointer: bool,
    last_frame: Instant,
}

impl AppState {
    pub fn new(config: &EditorConfig, width: u32, height: u32) -> Result<Self, BrushError> {
        let mut camera = EditorCamera::from_config(&config.camera, 1.0);
        camera.set_viewport(width, height);
        Ok(Self {
            camera,
            editor: BrushEditor::new(&config.brush)?,
            bounds: config.grid.bounds(),
            input: FrameInput::default(),
            look_locked: true,
            look_cursor: Vec2::ZERO,
            cursor: Vec2::ZERO,
            viewport: Vec2::new(width as f32, height as f32),
            preview: None,
            ui_wants_pointer: false,
            last_frame: Instant::now(),
        })
    }

    pub fn look_locked(&self) -> bool {
        self.look_locked
    }

    pub fn preview(&self) -> Option<GridCell> {
        self.preview
    }

    /// Returns the new lock state when the key toggled look lock.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool, repeat: bool) -> Option<bool> {
        let action = action_for_key(key)?;
        if action == Action::ToggleLookLock {
            if pressed && !repeat {
                self.look_locked = !self.look_locked;
                tracing::info!(locked = self.look_locked, "look lock toggled");
                return Some(self.look_locked);
            }
            return None;
        }
        self.input.set_held(action, pressed);
        None
    }

    pub fn handle_mouse_motion(&mut self, delta: Vec2) {
        if self.look_locked {
            self.look_cursor += delta;
        }
    }

    pub fn handle_cursor_moved(&mut self, position: Vec2) {
        self.cursor = position;
    }

    pub fn handle_primary_button(&mut self, pressed: bool) {
        self.input.primary_pressed = pressed;
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Vec2::new(width as f32, height as f32);
        self.camera.set_viewport(width, height);
    }

    /// Seconds since the previous frame, capped.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32().min(MAX_FRAME_SECONDS);
        self.last_frame = now;
        dt
    }

    fn pick_cursor(&self) -> Vec2 {
        if self.look_locked {
            self.viewport * 0.5
        } else {
            self.cursor
        }
    }

    fn pointer_free(&self) -> bool {
        self.look_locked || !self.ui_wants_pointer
    }

    /// Camera integration and live preview. Camera only moves while look is
    /// locked.
    pub fn update(&mut self, dt: f32) {
        if self.look_locked {
            self.input.cursor = self.look_cursor;
            self.camera.update(dt, &self.input);
        }
        self.preview = if self.pointer_free() {
            resolve(self.pick_cursor(), self.viewport, &self.camera, self.bounds)
        } else {
            None
        };
    }

    /// Place on the rising edge of the primary button. Runs at the end of the
    /// frame, after the UI had a chance to claim the pointer.
    pub fn commit_click(&mut self) -> Option<PlacedBrush> {
        let cursor = self.pick_cursor();
        let enabled = self.pointer_free();
        let (viewport, bounds, camera) = (self.viewport, self.bounds, &self.camera);
        let placed = self.editor.commit_on_click(self.input.primary_pressed, enabled, || {
            resolve(cursor, viewport, camera, bounds)
        });
        if let Some(p) = placed {
            tracing::info!(cell = %p.cell, size = p.size, "placed cube");
        }
        placed
    }

    pub fn scene(&self) -> Scene<'_> {
        Scene {
            camera: &self.camera,
            bounds: self.bounds,
            placed: self.editor.placed(),
            preview: self.preview,
            preview_size: self.editor.brush().size,
        }
    }

    pub fn draw_ui(&mut self, ctx: &EguiContext) {
        let summary = EditorInspector::summary(&self.camera, &self.editor, self.preview);

        egui::Window::new("Brush Tools")
            .default_pos([12.0, 12.0])
            .resizable(false)
            .show(ctx, |ui| {
                let brush = self.editor.brush();
                for shape in BrushShape::ALL {
                    if ui.radio(brush.shape == shape, shape.label()).clicked() {
                        self.editor.set_brush_shape(shape);
                    }
                }

                let (min, max) = self.editor.size_range();
                let mut size = brush.size;
                let slider = egui::Slider::new(&mut size, min..=max)
                    .text("Brush Size")
                    .fixed_decimals(1);
                if ui.add(slider).changed() {
                    if let Err(e) = self.editor.set_brush_size(size) {
                        tracing::warn!("{e}");
                    }
                }

                ui.label("Left-click in the viewport to place a block.");
                ui.separator();
                ui.label(summary.camera_line());
                ui.label(summary.orientation_line());
                ui.label(format!(
                    "Mouse Grabbed: {}",
                    if self.look_locked { "Yes" } else { "No" }
                ));
                ui.label(format!("Placed: {}", summary.placed_count));
                match summary.preview {
                    Some(cell) => ui.label(format!(
                        "Target: {cell} ({} placed here)",
                        summary.preview_stack
                    )),
                    None => ui.label("Target: none"),
                };
                ui.separator();
                ui.small("Press ESC to toggle mouse grab for UI interaction.");
                ui.small("WASD: Move | Space/Shift: Up/Down");
            });

        if self.look_locked {
            let center = ctx.screen_rect().center();
            let painter = ctx.layer_painter(egui::LayerId::new(
                egui::Order::Foreground,
                egui::Id::new("crosshair"),
            ));
            let stroke = egui::Stroke::new(1.5, egui::Color32::WHITE);
            for arm in [egui::vec2(8.0, 0.0), egui::vec2(0.0, 8.0)] {
                painter.line_segment([center - arm, center + arm], stroke);
            }
        }
    }

    /// Record whether egui wants the pointer, after the UI ran this frame.
    pub fn set_ui_wants_pointer(&mut self, wants: bool) {
        self.ui_wants_pointer = wants;
    }
}
