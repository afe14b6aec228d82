#![allow(dead_code)]

mod app;
#[cfg(feature = "calibrate")]
mod calibrate;
mod catalog;
mod choreographer;
mod constants;
mod events;
mod input;
mod loader;
mod presenter;
mod scene;
mod surface;
mod tween;
mod ui;
mod viewport;

use std::path::Path;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, TouchPhase, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

use app::GlShell;
use catalog::EventCatalog;
use choreographer::{Choreographer, NavDirection};
use constants::*;
use events::{EventQueue, NavEvent};
use input::{InputArbiter, InputScheme, PointerSource};
use loader::{AssetLoader, LoadStage, LoadStatus};
use presenter::InfoPanelPresenter;
use scene::GlobeScene;
use ui::info_panel::PanelView;
use ui::projects::ProjectsGallery;
use viewport::ViewportMetrics;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let event_loop = EventLoop::new()?;
    let mut app = App::new();
    event_loop.run_app(&mut app)?;
    Ok(())
}

struct App {
    state: Option<AppState>,
}

struct AppState {
    shell: GlShell,

    // Navigation core
    metrics: ViewportMetrics,
    catalog: EventCatalog,
    choreographer: Choreographer,
    arbiter: InputArbiter,
    presenter: InfoPanelPresenter,
    nav_events: EventQueue,

    // Presentation
    scene: GlobeScene,
    panel: PanelView,
    gallery: ProjectsGallery,

    // Asset loading
    loader: AssetLoader,
    primed: bool,

    #[cfg(feature = "calibrate")]
    editor: calibrate::CoordinateEditor,

    // Input tracking
    cursor_x: f32,

    // Timing
    last_frame_time: Instant,
}

impl App {
    fn new() -> Self {
        Self { state: None }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let shell = GlShell::new(event_loop);

        let size = shell.window.inner_size();
        let metrics = ViewportMetrics::recompute(size.width as f32, size.height as f32);
        let catalog = EventCatalog::builtin();
        let choreographer = Choreographer::new(metrics, &catalog);
        let arbiter = InputArbiter::new(InputScheme::for_compact_layout(metrics.is_compact));
        let presenter = InfoPanelPresenter::new(&metrics);

        self.state = Some(AppState {
            shell,
            metrics,
            catalog,
            choreographer,
            arbiter,
            presenter,
            nav_events: EventQueue::new(),
            scene: GlobeScene::new(),
            panel: PanelView::new(),
            gallery: ProjectsGallery::new(),
            loader: AssetLoader::new(),
            primed: false,
            #[cfg(feature = "calibrate")]
            editor: calibrate::CoordinateEditor::new(),
            cursor_x: 0.0,
            last_frame_time: Instant::now(),
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let state = match &mut self.state {
            Some(s) => s,
            None => return,
        };

        // Let egui handle the event first
        let egui_consumed = state
            .shell
            .egui_glow
            .on_window_event(&state.shell.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                state.shell.resize(size.width, size.height);
                state.handle_resize(size.width as f32, size.height as f32);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if !egui_consumed.consumed {
                    if let PhysicalKey::Code(key) = event.physical_key {
                        if event.state == ElementState::Pressed {
                            state.handle_key(event_loop, key);
                        }
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                state.cursor_x = position.x as f32;
            }
            WindowEvent::MouseInput { state: btn_state, button, .. } => {
                if !egui_consumed.consumed && button == MouseButton::Left {
                    let x = state.cursor_x;
                    match btn_state {
                        ElementState::Pressed => {
                            state.arbiter.on_pointer_down(PointerSource::Mouse, x);
                        }
                        ElementState::Released => {
                            if let Some(direction) =
                                state.arbiter.on_pointer_up(PointerSource::Mouse, x)
                            {
                                state.dispatch(direction);
                            }
                        }
                    }
                }
            }
            WindowEvent::Touch(touch) if !egui_consumed.consumed => {
                let x = touch.location.x as f32;
                match touch.phase {
                    TouchPhase::Started => {
                        state.arbiter.on_pointer_down(PointerSource::Touch, x);
                    }
                    TouchPhase::Ended => {
                        if let Some(direction) =
                            state.arbiter.on_pointer_up(PointerSource::Touch, x)
                        {
                            state.dispatch(direction);
                        }
                    }
                    TouchPhase::Cancelled => {
                        state.arbiter.on_pointer_cancel(PointerSource::Touch);
                    }
                    TouchPhase::Moved => {}
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                if !egui_consumed.consumed {
                    let scroll = match delta {
                        MouseScrollDelta::LineDelta(_, y) => y,
                        MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.05,
                    };
                    if let Some(direction) = state.arbiter.on_wheel(scroll) {
                        state.dispatch(direction);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                state.update_and_render();
                state.shell.window.request_redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.shell.window.request_redraw();
        }
    }
}

impl AppState {
    /// Forward an accepted gesture to the choreographer.
    fn dispatch(&mut self, direction: NavDirection) {
        let accepted =
            self.choreographer
                .request_advance(direction, &mut self.catalog, &mut self.nav_events);
        if !accepted {
            log::trace!("gesture dropped: transition in flight");
        }
    }

    fn handle_resize(&mut self, width: f32, height: f32) {
        self.metrics = ViewportMetrics::recompute(width, height);
        self.choreographer.handle_resize(self.metrics, &self.catalog);
        self.arbiter
            .set_scheme(InputScheme::for_compact_layout(self.metrics.is_compact));
        self.presenter.sync_layout(&self.metrics, &mut self.panel);
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, key: KeyCode) {
        match key {
            KeyCode::Escape => {
                event_loop.exit();
                return;
            }
            KeyCode::F11 => {
                use winit::window::Fullscreen;
                let fullscreen = if self.shell.window.fullscreen().is_some() {
                    None
                } else {
                    Some(Fullscreen::Borderless(None))
                };
                self.shell.window.set_fullscreen(fullscreen);
                return;
            }
            _ => {}
        }

        #[cfg(feature = "calibrate")]
        {
            if key == KeyCode::Backquote {
                self.editor.toggle(&self.catalog);
                return;
            }
            if key == KeyCode::KeyS && self.editor.is_active() {
                self.editor.save(&mut self.catalog);
                return;
            }
            if self.editor.handle_key(key) {
                self.editor.apply(&mut self.choreographer);
            }
        }
    }

    /// Perform one pending loading stage, if any.
    fn step_loading(&mut self) {
        let Some(stage) = self.loader.next_stage() else {
            return;
        };

        match stage {
            LoadStage::Catalog => match load_catalog() {
                Ok(catalog) => {
                    self.catalog = catalog;
                    // Re-seed the idle orientation for the loaded catalog.
                    self.choreographer.handle_resize(self.metrics, &self.catalog);
                    self.loader.complete_stage();
                }
                Err(message) => self.loader.fail(&message),
            },
            LoadStage::SceneGeometry => {
                self.scene.generate();
                self.loader.complete_stage();
            }
        }

        if self.loader.is_ready() && !self.primed {
            self.primed = true;
            self.arbiter.set_ready(true);
            self.presenter.prime(&self.catalog, &mut self.panel);
            log::info!("assets ready, accepting navigation input");
        }
    }

    fn update_and_render(&mut self) {
        let current_time = Instant::now();
        let raw_dt = (current_time - self.last_frame_time).as_secs_f32();
        self.last_frame_time = current_time;

        // Cap dt to prevent animation snapping after long frames
        let dt = raw_dt.min(MAX_ANIMATION_DT);

        self.step_loading();

        self.arbiter.update(dt);
        self.choreographer
            .update(dt, &self.catalog, &mut self.scene, &mut self.nav_events);

        // Sequence panel show/hide/repopulate off the transition events
        let drained: Vec<NavEvent> = self.nav_events.drain().collect();
        for event in drained {
            self.presenter.handle_event(event, &mut self.panel);
        }
        self.presenter.update(dt, &self.catalog, &mut self.panel);

        self.panel.update(dt);
        self.scene.update(dt);

        let actions = self.run_ui();
        self.process_ui_actions(actions);

        self.shell.present();
    }

    fn run_ui(&mut self) -> ui::UiActions {
        let mut actions = ui::UiActions::default();

        let scene = &self.scene;
        let panel = &self.panel;
        let gallery = &mut self.gallery;
        let status = self.loader.status();
        let nav_enabled = self.loader.is_ready()
            && !self.arbiter.in_cooldown()
            && !self.choreographer.is_transition_in_flight();
        let controls_offset =
            ui::clamp_controls_offset(self.panel.controls_offset(), self.metrics.height);
        #[cfg(feature = "calibrate")]
        let editor = &self.editor;

        self.shell.egui_glow.run(&self.shell.window, |ctx| {
            let painter = ctx.layer_painter(egui::LayerId::background());
            scene.draw(&painter, ctx.screen_rect());

            ui::loading::draw_loading_overlay(ctx, status);

            if status == LoadStatus::Ready {
                panel.draw(ctx);
                ui::draw_nav_controls(ctx, nav_enabled, controls_offset, &mut actions);
                ui::projects::draw_projects(ctx, gallery);

                #[cfg(feature = "calibrate")]
                ui::calibrate::draw_calibrate_window(ctx, editor, &mut actions);
            }
        });

        actions
    }

    fn process_ui_actions(&mut self, actions: ui::UiActions) {
        if let Some(direction) = actions.advance {
            if let Some(direction) = self.arbiter.on_button(direction) {
                self.dispatch(direction);
            }
        }

        #[cfg(feature = "calibrate")]
        if actions.save_calibration && self.editor.is_active() {
            self.editor.save(&mut self.catalog);
        }
    }
}

/// Load the life-event catalog, preferring an on-disk override.
///
/// A missing file falls back to the compiled-in events; a present but
/// malformed file is a load failure.
fn load_catalog() -> Result<EventCatalog, String> {
    let path = Path::new("assets/events.json");
    if !path.exists() {
        return Ok(EventCatalog::builtin());
    }
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    EventCatalog::from_json(&json)
}
