use std::error::Error;
use std::time::Instant;

use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{error, warn};
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::Window;

use crate::controllers::session::RenderSession;
use crate::core::actions::render_frame::RenderStrategy;
use crate::core::data::frame_size::FrameSize;
use crate::core::fractals::julia::colour_mapping::kinds::JuliaColourMapKinds;
use crate::core::fractals::julia::julia_config::JuliaConfig;
use crate::core::parameter::animation::ANIMATION_INTERVAL;
use crate::core::parameter::control_plane::ControlPlane;
use crate::core::parameter::presets::JULIA_PRESETS;
use crate::input::gui::app::control_plane_view;
use crate::input::gui::app::panel_state::PanelState;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::viewport_input::{ViewportInput, wheel};

pub const CONTROL_PLANE_SIZE: u32 = 200;
const MAX_ITERATIONS_RANGE: std::ops::RangeInclusive<u32> = 10..=2000;

pub struct GuiApp<T: GuiPresenterPort> {
    presenter: T,
    session: RenderSession,
    input: ViewportInput,
    control_plane: ControlPlane,
    panel: PanelState,
    next_tick: Option<Instant>,
    pub scale_factor: f64,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        config: JuliaConfig,
    ) -> Result<Self, Box<dyn Error>> {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Ok(Self {
            presenter,
            session: RenderSession::new(size.width.max(1), size.height.max(1), config)?,
            input: ViewportInput::default(),
            control_plane: ControlPlane::new(FrameSize::new(CONTROL_PLANE_SIZE, CONTROL_PLANE_SIZE)?),
            panel: PanelState::default(),
            next_tick: None,
            scale_factor,
            egui_ctx,
            egui_state,
        })
    }

    /// Forwards the event to egui first. Returns `(consumed, repaint)`.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        if let Err(err) = self.presenter.resize(width, height) {
            error!("failed to resize framebuffer to {}x{}: {}", width, height, err);
            return;
        }
        if let Err(err) = self.session.resize(width, height) {
            error!("failed to resize session: {}", err);
        }
    }

    /// Pointer events on the fractal itself. Returns whether the view changed.
    pub fn handle_pointer_event(&mut self, event: &WindowEvent, egui_consumed: bool) -> bool {
        let command = match event {
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                match state {
                    ElementState::Pressed if !egui_consumed => self.input.press(),
                    ElementState::Pressed => {}
                    ElementState::Released => self.input.release(),
                }
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input.cursor_moved(position.x, position.y)
            }
            WindowEvent::CursorLeft { .. } => {
                self.input.cursor_left();
                None
            }
            WindowEvent::MouseWheel { delta, .. } if !egui_consumed => {
                // winit reports scrolling up as positive
                let delta_y = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -f64::from(*y),
                    MouseScrollDelta::PixelDelta(position) => -position.y,
                };

                self.input
                    .cursor()
                    .filter(|_| delta_y != 0.0)
                    .map(|(x, y)| wheel(delta_y, x, y))
            }
            _ => None,
        };

        let Some(command) = command else {
            return false;
        };

        match self.session.apply(command) {
            Ok(()) => true,
            Err(err) => {
                warn!("ignoring view change: {}", err);
                false
            }
        }
    }

    /// Advances the animation when its interval has elapsed. Returns the
    /// instant the event loop should wake next, if the animation is running.
    pub fn tick_animation(&mut self, now: Instant) -> Option<Instant> {
        if !self.session.parameter().is_animating() {
            self.next_tick = None;
            return None;
        }

        let due = *self.next_tick.get_or_insert(now + ANIMATION_INTERVAL);
        if now >= due {
            self.session.tick_animation();
            self.next_tick = Some(now + ANIMATION_INTERVAL);
        }

        self.next_tick
    }

    #[must_use]
    pub fn needs_render(&self) -> bool {
        self.session.is_dirty()
    }

    /// Renders a new fractal frame if anything changed since the last one.
    pub fn render_fractal_if_needed(&mut self) {
        if !self.session.take_dirty() {
            return;
        }

        let start = Instant::now();
        match self.session.render() {
            Ok(buffer) => {
                if self.presenter.present(&buffer) {
                    self.panel.record_render(start.elapsed());
                }
            }
            Err(err) => {
                error!("render failed: {}", err);
                self.panel.render_error = Some(err.to_string());
            }
        }
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.presenter.render(egui_output, &self.egui_ctx)
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let ctx = self.egui_ctx.clone();

        ctx.run(raw_input, |ctx| {
            egui::Window::new("Julia Explorer")
                .default_pos([10.0, 10.0])
                .resizable(false)
                .show(ctx, |ui| self.draw_panel(ui));
        })
    }

    fn draw_panel(&mut self, ui: &mut egui::Ui) {
        let label = self.session.parameter().label();
        ui.heading(&label);

        let c = self.session.parameter().c();
        if let Some(picked) = control_plane_view::show(ui, &self.control_plane, c, &label) {
            self.session.set_parameter(picked);
            self.panel.parameter_input = format!("{:.4},{:.4}", picked.real, picked.imag);
        }

        ui.horizontal(|ui| {
            let response = ui.text_edit_singleline(&mut self.panel.parameter_input);
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            if submitted || ui.button("Set").clicked() {
                self.panel.apply_parameter_input(&mut self.session);
            }
        });
        if let Some(message) = &self.panel.parameter_error {
            ui.colored_label(egui::Color32::LIGHT_RED, message);
        }

        egui::ComboBox::from_id_source("julia_presets")
            .selected_text("Presets")
            .show_ui(ui, |ui| {
                for preset in JULIA_PRESETS {
                    if ui.selectable_label(c == preset.c, preset.name).clicked() {
                        self.session.set_parameter(preset.c);
                        self.panel.parameter_input = format!("{},{}", preset.c.real, preset.c.imag);
                    }
                }
            });

        let animate_label = if self.session.parameter().is_animating() {
            "Stop animation"
        } else {
            "Animate"
        };
        if ui.button(animate_label).clicked() {
            self.session.toggle_animation();
        }

        ui.separator();
        self.draw_settings(ui);

        ui.separator();
        if ui.button("Reset view").clicked() {
            self.session.reset_view();
        }

        let size = self.session.size();
        ui.label(format!("Window size: {}x{}", size.width(), size.height()));
        if let Some(duration) = self.panel.last_render {
            ui.label(format!("Last render: {} ms", duration.as_millis()));
        }
        if let Some(message) = &self.panel.render_error {
            ui.colored_label(egui::Color32::LIGHT_RED, message);
        }
    }

    fn draw_settings(&mut self, ui: &mut egui::Ui) {
        let mut config = self.session.config();

        ui.horizontal(|ui| {
            ui.label("Max iterations:");
            ui.add(egui::Slider::new(&mut config.max_iterations, MAX_ITERATIONS_RANGE));
        });

        ui.horizontal(|ui| {
            ui.label("Colour map:");
            egui::ComboBox::from_id_source("julia_colour_map")
                .selected_text(config.colour_map_kind.display_name())
                .show_ui(ui, |ui| {
                    for &kind in JuliaColourMapKinds::ALL {
                        ui.selectable_value(&mut config.colour_map_kind, kind, kind.display_name());
                    }
                });
        });

        ui.horizontal(|ui| {
            ui.label("Strategy:");
            for &strategy in RenderStrategy::ALL {
                ui.selectable_value(&mut config.strategy, strategy, strategy.display_name());
            }
        });

        if ui.button("Reset detail").clicked() {
            config.reset_detail();
        }

        if let Err(err) = self.session.set_config(config) {
            warn!("ignoring settings change: {}", err);
        }
    }
}
