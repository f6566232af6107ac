//! Sodo desktop application shell.
//!
//! # Design Notes
//! - One frame: poll flows, apply actions, read input, advance deadlines,
//!   render, then apply the actions the widgets requested.
//! - Time only enters the controller through `now`, read once per frame.
//! - Repaints are scheduled for the earliest pending deadline (flash expiry,
//!   delayed clear, autoplay tick) and once a second for the game timer.

use std::time::{Duration, Instant};

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context},
};
use sodo_client::HttpService;

use crate::{
    action::{self, ActionRequestQueue},
    config::Config,
    flow::tasks,
    state::{AppState, UiState},
    ui, view_model_builder,
    worker::Worker,
};

const CLOCK_REFRESH: Duration = Duration::from_secs(1);

#[derive(Debug)]
pub struct SodoApp {
    app_state: AppState,
    ui_state: UiState,
}

impl SodoApp {
    #[must_use]
    pub fn new(_cc: &CreationContext<'_>, config: &Config, service: HttpService) -> Self {
        let worker = Worker::spawn(Box::new(service));
        let level = config.level();

        let app_state = AppState::new(level, Instant::now());
        let mut ui_state = UiState::new(worker, level);
        tasks::spawn_startup_flow(&mut ui_state.executor, &ui_state.worker, level);

        Self {
            app_state,
            ui_state,
        }
    }

    fn next_deadline(&self) -> Option<Instant> {
        let grid = self.app_state.grid.next_deadline();
        let overlay = self.ui_state.next_deadline();
        grid.into_iter().chain(overlay).min()
    }

    fn schedule_repaint(&self, ctx: &Context, now: Instant) {
        if !self.ui_state.executor.is_idle() {
            // Worker replies are polled, not pushed.
            ctx.request_repaint();
            return;
        }
        let delay = self
            .next_deadline()
            .map_or(CLOCK_REFRESH, |deadline| {
                deadline.saturating_duration_since(now).min(CLOCK_REFRESH)
            });
        ctx.request_repaint_after(delay);
    }
}

impl App for SodoApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = Instant::now();
        let mut action_queue = ActionRequestQueue::default();

        self.ui_state.executor.poll(&mut action_queue);
        action::handler::handle_all(
            &mut self.app_state,
            &mut self.ui_state,
            &mut action_queue,
            now,
        );

        if self.ui_state.accepts_grid_input() {
            ctx.input(|i| {
                ui::input::handle_input(i, &mut action_queue);
            });
            action::handler::handle_all(
                &mut self.app_state,
                &mut self.ui_state,
                &mut action_queue,
                now,
            );
        }

        action::handler::tick(&mut self.app_state, &mut self.ui_state, now);

        let game_screen_vm =
            view_model_builder::build_game_screen_view_model(&self.app_state, &self.ui_state, now);
        CentralPanel::default().show(ctx, |ui| {
            ui::game_screen::show(ui, &game_screen_vm, &mut action_queue);
        });

        if let Some(playback_vm) = view_model_builder::build_playback_view_model(&self.ui_state) {
            ui::playback::show(ctx, &playback_vm, &mut action_queue);
        }

        if let Some(modal_request) = self.ui_state.active_modal_mut() {
            ui::modal::show(ctx, &mut action_queue, modal_request);
        }

        if let Some(spinner) = self.ui_state.spinner_state.active_kind() {
            ui::spinner::show(ctx, spinner);
        }

        action::handler::handle_all(
            &mut self.app_state,
            &mut self.ui_state,
            &mut action_queue,
            now,
        );

        self.schedule_repaint(ctx, now);
    }
}
