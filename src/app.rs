use eframe::egui::{self, Stroke};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};

use crate::batch::{request_stop, CancellationToken};
use crate::config::AppConfig;
use crate::download::{start_batch, update_ytdlp, YtDlp};
use crate::error::ValidationError;
use crate::localizations::Localizations;
use crate::models::{AppState, DownloadRequest, ProgressEvent, ProgressScope};
use crate::settings::{Settings, SettingsStore};
use crate::theme::*;
use crate::ui;

pub struct MediaCatcherApp {
    pub state: AppState,
    localizer: Localizations,
    config: AppConfig,
    settings: SettingsStore,
    token: Option<CancellationToken>,
    event_receiver: Option<Receiver<ProgressEvent>>,
    update_receiver: Option<Receiver<Result<String, String>>>,
    show_error: bool,
    applied_theme: Option<&'static str>,
}

impl MediaCatcherApp {
    pub fn new(config: AppConfig, localizer: Localizations) -> Self {
        let settings = SettingsStore::new(config.settings_path.clone());
        let saved = settings.load();

        let download_dir = saved
            .output_dir
            .unwrap_or_else(|| config.default_download_dir.clone());

        let state = AppState {
            theme: Theme::named(&saved.theme).name.to_string(),
            download_dir: download_dir.to_string_lossy().to_string(),
            status: localizer.tr("status-ready"),
            ..Default::default()
        };

        Self {
            state,
            localizer,
            config,
            settings,
            token: None,
            event_receiver: None,
            update_receiver: None,
            show_error: false,
            applied_theme: None,
        }
    }

    pub fn start_download(&mut self, ctx: &egui::Context) {
        if self.state.is_downloading {
            return;
        }

        let request = match DownloadRequest::new(
            &self.state.urls,
            self.state.playlist,
            self.state.media_kind(),
            PathBuf::from(self.state.download_dir.trim()),
        ) {
            Ok(request) => request,
            Err(e) => return self.reject(e),
        };
        let Some(binary) = self.config.ytdlp.clone() else {
            return self.reject(ValidationError::ToolMissing);
        };

        self.state.is_downloading = true;
        self.state.stop_requested = false;
        self.state.progress = 0.0;
        self.state.last_error = None;
        self.state.status = self.localizer.tr("status-starting");
        self.save_settings();

        log::info!(
            "Starting batch of {} URL(s) into {}",
            request.urls().len(),
            request.options().destination.display()
        );

        let token = CancellationToken::new();
        let (tx, rx) = mpsc::channel();
        let repaint = ctx.clone();
        start_batch(request, token.clone(), YtDlp::new(binary), tx, move || {
            repaint.request_repaint()
        });

        self.token = Some(token);
        self.event_receiver = Some(rx);
    }

    /// Sets the stop flag. Controls are only restored once the worker reports
    /// a terminal event.
    pub fn stop_download(&mut self) {
        if !self.state.is_downloading || self.state.stop_requested {
            return;
        }
        if let Some(token) = &self.token {
            request_stop(token);
            self.state.stop_requested = true;
            self.state.status = self.localizer.tr("status-stopping");
        }
    }

    pub fn clear_fields(&mut self) {
        if self.state.is_downloading {
            return;
        }
        self.state.urls.clear();
        self.state.progress = 0.0;
        self.state.last_error = None;
        self.state.status = self.localizer.tr("status-ready");
    }

    pub fn update_ytdlp(&mut self, ctx: &egui::Context) {
        if self.state.is_downloading {
            return;
        }
        let Some(binary) = self.config.ytdlp.clone() else {
            return self.reject(ValidationError::ToolMissing);
        };

        self.state.is_downloading = true;
        self.state.progress = 0.0;
        self.state.last_error = None;
        self.state.status = self.localizer.tr("status-updating");

        let (tx, rx) = mpsc::channel();
        let repaint = ctx.clone();
        update_ytdlp(binary, tx, move || repaint.request_repaint());
        self.update_receiver = Some(rx);
    }

    fn reject(&mut self, error: ValidationError) {
        log::warn!("Not starting: {}", error);
        self.show_failure(error.to_string());
    }

    fn show_failure(&mut self, message: String) {
        self.state.status = self.localizer.tr("status-error");
        self.state.last_error = Some(message);
        self.show_error = true;
    }

    fn save_settings(&self) {
        let settings = Settings {
            theme: self.state.theme.clone(),
            output_dir: Some(PathBuf::from(self.state.download_dir.trim())),
        };
        if let Err(e) = self.settings.save(&settings) {
            log::warn!("{:#}", e);
        }
    }

    /// Drains everything the worker has queued since the last frame.
    pub fn process_events(&mut self) {
        let Some(receiver) = &self.event_receiver else {
            return;
        };

        let mut events = Vec::new();
        let mut disconnected = false;
        loop {
            match receiver.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        for event in events {
            self.apply_event(event);
        }

        if disconnected && self.event_receiver.is_some() {
            log::warn!("Download worker went away without a final event");
            self.finish_run();
        }
    }

    fn apply_event(&mut self, event: ProgressEvent) {
        match event {
            ProgressEvent::Downloading {
                percent,
                item_index,
                item_count,
                scope,
            } => {
                self.state.progress = percent;
                if !self.state.stop_requested {
                    self.state.status =
                        self.progress_status(percent, item_index, item_count, scope);
                }
            }
            ProgressEvent::ItemFinished => {
                self.state.progress = 100.0;
                if !self.state.stop_requested {
                    self.state.status = self.localizer.tr("status-item-finished");
                }
            }
            ProgressEvent::BatchFinished => {
                self.state.status = self.localizer.tr("status-complete");
                self.finish_run();
            }
            ProgressEvent::Cancelled => {
                self.state.status = self.localizer.tr("status-stopped");
                self.finish_run();
            }
            ProgressEvent::Failed(message) => {
                self.show_failure(message);
                self.finish_run();
            }
        }
    }

    /// "Downloading (2/5)... 40.0%", or the playlist's own counter when yt-dlp
    /// reports one.
    fn progress_status(
        &self,
        percent: f32,
        item_index: usize,
        item_count: usize,
        scope: ProgressScope,
    ) -> String {
        let prefix = match scope {
            ProgressScope::Batch => self.localizer.tr("status-downloading"),
            ProgressScope::Playlist => self.localizer.tr("status-downloading-playlist"),
        };
        format!("{} ({}/{})... {:.1}%", prefix, item_index, item_count, percent)
    }

    /// Restores the idle controls. Runs for every way a batch can end.
    fn finish_run(&mut self) {
        self.state.is_downloading = false;
        self.state.stop_requested = false;
        self.token = None;
        self.event_receiver = None;
    }

    fn process_update_result(&mut self) {
        let Some(receiver) = &self.update_receiver else {
            return;
        };

        let result = match receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err(self.localizer.tr("update-failed")),
        };

        match result {
            Ok(message) => {
                self.state.status = format!("{}: {}", self.localizer.tr("update-success"), message);
            }
            Err(message) => {
                let failed = self.localizer.tr("update-failed");
                self.show_failure(format!("{}: {}", failed, message));
            }
        }
        self.state.is_downloading = false;
        self.update_receiver = None;
    }

    fn apply_theme(&mut self, ctx: &egui::Context) {
        let theme = Theme::named(&self.state.theme);
        if self.applied_theme != Some(theme.name) {
            ctx.set_visuals(theme.visuals());
            self.applied_theme = Some(theme.name);
        }
    }

    pub fn update_ui(&mut self, ctx: &egui::Context) {
        self.process_events();
        self.process_update_result();
        self.apply_theme(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.localizer.tr("app-title"));
            ui.add_space(12.0);

            ui::render_url_input(ui, &mut self.state, &self.localizer);
            ui.add_space(8.0);

            ui::render_playlist_toggle(ui, &mut self.state, &self.localizer);
            ui::render_media_selector(ui, &mut self.state, &self.localizer);
            ui.add_space(8.0);

            if ui::render_theme_selector(ui, &mut self.state, &self.localizer) {
                self.save_settings();
            }
            if ui::render_download_dir_selector(ui, &mut self.state, &self.localizer) {
                self.save_settings();
            }
            ui.add_space(12.0);

            self.render_buttons(ui, ctx);
            ui.add_space(12.0);

            ui::render_status(ui, &self.state);
        });

        self.render_error_window(ctx);
    }

    fn render_buttons(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let theme = Theme::named(&self.state.theme);
        let running_batch = self.state.is_downloading && self.token.is_some();

        ui.horizontal(|ui| {
            let download_button = egui::Button::new(
                egui::RichText::new(self.localizer.tr("download-button"))
                    .size(BUTTON_FONT_SIZE)
                    .color(BUTTON_MAIN_TEXT),
            )
            .min_size(MIN_SIZE_BUTTON)
            .fill(theme.primary_button_bg)
            .rounding(ROUNDING_BUTTON)
            .stroke(Stroke::new(1.0, BORDER_COLOR));

            if ui
                .add_enabled(!self.state.is_downloading, download_button)
                .clicked()
            {
                self.start_download(ctx);
            }

            let stop_button = egui::Button::new(
                egui::RichText::new(self.localizer.tr("stop-button"))
                    .size(BUTTON_FONT_SIZE)
                    .color(BUTTON_MAIN_TEXT),
            )
            .min_size(MIN_SIZE_BUTTON)
            .fill(STOP_BUTTON_BG)
            .rounding(ROUNDING_BUTTON);

            if ui
                .add_enabled(running_batch && !self.state.stop_requested, stop_button)
                .clicked()
            {
                self.stop_download();
            }

            let clear_button = egui::Button::new(
                egui::RichText::new(self.localizer.tr("clear-button")).size(BUTTON_FONT_SIZE),
            )
            .min_size(MIN_SIZE_BUTTON)
            .fill(theme.button_bg)
            .rounding(ROUNDING_BUTTON);

            if ui
                .add_enabled(!self.state.is_downloading, clear_button)
                .clicked()
            {
                self.clear_fields();
            }

            let update_button = egui::Button::new(
                egui::RichText::new(self.localizer.tr("update-button")).size(BUTTON_FONT_SIZE),
            )
            .min_size(MIN_SIZE_BUTTON)
            .fill(theme.button_bg)
            .rounding(ROUNDING_BUTTON);

            if ui
                .add_enabled(!self.state.is_downloading, update_button)
                .clicked()
            {
                self.update_ytdlp(ctx);
            }
        });
    }

    fn render_error_window(&mut self, ctx: &egui::Context) {
        if !self.show_error {
            return;
        }
        let Some(message) = self.state.last_error.clone() else {
            self.show_error = false;
            return;
        };

        let mut open = true;
        let mut close_clicked = false;
        egui::Window::new(self.localizer.tr("error-title"))
            .collapsible(false)
            .resizable(true)
            .open(&mut open)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .max_height(200.0)
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(message).color(TEXT_ERROR));
                    });
                ui.add_space(8.0);
                if ui.button(self.localizer.tr("close-button")).clicked() {
                    close_clicked = true;
                }
            });

        if !open || close_clicked {
            self.show_error = false;
        }
    }
}

impl eframe::App for MediaCatcherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_ui(ctx);
    }
}
