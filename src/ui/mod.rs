use eframe::egui;
use rfd::FileDialog;
use std::path::Path;

use crate::localizations::Localizations;
use crate::models::{AppState, AudioBitrate, AudioCodec, MediaChoice, VideoQuality};
use crate::theme::{Theme, ROUNDING_FRAME, TEXT_ERROR, THEMES};

pub fn render_url_input(
    ui: &mut egui::Ui,
    state: &mut AppState,
    localizer: &Localizations,
) -> egui::Response {
    ui.label(localizer.tr("url-label"));

    egui::Frame::group(ui.style())
        .fill(ui.visuals().extreme_bg_color)
        .rounding(ROUNDING_FRAME)
        .show(ui, |ui| {
            egui::ScrollArea::vertical()
                .max_height(120.0)
                .show(ui, |ui| {
                    ui.add_enabled(
                        !state.is_downloading,
                        egui::TextEdit::multiline(&mut state.urls)
                            .hint_text(localizer.tr("url-placeholder"))
                            .desired_rows(5)
                            .desired_width(f32::INFINITY)
                            .font(egui::FontId::proportional(15.0)),
                    )
                })
                .inner
        })
        .inner
}

pub fn render_playlist_toggle(ui: &mut egui::Ui, state: &mut AppState, localizer: &Localizations) {
    ui.add_enabled(
        !state.is_downloading,
        egui::Checkbox::new(&mut state.playlist, localizer.tr("playlist-label")),
    );
}

pub fn render_media_selector(ui: &mut egui::Ui, state: &mut AppState, localizer: &Localizations) {
    ui.add_enabled_ui(!state.is_downloading, |ui| {
        ui.horizontal(|ui| {
            ui.label(localizer.tr("media-label"));
            ui.radio_value(&mut state.media, MediaChoice::Audio, localizer.tr("media-audio"));
            ui.radio_value(&mut state.media, MediaChoice::Video, localizer.tr("media-video"));
        });

        ui.horizontal(|ui| match state.media {
            MediaChoice::Audio => {
                ui.label(localizer.tr("codec-label"));
                egui::ComboBox::from_id_source("audio-codec")
                    .selected_text(state.audio_codec.label())
                    .show_ui(ui, |ui| {
                        for codec in AudioCodec::ALL {
                            ui.selectable_value(&mut state.audio_codec, codec, codec.label());
                        }
                    });

                // The original stream keeps its own bitrate.
                ui.add_enabled_ui(state.audio_codec != AudioCodec::Original, |ui| {
                    ui.label(localizer.tr("bitrate-label"));
                    egui::ComboBox::from_id_source("audio-bitrate")
                        .selected_text(format!("{} kbps", state.audio_bitrate.kbps()))
                        .show_ui(ui, |ui| {
                            for bitrate in AudioBitrate::ALL {
                                ui.selectable_value(
                                    &mut state.audio_bitrate,
                                    bitrate,
                                    format!("{} kbps", bitrate.kbps()),
                                );
                            }
                        });
                });
            }
            MediaChoice::Video => {
                ui.label(localizer.tr("quality-label"));
                egui::ComboBox::from_id_source("video-quality")
                    .selected_text(state.video_quality.label())
                    .show_ui(ui, |ui| {
                        for quality in VideoQuality::ALL {
                            ui.selectable_value(&mut state.video_quality, quality, quality.label());
                        }
                    });
            }
        });
    });
}

/// Returns true when the user picked a different theme.
pub fn render_theme_selector(
    ui: &mut egui::Ui,
    state: &mut AppState,
    localizer: &Localizations,
) -> bool {
    let before = Theme::named(&state.theme).name;

    ui.horizontal(|ui| {
        ui.label(localizer.tr("theme-label"));
        egui::ComboBox::from_id_source("theme")
            .selected_text(before)
            .show_ui(ui, |ui| {
                for theme in THEMES.iter() {
                    if ui.selectable_label(before == theme.name, theme.name).clicked() {
                        state.theme = theme.name.to_string();
                    }
                }
            });
    });

    Theme::named(&state.theme).name != before
}

/// Returns true when a folder was picked from the dialog.
pub fn render_download_dir_selector(
    ui: &mut egui::Ui,
    state: &mut AppState,
    localizer: &Localizations,
) -> bool {
    let mut picked = false;

    ui.horizontal(|ui| {
        ui.label(format!(
            "{} {}",
            localizer.tr("output-label"),
            folder_label(&state.download_dir)
        ));

        let button = egui::Button::new(egui::RichText::new(localizer.tr("browse-button")).size(14.0))
            .min_size(egui::vec2(100.0, 30.0))
            .rounding(ROUNDING_FRAME);

        if ui.add_enabled(!state.is_downloading, button).clicked() {
            let current = Path::new(&state.download_dir);
            let start = if current.is_dir() {
                current
            } else {
                current.parent().unwrap_or_else(|| Path::new("."))
            };

            if let Some(path) = FileDialog::new().set_directory(start).pick_folder() {
                state.download_dir = path.to_string_lossy().to_string();
                picked = true;
            }
        }
    });

    picked
}

/// Last component of the folder path, or the whole path when there is none.
pub fn folder_label(dir: &str) -> String {
    Path::new(dir)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.to_string())
}

pub fn render_status(ui: &mut egui::Ui, state: &AppState) {
    egui::Frame::group(ui.style())
        .rounding(8.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical(|ui| {
                ui.add(egui::ProgressBar::new(state.progress / 100.0).show_percentage());
                ui.add_space(6.0);

                let status = egui::RichText::new(&state.status);
                if state.last_error.is_some() {
                    ui.label(status.color(TEXT_ERROR));
                } else {
                    ui.label(status);
                }
            });
        });
}
