use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioCodec {
    /// Best native audio stream, no transcoding.
    #[default]
    Original,
    Mp3,
    M4a,
    Opus,
    Wav,
    Flac,
}

impl AudioCodec {
    pub const ALL: [AudioCodec; 6] = [
        AudioCodec::Original,
        AudioCodec::Mp3,
        AudioCodec::M4a,
        AudioCodec::Opus,
        AudioCodec::Wav,
        AudioCodec::Flac,
    ];

    /// Value for yt-dlp's `--audio-format`, `None` when no extraction step is wanted.
    pub fn extract_format(self) -> Option<&'static str> {
        match self {
            Self::Original => None,
            Self::Mp3 => Some("mp3"),
            Self::M4a => Some("m4a"),
            Self::Opus => Some("opus"),
            Self::Wav => Some("wav"),
            Self::Flac => Some("flac"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Original => "Original (m4a)",
            Self::Mp3 => "MP3",
            Self::M4a => "M4A",
            Self::Opus => "Opus",
            Self::Wav => "WAV",
            Self::Flac => "FLAC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioBitrate {
    Kbps128,
    #[default]
    Kbps192,
    Kbps256,
    Kbps320,
}

impl AudioBitrate {
    pub const ALL: [AudioBitrate; 4] = [
        AudioBitrate::Kbps128,
        AudioBitrate::Kbps192,
        AudioBitrate::Kbps256,
        AudioBitrate::Kbps320,
    ];

    pub fn kbps(self) -> u32 {
        match self {
            Self::Kbps128 => 128,
            Self::Kbps192 => 192,
            Self::Kbps256 => 256,
            Self::Kbps320 => 320,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoQuality {
    #[default]
    Best,
    P2160,
    P1440,
    P1080,
    P720,
    P480,
    P360,
}

impl VideoQuality {
    pub const ALL: [VideoQuality; 7] = [
        VideoQuality::Best,
        VideoQuality::P2160,
        VideoQuality::P1440,
        VideoQuality::P1080,
        VideoQuality::P720,
        VideoQuality::P480,
        VideoQuality::P360,
    ];

    /// Maximum frame height, `None` for no limit.
    pub fn max_height(self) -> Option<u32> {
        match self {
            Self::Best => None,
            Self::P2160 => Some(2160),
            Self::P1440 => Some(1440),
            Self::P1080 => Some(1080),
            Self::P720 => Some(720),
            Self::P480 => Some(480),
            Self::P360 => Some(360),
        }
    }

    pub fn label(self) -> String {
        match self.max_height() {
            Some(h) => format!("{}p", h),
            None => "Best".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Audio {
        codec: AudioCodec,
        bitrate: AudioBitrate,
    },
    Video {
        quality: VideoQuality,
    },
}

impl Default for MediaKind {
    fn default() -> Self {
        Self::Audio {
            codec: AudioCodec::default(),
            bitrate: AudioBitrate::default(),
        }
    }
}

/// Options shared by every URL of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOptions {
    pub playlist: bool,
    pub media: MediaKind,
    pub destination: PathBuf,
}

/// One validated batch job. Only constructible through [`DownloadRequest::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    urls: Vec<String>,
    options: DownloadOptions,
}

impl DownloadRequest {
    /// Splits `raw` into one URL per line, dropping blank lines, and checks that
    /// the destination is an existing folder we can write to.
    pub fn new(
        raw: &str,
        playlist: bool,
        media: MediaKind,
        destination: PathBuf,
    ) -> Result<Self, ValidationError> {
        let urls: Vec<String> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        if urls.is_empty() {
            return Err(ValidationError::EmptyInput);
        }

        check_destination(&destination)?;

        Ok(Self {
            urls,
            options: DownloadOptions {
                playlist,
                media,
                destination,
            },
        })
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn options(&self) -> &DownloadOptions {
        &self.options
    }
}

fn check_destination(path: &Path) -> Result<(), ValidationError> {
    let invalid = |reason: String| ValidationError::InvalidDestination {
        path: path.to_path_buf(),
        reason,
    };

    if path.as_os_str().is_empty() {
        return Err(invalid("no folder selected".to_string()));
    }
    let metadata = fs::metadata(path).map_err(|e| invalid(e.to_string()))?;
    if !metadata.is_dir() {
        return Err(invalid("not a folder".to_string()));
    }

    // Mode bits do not account for ACLs or read-only mounts; a real file does.
    tempfile::Builder::new()
        .prefix(".media-catcher-")
        .tempfile_in(path)
        .map_err(|e| invalid(format!("folder is not writable: {}", e)))?;
    Ok(())
}

/// Which counter an index/count pair in a progress event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressScope {
    /// Position of the URL in the user's list.
    Batch,
    /// Position reported by yt-dlp inside an expanded playlist.
    Playlist,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    Downloading {
        percent: f32,
        item_index: usize,
        item_count: usize,
        scope: ProgressScope,
    },
    ItemFinished,
    BatchFinished,
    Cancelled,
    Failed(String),
}

impl ProgressEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::BatchFinished | Self::Cancelled | Self::Failed(_)
        )
    }
}

/// One progress tick for the item currently handled by a downloader.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemProgress {
    pub percent: f32,
    /// `(index, count)` inside an expanded playlist, when yt-dlp reports one.
    pub playlist_position: Option<(usize, usize)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaChoice {
    #[default]
    Audio,
    Video,
}

#[derive(Default)]
pub struct AppState {
    pub urls: String,
    pub playlist: bool,
    pub media: MediaChoice,
    pub audio_codec: AudioCodec,
    pub audio_bitrate: AudioBitrate,
    pub video_quality: VideoQuality,
    pub theme: String,
    pub download_dir: String,
    pub is_downloading: bool,
    pub stop_requested: bool,
    pub progress: f32,
    pub status: String,
    pub last_error: Option<String>,
}

impl AppState {
    pub fn media_kind(&self) -> MediaKind {
        match self.media {
            MediaChoice::Audio => MediaKind::Audio {
                codec: self.audio_codec,
                bitrate: self.audio_bitrate,
            },
            MediaChoice::Video => MediaKind::Video {
                quality: self.video_quality,
            },
        }
    }
}
