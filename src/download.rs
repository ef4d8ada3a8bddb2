use std::ffi::OsString;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::Sender;
use std::thread;

use crate::batch::{BatchController, CancellationToken};
use crate::error::DownloadError;
use crate::models::{DownloadOptions, DownloadRequest, ItemProgress, MediaKind, ProgressEvent};

/// Marker yt-dlp prints in front of every progress line we ask it for.
const PROGRESS_MARKER: &str = "mc-progress|";

/// `status|percent|playlist index|playlist count`. Missing fields render as `NA`.
const PROGRESS_TEMPLATE: &str = "download:mc-progress|%(progress.status)s|%(progress._percent_str)s|%(info.playlist_index)s|%(info.playlist_count)s";

/// Downloads a single URL. The implementation owns the blocking transfer and
/// must check `token` on every progress tick.
pub trait Downloader {
    fn download_one(
        &self,
        url: &str,
        options: &DownloadOptions,
        token: &CancellationToken,
        emit: &mut dyn FnMut(ItemProgress),
    ) -> Result<(), DownloadError>;
}

/// A progress line as printed by yt-dlp, before the percent is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressNotice {
    Downloading {
        percent: String,
        playlist_position: Option<(usize, usize)>,
    },
    Finished {
        playlist_position: Option<(usize, usize)>,
    },
}

pub fn parse_progress_line(line: &str) -> Option<ProgressNotice> {
    let rest = line.trim().strip_prefix(PROGRESS_MARKER)?;
    let parts: Vec<&str> = rest.split('|').map(str::trim).collect();
    if parts.len() < 4 {
        return None;
    }

    let playlist_position = match (parts[2].parse::<usize>(), parts[3].parse::<usize>()) {
        (Ok(index), Ok(count)) if count > 0 => Some((index, count)),
        _ => None,
    };

    match parts[0] {
        "downloading" => Some(ProgressNotice::Downloading {
            percent: parts[1].to_string(),
            playlist_position,
        }),
        "finished" => Some(ProgressNotice::Finished { playlist_position }),
        _ => None,
    }
}

/// Parses yt-dlp's `_percent_str` (e.g. `" 42.7%"`). `N/A` and friends yield `None`.
pub fn parse_percent(raw: &str) -> Option<f32> {
    raw.trim()
        .trim_end_matches('%')
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|p| p.is_finite())
}

/// Turns progress notices into [`ItemProgress`] ticks and aborts once the
/// token is cancelled.
pub struct ProgressHook<'a> {
    token: &'a CancellationToken,
    emit: &'a mut dyn FnMut(ItemProgress),
    finished: usize,
}

impl<'a> ProgressHook<'a> {
    pub fn new(token: &'a CancellationToken, emit: &'a mut dyn FnMut(ItemProgress)) -> Self {
        Self {
            token,
            emit,
            finished: 0,
        }
    }

    /// Number of files yt-dlp reported as finished so far.
    pub fn finished(&self) -> usize {
        self.finished
    }

    pub fn check_token(&self) -> Result<(), DownloadError> {
        if self.token.is_cancelled() {
            Err(DownloadError::Cancelled)
        } else {
            Ok(())
        }
    }

    pub fn on_notice(&mut self, notice: ProgressNotice) -> Result<(), DownloadError> {
        self.check_token()?;

        match notice {
            ProgressNotice::Downloading {
                percent,
                playlist_position,
            } => match parse_percent(&percent) {
                Some(percent) => (self.emit)(ItemProgress {
                    percent,
                    playlist_position,
                }),
                None => log::trace!("Skipping progress tick with percent {:?}", percent),
            },
            ProgressNotice::Finished { playlist_position } => {
                self.finished += 1;
                (self.emit)(ItemProgress {
                    percent: 100.0,
                    playlist_position,
                });
            }
        }
        Ok(())
    }
}

/// Arguments for one yt-dlp call, URL last.
pub fn build_args(url: &str, options: &DownloadOptions) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::new();
    let mut push = |arg: &str| args.push(OsString::from(arg));

    push("--newline");
    push("--no-colors");
    push("--ignore-errors");
    push("--progress");
    push("--progress-template");
    push(PROGRESS_TEMPLATE);

    if options.playlist {
        push("--yes-playlist");
    } else {
        push("--no-playlist");
        push("--playlist-items");
        push("1");
    }

    match options.media {
        MediaKind::Audio { codec, bitrate } => match codec.extract_format() {
            None => {
                push("-f");
                push("bestaudio[ext=m4a]/bestaudio/best");
            }
            Some(format) => {
                push("-f");
                push("bestaudio/best");
                push("-x");
                push("--audio-format");
                push(format);
                push("--audio-quality");
                push(&format!("{}K", bitrate.kbps()));
            }
        },
        MediaKind::Video { quality } => {
            let selector = match quality.max_height() {
                Some(h) => format!("bestvideo[height<={h}]+bestaudio/best[height<={h}]"),
                None => "bestvideo+bestaudio/best".to_string(),
            };
            push("-f");
            push(&selector);
            push("--merge-output-format");
            push("mp4");
        }
    }

    args.push(OsString::from("-o"));
    args.push(options.destination.join("%(title)s.%(ext)s").into_os_string());
    args.push(OsString::from(url));
    args
}

/// The real adapter: one yt-dlp process per URL.
#[derive(Debug, Clone)]
pub struct YtDlp {
    binary: PathBuf,
}

impl YtDlp {
    pub fn new(binary: PathBuf) -> Self {
        Self { binary }
    }
}

impl Downloader for YtDlp {
    fn download_one(
        &self,
        url: &str,
        options: &DownloadOptions,
        token: &CancellationToken,
        emit: &mut dyn FnMut(ItemProgress),
    ) -> Result<(), DownloadError> {
        let mut command = Command::new(&self.binary);
        command
            .args(build_args(url, options))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        log::debug!("Command: {:?}", command);

        let mut child = command
            .spawn()
            .map_err(|e| DownloadError::Item(format!("Failed to start yt-dlp: {}", e)))?;

        // Drained on its own thread so a chatty stderr cannot block stdout.
        let stderr_reader = child.stderr.take().map(|stderr| {
            thread::spawn(move || {
                BufReader::new(stderr)
                    .lines()
                    .map_while(Result::ok)
                    .inspect(|line| log::debug!("yt-dlp stderr: {}", line))
                    .collect::<Vec<String>>()
            })
        });

        let mut hook = ProgressHook::new(token, emit);
        if let Some(stdout) = child.stdout.take() {
            for line in BufReader::new(stdout).lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        log::warn!("Failed to read yt-dlp output: {}", e);
                        break;
                    }
                };

                let outcome = match parse_progress_line(&line) {
                    Some(notice) => hook.on_notice(notice),
                    None => {
                        log::debug!("yt-dlp: {}", line);
                        hook.check_token()
                    }
                };

                if let Err(e) = outcome {
                    stop_child(&mut child);
                    return Err(e);
                }
            }
        }

        // Stop may arrive after yt-dlp printed its last line.
        if let Err(e) = hook.check_token() {
            stop_child(&mut child);
            return Err(e);
        }

        let status = child.wait()?;
        let stderr_lines = stderr_reader
            .map(|handle| handle.join().unwrap_or_default())
            .unwrap_or_default();

        if status.success() {
            return Ok(());
        }

        if options.playlist && hook.finished() > 0 {
            log::warn!(
                "yt-dlp exited with {} after {} file(s); skipped entries ignored",
                status,
                hook.finished()
            );
            return Ok(());
        }

        let message = stderr_lines
            .iter()
            .rev()
            .find_map(|line| line.strip_prefix("ERROR:"))
            .map(|line| line.trim().to_string())
            .unwrap_or_else(|| format!("yt-dlp exited with {}", status));
        Err(DownloadError::Item(message))
    }
}

/// Kills and reaps yt-dlp. Only yt-dlp itself is signalled: an ffmpeg it
/// spawned for merging or extraction keeps running until it finishes.
fn stop_child(child: &mut Child) {
    match child.try_wait() {
        Ok(Some(status)) => {
            log::debug!("yt-dlp already exited with {}", status);
            return;
        }
        Ok(None) => {}
        Err(e) => log::warn!("Failed to poll yt-dlp: {}", e),
    }

    log::info!("Stopping yt-dlp (pid {})", child.id());
    if let Err(e) = child.kill() {
        log::warn!("Failed to kill yt-dlp: {}", e);
    }
    if let Err(e) = child.wait() {
        log::warn!("Failed to reap yt-dlp: {}", e);
    }
}

/// Forwards batch events to the UI thread. If dropped before a terminal event
/// was sent (for example while unwinding a panic), it sends `Failed` so the UI
/// can re-enable its controls.
struct EventForwarder<N: Fn()> {
    tx: Sender<ProgressEvent>,
    notify: N,
    terminal_sent: bool,
}

impl<N: Fn()> EventForwarder<N> {
    fn send(&mut self, event: ProgressEvent) {
        if self.terminal_sent {
            return;
        }
        self.terminal_sent = event.is_terminal();
        if self.tx.send(event).is_err() {
            log::warn!("Progress receiver dropped");
        }
        (self.notify)();
    }
}

impl<N: Fn()> Drop for EventForwarder<N> {
    fn drop(&mut self) {
        if !self.terminal_sent {
            let _ = self.tx.send(ProgressEvent::Failed(
                "Download worker stopped unexpectedly".to_string(),
            ));
            (self.notify)();
        }
    }
}

/// Runs the whole batch on a new worker thread. `notify` is called after each
/// event is queued, typically to request a repaint.
pub fn start_batch<D, N>(
    request: DownloadRequest,
    token: CancellationToken,
    downloader: D,
    tx: Sender<ProgressEvent>,
    notify: N,
) -> thread::JoinHandle<()>
where
    D: Downloader + Send + 'static,
    N: Fn() + Send + 'static,
{
    thread::spawn(move || {
        let mut forwarder = EventForwarder {
            tx,
            notify,
            terminal_sent: false,
        };
        let mut controller = BatchController::new(downloader);
        controller.run(&request, &token, |event| forwarder.send(event));
        log::info!("Batch ended: {:?}", controller.state());
    })
}

/// Runs `yt-dlp -U` on a worker thread.
pub fn update_ytdlp<N>(
    binary: PathBuf,
    tx: Sender<Result<String, String>>,
    notify: N,
) -> thread::JoinHandle<()>
where
    N: Fn() + Send + 'static,
{
    thread::spawn(move || {
        let output = Command::new(&binary)
            .arg("-U")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output();

        let result = match output {
            Ok(output) if output.status.success() => {
                let stdout = String::from_utf8_lossy(&output.stdout);
                Ok(stdout.lines().last().unwrap_or_default().trim().to_string())
            }
            Ok(output) => Err(String::from_utf8_lossy(&output.stderr).trim().to_string()),
            Err(e) => Err(format!("Failed to run yt-dlp: {}", e)),
        };

        match &result {
            Ok(message) => log::info!("yt-dlp update: {}", message),
            Err(message) => log::error!("yt-dlp update failed: {}", message),
        }
        let _ = tx.send(result);
        notify();
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AudioBitrate, AudioCodec, VideoQuality};
    use std::sync::mpsc;

    fn options(playlist: bool, media: MediaKind) -> DownloadOptions {
        DownloadOptions {
            playlist,
            media,
            destination: PathBuf::from("/music"),
        }
    }

    fn args_as_strings(args: Vec<OsString>) -> Vec<String> {
        args.into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    fn has_pair(args: &[String], flag: &str, value: &str) -> bool {
        args.windows(2).any(|w| w[0] == flag && w[1] == value)
    }

    #[test]
    fn test_parse_downloading_line() {
        let notice = parse_progress_line("mc-progress|downloading|  42.7%|NA|NA");
        assert_eq!(
            notice,
            Some(ProgressNotice::Downloading {
                percent: "42.7%".to_string(),
                playlist_position: None,
            })
        );
    }

    #[test]
    fn test_parse_playlist_position() {
        let notice = parse_progress_line("mc-progress|downloading| 5.0%|3|12");
        assert_eq!(
            notice,
            Some(ProgressNotice::Downloading {
                percent: "5.0%".to_string(),
                playlist_position: Some((3, 12)),
            })
        );
        assert_eq!(
            parse_progress_line("mc-progress|finished|100%|12|12"),
            Some(ProgressNotice::Finished {
                playlist_position: Some((12, 12))
            })
        );
    }

    #[test]
    fn test_parse_ignores_other_output() {
        assert_eq!(parse_progress_line("[youtube] abc: Downloading webpage"), None);
        assert_eq!(parse_progress_line("mc-progress|downloading"), None);
        assert_eq!(parse_progress_line("mc-progress|error|1%|NA|NA"), None);
    }

    #[test]
    fn test_parse_percent() {
        assert_eq!(parse_percent(" 42.7%"), Some(42.7));
        assert_eq!(parse_percent("100%"), Some(100.0));
        assert_eq!(parse_percent("N/A"), None);
        assert_eq!(parse_percent("NA"), None);
        assert_eq!(parse_percent("nan%"), None);
        assert_eq!(parse_percent(""), None);
    }

    #[test]
    fn test_hook_drops_malformed_percent() {
        let token = CancellationToken::new();
        let mut ticks = Vec::new();
        let mut emit = |t: ItemProgress| ticks.push(t);
        let mut hook = ProgressHook::new(&token, &mut emit);

        for percent in ["10.0%", "N/A", "20.5%"] {
            hook.on_notice(ProgressNotice::Downloading {
                percent: percent.to_string(),
                playlist_position: None,
            })
            .unwrap();
        }
        hook.on_notice(ProgressNotice::Finished {
            playlist_position: None,
        })
        .unwrap();
        assert_eq!(hook.finished(), 1);
        drop(hook);

        let percents: Vec<f32> = ticks.iter().map(|t| t.percent).collect();
        assert_eq!(percents, vec![10.0, 20.5, 100.0]);
    }

    #[test]
    fn test_hook_aborts_after_stop() {
        let token = CancellationToken::new();
        let mut count = 0;
        let mut emit = |_: ItemProgress| count += 1;
        let mut hook = ProgressHook::new(&token, &mut emit);

        let notice = ProgressNotice::Downloading {
            percent: "1%".to_string(),
            playlist_position: None,
        };
        assert!(hook.on_notice(notice.clone()).is_ok());
        token.cancel();
        assert_eq!(hook.on_notice(notice), Err(DownloadError::Cancelled));
        assert_eq!(hook.check_token(), Err(DownloadError::Cancelled));
        drop(hook);
        assert_eq!(count, 1);
    }

    #[test]
    fn test_args_single_item_original_audio() {
        let args = args_as_strings(build_args(
            "https://example.com/watch?v=1",
            &options(false, MediaKind::default()),
        ));

        assert!(args.contains(&"--no-playlist".to_string()));
        assert!(has_pair(&args, "--playlist-items", "1"));
        assert!(has_pair(&args, "-f", "bestaudio[ext=m4a]/bestaudio/best"));
        assert!(!args.contains(&"-x".to_string()));
        assert!(args.contains(&"--ignore-errors".to_string()));
        assert!(has_pair(
            &args,
            "-o",
            &PathBuf::from("/music")
                .join("%(title)s.%(ext)s")
                .to_string_lossy()
        ));
        assert_eq!(args.last().map(String::as_str), Some("https://example.com/watch?v=1"));
    }

    #[test]
    fn test_args_playlist_mp3() {
        let media = MediaKind::Audio {
            codec: AudioCodec::Mp3,
            bitrate: AudioBitrate::Kbps320,
        };
        let args = args_as_strings(build_args("u", &options(true, media)));

        assert!(args.contains(&"--yes-playlist".to_string()));
        assert!(!args.contains(&"--no-playlist".to_string()));
        assert!(args.contains(&"-x".to_string()));
        assert!(has_pair(&args, "--audio-format", "mp3"));
        assert!(has_pair(&args, "--audio-quality", "320K"));
    }

    #[test]
    fn test_args_video_height() {
        let media = MediaKind::Video {
            quality: VideoQuality::P720,
        };
        let args = args_as_strings(build_args("u", &options(false, media)));
        assert!(has_pair(
            &args,
            "-f",
            "bestvideo[height<=720]+bestaudio/best[height<=720]"
        ));
        assert!(has_pair(&args, "--merge-output-format", "mp4"));

        let best = args_as_strings(build_args(
            "u",
            &options(
                false,
                MediaKind::Video {
                    quality: VideoQuality::Best,
                },
            ),
        ));
        assert!(has_pair(&best, "-f", "bestvideo+bestaudio/best"));
    }

    fn fetch(
        ytdlp: &YtDlp,
        playlist: bool,
        token: &CancellationToken,
        stop_on_first_tick: bool,
    ) -> (Result<(), DownloadError>, Vec<f32>) {
        let mut percents = Vec::new();
        let result = ytdlp.download_one(
            "https://example.com/watch?v=1",
            &options(playlist, MediaKind::default()),
            token,
            &mut |tick: ItemProgress| {
                percents.push(tick.percent);
                if stop_on_first_tick {
                    token.cancel();
                }
            },
        );
        (result, percents)
    }

    #[test]
    fn test_missing_binary_is_an_item_error() {
        let dir = tempfile::tempdir().unwrap();
        let ytdlp = YtDlp::new(dir.path().join("no-such-yt-dlp"));

        let (result, percents) = fetch(&ytdlp, false, &CancellationToken::new(), false);

        match result {
            Err(DownloadError::Item(message)) => {
                assert!(message.starts_with("Failed to start yt-dlp"), "{}", message)
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(percents.is_empty());
    }

    #[cfg(unix)]
    mod fake_ytdlp {
        use super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use std::time::{Duration, Instant};

        /// A shell script standing in for yt-dlp. It ignores its arguments.
        fn fake(dir: &tempfile::TempDir, body: &str) -> YtDlp {
            let path = dir.path().join("yt-dlp");
            fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            YtDlp::new(path)
        }

        #[test]
        fn test_progress_lines_become_ticks() {
            let dir = tempfile::tempdir().unwrap();
            let ytdlp = fake(
                &dir,
                "echo '[youtube] abc: Downloading webpage'\n\
                 echo 'mc-progress|downloading|  40.0%|NA|NA'\n\
                 echo 'mc-progress|downloading|N/A|NA|NA'\n\
                 echo 'mc-progress|finished|100%|NA|NA'",
            );

            let (result, percents) = fetch(&ytdlp, false, &CancellationToken::new(), false);

            assert_eq!(result, Ok(()));
            assert_eq!(percents, vec![40.0, 100.0]);
        }

        #[test]
        fn test_stop_kills_running_download() {
            let dir = tempfile::tempdir().unwrap();
            let ytdlp = fake(
                &dir,
                "while true; do\n\
                 echo 'mc-progress|downloading| 10.0%|NA|NA'\n\
                 sleep 0.1\n\
                 done",
            );
            let token = CancellationToken::new();

            let started = Instant::now();
            let (result, percents) = fetch(&ytdlp, false, &token, true);

            assert_eq!(result, Err(DownloadError::Cancelled));
            assert_eq!(percents, vec![10.0]);
            assert!(started.elapsed() < Duration::from_secs(10));
        }

        #[test]
        fn test_stop_after_last_line_is_still_cancelled() {
            let dir = tempfile::tempdir().unwrap();
            let ytdlp = fake(
                &dir,
                "echo 'mc-progress|downloading| 40.0%|NA|NA'\n\
                 sleep 1\n\
                 exit 0",
            );
            let token = CancellationToken::new();

            let (result, percents) = fetch(&ytdlp, false, &token, true);

            assert_eq!(result, Err(DownloadError::Cancelled));
            assert_eq!(percents, vec![40.0]);
        }

        #[test]
        fn test_last_error_line_becomes_message() {
            let dir = tempfile::tempdir().unwrap();
            let ytdlp = fake(
                &dir,
                "echo 'WARNING: falling back to generic extractor' >&2\n\
                 echo 'ERROR: first problem' >&2\n\
                 echo 'ERROR: [generic] bad: Unsupported URL' >&2\n\
                 exit 1",
            );

            let (result, _) = fetch(&ytdlp, false, &CancellationToken::new(), false);

            assert_eq!(
                result,
                Err(DownloadError::Item(
                    "[generic] bad: Unsupported URL".to_string()
                ))
            );
        }

        #[test]
        fn test_exit_status_used_without_error_line() {
            let dir = tempfile::tempdir().unwrap();
            let ytdlp = fake(&dir, "exit 3");

            let (result, _) = fetch(&ytdlp, false, &CancellationToken::new(), false);

            match result {
                Err(DownloadError::Item(message)) => {
                    assert!(message.starts_with("yt-dlp exited with"), "{}", message)
                }
                other => panic!("unexpected result: {:?}", other),
            }
        }

        #[test]
        fn test_skipped_playlist_entries_are_tolerated() {
            let dir = tempfile::tempdir().unwrap();
            let body = "echo 'mc-progress|finished|100%|1|2'\n\
                        echo 'ERROR: [youtube] xyz: Video unavailable' >&2\n\
                        exit 1";
            let ytdlp = fake(&dir, body);

            let (playlist, _) = fetch(&ytdlp, true, &CancellationToken::new(), false);
            assert_eq!(playlist, Ok(()));

            let (single, _) = fetch(&ytdlp, false, &CancellationToken::new(), false);
            assert_eq!(
                single,
                Err(DownloadError::Item(
                    "[youtube] xyz: Video unavailable".to_string()
                ))
            );
        }

        #[test]
        fn test_playlist_with_nothing_finished_fails() {
            let dir = tempfile::tempdir().unwrap();
            let ytdlp = fake(
                &dir,
                "echo 'ERROR: [youtube] list: Playlist does not exist' >&2\n\
                 exit 1",
            );

            let (result, _) = fetch(&ytdlp, true, &CancellationToken::new(), false);

            assert_eq!(
                result,
                Err(DownloadError::Item(
                    "[youtube] list: Playlist does not exist".to_string()
                ))
            );
        }
    }

    struct PanickingDownloader;

    impl Downloader for PanickingDownloader {
        fn download_one(
            &self,
            _url: &str,
            _options: &DownloadOptions,
            _token: &CancellationToken,
            _emit: &mut dyn FnMut(ItemProgress),
        ) -> Result<(), DownloadError> {
            panic!("simulated crash");
        }
    }

    struct InstantDownloader;

    impl Downloader for InstantDownloader {
        fn download_one(
            &self,
            _url: &str,
            _options: &DownloadOptions,
            _token: &CancellationToken,
            emit: &mut dyn FnMut(ItemProgress),
        ) -> Result<(), DownloadError> {
            emit(ItemProgress {
                percent: 100.0,
                playlist_position: None,
            });
            Ok(())
        }
    }

    fn request(raw: &str) -> (DownloadRequest, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let request =
            DownloadRequest::new(raw, false, MediaKind::default(), dir.path().to_path_buf())
                .unwrap();
        (request, dir)
    }

    #[test]
    fn test_worker_delivers_events_in_order() {
        let (request, _dir) = request("a\nb");
        let (tx, rx) = mpsc::channel();

        start_batch(request, CancellationToken::new(), InstantDownloader, tx, || {})
            .join()
            .unwrap();

        let events: Vec<ProgressEvent> = rx.try_iter().collect();
        assert_eq!(events.len(), 5);
        assert_eq!(events[1], ProgressEvent::ItemFinished);
        assert_eq!(events[4], ProgressEvent::BatchFinished);
    }

    #[test]
    fn test_worker_reports_failure_after_panic() {
        let (request, _dir) = request("a");
        let (tx, rx) = mpsc::channel();

        let handle = start_batch(request, CancellationToken::new(), PanickingDownloader, tx, || {});
        assert!(handle.join().is_err());

        let events: Vec<ProgressEvent> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![ProgressEvent::Failed(
                "Download worker stopped unexpectedly".to_string()
            )]
        );
    }
}
