// src/picker.rs

use crate::config::AppConfig;
use crate::day_filter::DayFilter;
use crate::error::PickerError;
use crate::file_utils::find_recordings;
use crate::menu::RecordingMenu;
use crate::player::{dispatch, LaunchHandle, Launcher};
use crate::recording::{NameError, RecordingFile, TimestampToken};
use crate::ui::Selector;
use chrono::NaiveDate;
use std::path::PathBuf;

/// How a run ended when nothing went wrong.
#[derive(Debug)]
pub enum Outcome {
    /// The user picked a recording; one handle per started player.
    Played {
        label: String,
        handles: Vec<LaunchHandle>,
    },
    /// The user dismissed the menu.
    Cancelled,
}

/// Extracts the timestamp token of every scanned file.
/// Names too short to be recordings are skipped.
///
/// # Errors
///
/// Returns `MalformedTimestamp` for the first name that does not carry a
/// valid timestamp.
pub fn collect_tokens(files: &[PathBuf]) -> Result<Vec<TimestampToken>, PickerError> {
    let mut tokens = Vec::with_capacity(files.len());
    for path in files {
        match RecordingFile::from_path(path) {
            Ok(file) => {
                log::debug!(
                    "{} -> {} ({:?}) at '{}'",
                    file.name,
                    file.token,
                    file.view,
                    file.path.display()
                );
                tokens.push(file.token);
            }
            Err(NameError::TooShort) => {
                log::debug!("Skipping '{}': name too short", path.display());
            }
            Err(NameError::Malformed { token }) => {
                return Err(PickerError::MalformedTimestamp {
                    name: path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                    token,
                });
            }
        }
    }
    Ok(tokens)
}

/// Turns the scanned files into the menu for `filter`, relative to `today`.
pub fn build_menu(
    files: &[PathBuf],
    filter: DayFilter,
    today: NaiveDate,
) -> Result<RecordingMenu, PickerError> {
    let tokens = collect_tokens(files)?;
    let total = tokens.len();
    let kept = filter.apply(tokens, today);
    log::debug!("{:?} kept {} of {} recording(s)", filter, kept.len(), total);
    Ok(RecordingMenu::build(kept))
}

/// Runs one pick: scan, filter, ask, play.
///
/// # Errors
///
/// Returns `NoRecordings` without showing the menu when nothing survives the
/// filter, and propagates scan, parse and terminal errors.
pub fn run(
    config: &AppConfig,
    filter: DayFilter,
    today: NaiveDate,
    selector: &mut dyn Selector,
    launcher: &mut dyn Launcher,
) -> Result<Outcome, PickerError> {
    let files = find_recordings(&config.recordings_dir, &config.extensions)?;
    let menu = build_menu(&files, filter, today)?;
    if menu.is_empty() {
        return Err(PickerError::NoRecordings { filter });
    }
    log::info!("{} recording(s) to choose from", menu.len());

    let labels = menu.labels();
    let index = match selector.select(&config.menu_title, &labels)? {
        Some(index) => index,
        None => return Ok(Outcome::Cancelled),
    };
    let entry = menu
        .get(index)
        .ok_or_else(|| PickerError::UnknownSelection(format!("#{}", index)))?;

    let handles = dispatch(config, &files, &entry.token, launcher);
    Ok(Outcome::Played {
        label: entry.label.clone(),
        handles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::tests::FakeLauncher;
    use chrono::Days;
    use std::fs::File;
    use std::path::Path;

    /// Picks a fixed label, or cancels, and counts how often it was asked.
    struct FakeSelector {
        choose: Option<String>,
        calls: usize,
    }

    impl FakeSelector {
        fn choosing(label: &str) -> Self {
            FakeSelector {
                choose: Some(label.to_string()),
                calls: 0,
            }
        }

        fn cancelling() -> Self {
            FakeSelector {
                choose: None,
                calls: 0,
            }
        }
    }

    impl Selector for FakeSelector {
        fn select(
            &mut self,
            _title: &str,
            labels: &[String],
        ) -> Result<Option<usize>, dialoguer::Error> {
            self.calls += 1;
            Ok(self
                .choose
                .as_ref()
                .and_then(|c| labels.iter().position(|l| l == c)))
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 3).unwrap()
    }

    fn config_for(dir: &Path) -> AppConfig {
        AppConfig::default().with_recordings_dir(&dir.to_string_lossy())
    }

    fn touch(dir: &Path, names: &[&str]) {
        for name in names {
            File::create(dir.join(name)).unwrap();
        }
    }

    #[test]
    fn test_collect_tokens_skips_short_names() {
        let files = vec![
            PathBuf::from("/rec/.mp4"),
            PathBuf::from("/rec/01022024-153045.mp4"),
        ];
        let tokens = collect_tokens(&files).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].as_str(), "01022024-153045");
    }

    #[test]
    fn test_collect_tokens_fails_on_malformed_name() {
        let files = vec![
            PathBuf::from("/rec/01022024-153045.mp4"),
            PathBuf::from("/rec/holiday.mp4"),
        ];
        let err = collect_tokens(&files).unwrap_err();
        assert!(matches!(
            err,
            PickerError::MalformedTimestamp { ref name, ref token }
                if name == "holiday.mp4" && token == "holiday"
        ));
    }

    #[test]
    fn test_build_menu_filters_sorts_and_dedups() {
        let files: Vec<PathBuf> = [
            "02022024-101010-TOP_VIEW.mp4",
            "01022024-153045.mp4",
            "02022024-101010.mp4",
            "20012024-090000.mp4",
        ]
        .iter()
        .map(|n| PathBuf::from("/rec").join(n))
        .collect();

        let menu = build_menu(&files, DayFilter::SinceDay(2), today()).unwrap();
        assert_eq!(
            menu.labels(),
            vec!["01/02/2024 15:30:45", "02/02/2024 10:10:10"]
        );
    }

    #[test]
    fn test_run_plays_every_view_of_selection() {
        let temp_dir = tempfile::tempdir().unwrap();
        touch(
            temp_dir.path(),
            &[
                "01022024-153045-TOP_VIEW.mp4",
                "01022024-153045.mp4",
                "02022024-101010.mp4",
            ],
        );
        let config = config_for(temp_dir.path());
        let mut selector = FakeSelector::choosing("01/02/2024 15:30:45");
        let mut launcher = FakeLauncher::default();

        let outcome = run(
            &config,
            DayFilter::SinceDay(2),
            today(),
            &mut selector,
            &mut launcher,
        )
        .unwrap();

        match outcome {
            Outcome::Played { label, handles } => {
                assert_eq!(label, "01/02/2024 15:30:45");
                assert_eq!(handles.len(), 2);
            }
            Outcome::Cancelled => panic!("expected a selection"),
        }
        assert_eq!(launcher.requests.len(), 2);
        let rotated = launcher
            .requests
            .iter()
            .filter(|r| !r.extra_args.is_empty())
            .count();
        assert_eq!(rotated, 1);
    }

    #[test]
    fn test_run_dispatches_token_of_chosen_entry() {
        let temp_dir = tempfile::tempdir().unwrap();
        touch(
            temp_dir.path(),
            &[
                "01022024-153045.mp4",
                "02022024-101010-BOTTOM_VIEW.mp4",
                "03022024-070000.mp4",
            ],
        );
        let config = config_for(temp_dir.path());
        let mut selector = FakeSelector::choosing("02/02/2024 10:10:10");
        let mut launcher = FakeLauncher::default();

        run(
            &config,
            DayFilter::SinceDay(2),
            today(),
            &mut selector,
            &mut launcher,
        )
        .unwrap();

        assert_eq!(launcher.requests.len(), 1);
        assert_eq!(
            launcher.requests[0].file,
            temp_dir.path().join("02022024-101010-BOTTOM_VIEW.mp4")
        );
        assert!(launcher.requests[0].extra_args.is_empty());
    }

    #[test]
    fn test_run_without_matches_skips_selector() {
        let temp_dir = tempfile::tempdir().unwrap();
        let old = today().checked_sub_days(Days::new(30)).unwrap();
        touch(
            temp_dir.path(),
            &[format!("{}-120000.mp4", old.format("%d%m%Y")).as_str()],
        );
        let config = config_for(temp_dir.path());
        let mut selector = FakeSelector::choosing("anything");
        let mut launcher = FakeLauncher::default();

        let err = run(
            &config,
            DayFilter::SinceDay(2),
            today(),
            &mut selector,
            &mut launcher,
        )
        .unwrap_err();

        assert!(err.is_empty_result());
        assert!(matches!(err, PickerError::NoRecordings {
                filter: DayFilter::SinceDay(2)
            }));
        assert_eq!(selector.calls, 0);
        assert!(launcher.requests.is_empty());
    }

    #[test]
    fn test_run_on_empty_directory_is_no_recordings() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = config_for(temp_dir.path());
        let mut selector = FakeSelector::cancelling();
        let mut launcher = FakeLauncher::default();

        let err = run(
            &config,
            DayFilter::ExactDay(1),
            today(),
            &mut selector,
            &mut launcher,
        )
        .unwrap_err();
        assert!(matches!(err, PickerError::NoRecordings {
                filter: DayFilter::ExactDay(1)
            }));
    }

    #[test]
    fn test_run_cancelled() {
        let temp_dir = tempfile::tempdir().unwrap();
        touch(temp_dir.path(), &["03022024-000001.mp4"]);
        let config = config_for(temp_dir.path());
        let mut selector = FakeSelector::cancelling();
        let mut launcher = FakeLauncher::default();

        let outcome = run(
            &config,
            DayFilter::SinceDay(2),
            today(),
            &mut selector,
            &mut launcher,
        )
        .unwrap();
        assert!(matches!(outcome, Outcome::Cancelled));
        assert_eq!(selector.calls, 1);
        assert!(launcher.requests.is_empty());
    }

    #[test]
    fn test_run_missing_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = config_for(&temp_dir.path().join("gone"));
        let mut selector = FakeSelector::cancelling();
        let mut launcher = FakeLauncher::default();

        let err = run(
            &config,
            DayFilter::SinceDay(2),
            today(),
            &mut selector,
            &mut launcher,
        )
        .unwrap_err();
        assert!(matches!(err, PickerError::DirectoryNotFound(_)));
        assert_eq!(selector.calls, 0);
    }
}
