// src/recording.rs

use crate::config::MIN_NAME_LEN;
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Timestamp layout used in recording file names, e.g. `01022024-153045`.
pub const TOKEN_FORMAT: &str = "%d%m%Y-%H%M%S";
/// Layout of the labels shown in the menu, e.g. `01/02/2024 15:30:45`.
pub const LABEL_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

const TOKEN_LEN: usize = 15;
const TOKEN_SEPARATOR_POS: usize = 8;

/// Which camera produced a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewTag {
    Top,
    Bottom,
}

impl ViewTag {
    const ALL: [ViewTag; 2] = [ViewTag::Top, ViewTag::Bottom];

    /// The literal marker written into file names.
    pub fn marker(self) -> &'static str {
        match self {
            ViewTag::Top => "TOP_VIEW",
            ViewTag::Bottom => "BOTTOM_VIEW",
        }
    }

    /// Finds a view marker anywhere in `name`.
    pub fn detect(name: &str) -> Option<ViewTag> {
        Self::ALL.into_iter().find(|tag| name.contains(tag.marker()))
    }
}

/// The capture-event key shared by every camera view of one recording.
/// Always holds a string that parsed under [`TOKEN_FORMAT`].
///
/// Ordering is chronological, with the raw text as tiebreaker.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimestampToken {
    recorded_at: NaiveDateTime,
    raw: String,
}

impl TimestampToken {
    /// Parses a `ddMMyyyy-HHmmss` token. Returns `None` for anything else,
    /// including correctly shaped strings naming an impossible date.
    pub fn parse(raw: &str) -> Option<Self> {
        let bytes = raw.as_bytes();
        let well_formed = bytes.len() == TOKEN_LEN
            && bytes.iter().enumerate().all(|(i, b)| {
                if i == TOKEN_SEPARATOR_POS {
                    *b == b'-'
                } else {
                    b.is_ascii_digit()
                }
            });
        if !well_formed {
            return None;
        }
        NaiveDateTime::parse_from_str(raw, TOKEN_FORMAT)
            .ok()
            .map(|recorded_at| TimestampToken {
                recorded_at,
                raw: raw.to_string(),
            })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn recorded_at(&self) -> NaiveDateTime {
        self.recorded_at
    }

    /// Calendar day of the recording.
    pub fn date(&self) -> NaiveDate {
        self.recorded_at.date()
    }

    /// Human-readable form shown in the menu.
    pub fn label(&self) -> String {
        self.recorded_at.format(LABEL_FORMAT).to_string()
    }
}

impl fmt::Display for TimestampToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Why a file name could not be turned into a token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("file name is too short to be a recording")]
    TooShort,
    #[error("'{token}' is not a ddMMyyyy-HHmmss timestamp")]
    Malformed { token: String },
}

/// A file name split into its timestamp and optional camera view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub token: TimestampToken,
    pub view: Option<ViewTag>,
}

/// Parses a base name of the form `[-]VIEW[-]TOKEN.ext` or `TOKEN[-]VIEW[-].ext`,
/// the view part being optional.
///
/// ```text
/// 01022024-153045.mp4           -> 01022024-153045, no view
/// 01022024-153045-TOP_VIEW.mp4  -> 01022024-153045, Top
/// BOTTOM_VIEW-01022024-153045.mp4 -> 01022024-153045, Bottom
/// 01022024-153045-TOP_VIEW-.mp4 -> 01022024-153045, Top
/// ```
pub fn parse_file_name(name: &str) -> Result<ParsedName, NameError> {
    if name.chars().count() <= MIN_NAME_LEN {
        return Err(NameError::TooShort);
    }

    let stem = match name.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() => stem,
        _ => name,
    };

    let (token_str, view) = strip_view_tag(stem);
    match TimestampToken::parse(token_str) {
        Some(token) => Ok(ParsedName { token, view }),
        None => Err(NameError::Malformed {
            token: token_str.to_string(),
        }),
    }
}

fn strip_view_tag(stem: &str) -> (&str, Option<ViewTag>) {
    // The marker may carry one dash on either side.
    let leading = stem.strip_prefix('-').unwrap_or(stem);
    let trailing = stem.strip_suffix('-').unwrap_or(stem);
    for tag in ViewTag::ALL {
        let marker = tag.marker();
        if let Some(rest) = leading.strip_prefix(marker) {
            return (rest.strip_prefix('-').unwrap_or(rest), Some(tag));
        }
        if let Some(rest) = trailing.strip_suffix(marker) {
            return (rest.strip_suffix('-').unwrap_or(rest), Some(tag));
        }
    }
    (stem, None)
}

/// A recording file found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingFile {
    /// The full path to the file.
    pub path: PathBuf,
    /// The file name including extension.
    pub name: String,
    pub view: Option<ViewTag>,
    pub token: TimestampToken,
}

impl RecordingFile {
    pub fn from_path(path: &Path) -> Result<Self, NameError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let parsed = parse_file_name(&name)?;
        Ok(RecordingFile {
            path: path.to_path_buf(),
            name,
            view: parsed.view,
            token: parsed.token,
        })
    }
}
