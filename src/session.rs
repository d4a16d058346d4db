//! One interactive calculation session.
//!
//! Holds the two mutable cells (total duration and playback speed) and
//! derives the rendered [`View`] from them on demand.

use crate::duration::{Speed, format_at_speed, format_clock};
use crate::error::CalcError;
use crate::lookup::client::DurationLookup;
use crate::validate::validate_playlist_url;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Default)]
pub struct Session {
    playlist_url: String,
    total_seconds: Option<u64>,
    error: Option<CalcError>,
    speed: Speed,
}

/// Snapshot of everything the user currently sees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub error: Option<String>,
    pub error_kind: Option<&'static str>,
    pub total: Option<String>,
    pub total_seconds: Option<u64>,
    pub speed: String,
    pub adjusted: Option<String>,
}

impl Session {
    pub fn new(speed: Speed) -> Self {
        Self {
            speed,
            ..Self::default()
        }
    }

    pub fn set_playlist_url(&mut self, url: impl Into<String>) {
        self.playlist_url = url.into();
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn total_seconds(&self) -> Option<u64> {
        self.total_seconds
    }

    pub fn error(&self) -> Option<&CalcError> {
        self.error.as_ref()
    }

    /// Run a fresh calculation for the current playlist URL.
    ///
    /// Any previous result or error is cleared first. Speed is left alone.
    pub fn calculate<L: DurationLookup + ?Sized>(&mut self, lookup: &L) {
        self.error = None;
        self.total_seconds = None;

        let outcome = validate_playlist_url(&self.playlist_url)
            .and_then(|()| lookup.total_seconds(&self.playlist_url));

        match outcome {
            Ok(total) => self.total_seconds = Some(total),
            Err(err) => {
                debug!(kind = err.kind(), "calculation failed");
                self.error = Some(err);
            }
        }
    }

    pub fn view(&self) -> View {
        let speed = self.speed.to_string();
        match (&self.error, self.total_seconds) {
            (Some(err), _) => View {
                error: Some(err.to_string()),
                error_kind: Some(err.kind()),
                total: None,
                total_seconds: None,
                speed,
                adjusted: None,
            },
            (None, total) => View {
                error: None,
                error_kind: None,
                total: total.map(format_clock),
                total_seconds: total,
                speed,
                adjusted: total.map(|t| format_at_speed(t, self.speed)),
            },
        }
    }
}
