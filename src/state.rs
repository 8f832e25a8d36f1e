use anyhow::Result;
use chrono::NaiveDate;

use crate::data::classify::{annotate, Thresholds, THRESHOLDS};
use crate::data::lookup::{self, LookupError};
use crate::data::model::{AnnotatedDataset, AnnotatedReading};
use crate::data::sample::sample_readings;
use crate::nav::{Action, Navigator, Screen, Transition};

// ---------------------------------------------------------------------------
// Notices (modal messages)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A modal message box.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn info(title: &str, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.to_string(),
            body: body.into(),
        }
    }

    pub fn error(title: &str, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.to_string(),
            body: body.into(),
        }
    }
}

impl From<&LookupError> for Notice {
    fn from(err: &LookupError) -> Self {
        match err {
            LookupError::Parse { .. } => Notice::error(
                "Invalid Date",
                "Please enter a valid date in YYYY-MM-DD format.",
            ),
            LookupError::NotFound(_) => Notice::info("No Data", err.to_string()),
            LookupError::Inconsistent(_) => Notice::error("Error", err.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Screen-local form state
// ---------------------------------------------------------------------------

/// Health-tip screen: dropdown selection and the row shown by "Show Tip".
#[derive(Debug, Clone, Default)]
pub struct HealthTipForm {
    pub selected: Option<NaiveDate>,
    pub shown: Option<AnnotatedReading>,
}

/// Search screen: the free-text date entry.
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    pub input: String,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Annotated sample table, read-only after construction.
    pub dataset: AnnotatedDataset,

    /// Alert limits the dataset was annotated with.
    pub thresholds: Thresholds,

    /// Active screen.
    pub nav: Navigator,

    /// Name typed on the home screen, kept for the session.
    pub user_name: String,

    pub health: HealthTipForm,

    pub search: SearchForm,

    /// Open modal notice, if any.
    pub notice: Option<Notice>,
}

impl AppState {
    /// Build state around the compiled-in sample dataset.
    pub fn with_sample() -> Result<Self> {
        let readings = sample_readings()?;
        Ok(Self::new(annotate(&readings, &THRESHOLDS), THRESHOLDS))
    }

    pub fn new(dataset: AnnotatedDataset, thresholds: Thresholds) -> Self {
        Self {
            dataset,
            thresholds,
            nav: Navigator::default(),
            user_name: String::new(),
            health: HealthTipForm::default(),
            search: SearchForm::default(),
            notice: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.nav.screen()
    }

    /// Route a button press through the navigator and reset the entered screen.
    pub fn dispatch(&mut self, action: Action) -> Transition {
        let t = self.nav.dispatch(action);
        if let Transition::Goto(to) = t {
            self.enter(to);
        }
        t
    }

    fn enter(&mut self, screen: Screen) {
        self.notice = None;
        match screen {
            Screen::HealthTip => {
                self.health = HealthTipForm {
                    selected: self.dataset.rows.last().map(|r| r.reading.date),
                    shown: None,
                };
            }
            Screen::Search => self.search = SearchForm::default(),
            Screen::Home | Screen::Table | Screen::Summary | Screen::Trends => {}
        }
    }

    /// "Show Tip" on the health-tip screen.
    pub fn show_tip(&mut self) {
        let Some(date) = self.health.selected else {
            self.notice = Some(Notice::error("Error", "Select a date first."));
            return;
        };
        match lookup::select(&self.dataset, date) {
            Ok(row) => {
                log::debug!("health tip for {date}: level {}", row.aqi);
                self.health.shown = Some(row.clone());
            }
            Err(e) => {
                log::error!("{e}");
                self.health.shown = None;
                self.notice = Some(Notice::from(&e));
            }
        }
    }

    /// "Search" on the search screen. The outcome is always a notice.
    pub fn submit_search(&mut self) {
        let notice = match lookup::search(&self.dataset, &self.search.input) {
            Ok(row) => Notice::info("Air Quality", search_summary(&row)),
            Err(e) => {
                if matches!(e, LookupError::Parse { .. }) {
                    log::warn!("{e}");
                } else {
                    log::info!("{e}");
                }
                Notice::from(&e)
            }
        };
        self.notice = Some(notice);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

/// Multi-line summary shown for a search hit.
pub fn search_summary(row: &AnnotatedReading) -> String {
    let r = &row.reading;
    format!(
        "📅 {}\nAQI: {}\nPM2.5: {}\nPM10: {}\nNO2: {}\nAlert: {}",
        r.date, row.category, r.pm25, r.pm10, r.no2, row.alert
    )
}
