//! Navigation progress indicator.
//!
//! Client-side page transitions fire two document events: one when a
//! navigation is about to start and one once the incoming page has rendered.
//! Between the two, a thin bar animates across the top of the viewport.
//!
//! ## State machine
//!
//! ```text
//!            start                    rendered
//!   ┌──────┐ ─────▶ ┌─────────┐ ─────────────────▶ ┌──────┐
//!   │ idle │        │ loading │                    │ idle │
//!   └──────┘        └─────────┘ ◀─┐                └──────┘
//!                        │ start  │ (animation restarts)
//!                        └────────┘
//! ```
//!
//! `rendered` while idle is ignored. The host guarantees `start` precedes
//! `rendered` for a given navigation; nothing here reorders or recovers from
//! out-of-order delivery. A lost `rendered` leaves the bar visible until the
//! next `start` restarts it.
//!
//! ## Seams
//!
//! The event source and the visual side effects are both injected: signals
//! arrive through any iterator (a `Vec` in tests, an `mpsc::Receiver` fed by
//! a host binding), and the bar is driven through [`ProgressIndicator`].
//!
//! ## Browser binding
//!
//! [`render_progress_indicator`] emits the bar element and an embedded script
//! running the same machine against the configured document events.

use crate::config::ProgressConfig;
use maud::{Markup, PreEscaped, html};
use serde::Serialize;

const PROGRESS_JS: &str = include_str!("../static/progress.js");
const PROGRESS_CSS: &str = include_str!("../static/progress.css");

/// Whether a navigation is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressState {
    #[default]
    Idle,
    Loading,
}

/// The two lifecycle signals emitted by the host's page-transition router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationSignal {
    /// Navigation is about to start.
    Start,
    /// The incoming page has been rendered.
    Rendered,
}

impl NavigationSignal {
    /// Map a document event name to a signal using the configured names.
    pub fn from_event(event: &str, config: &ProgressConfig) -> Option<Self> {
        if event == config.start_event {
            Some(NavigationSignal::Start)
        } else if event == config.done_event {
            Some(NavigationSignal::Rendered)
        } else {
            None
        }
    }
}

/// What handling a signal did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// idle → loading
    Started,
    /// loading → loading, animation restarted
    Restarted,
    /// loading → idle
    Finished,
    /// `rendered` while idle
    Ignored,
}

/// Visual side of the indicator.
pub trait ProgressIndicator {
    /// Show the bar and (re)start its animation.
    fn begin(&mut self);
    /// Snap the bar to 100% and hide it.
    fn finish(&mut self);
}

/// Two-state controller driving a [`ProgressIndicator`].
#[derive(Debug)]
pub struct ProgressController<I> {
    state: ProgressState,
    indicator: I,
}

impl<I: ProgressIndicator> ProgressController<I> {
    /// A controller in the `idle` state.
    pub fn new(indicator: I) -> Self {
        Self {
            state: ProgressState::Idle,
            indicator,
        }
    }

    pub fn state(&self) -> ProgressState {
        self.state
    }

    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    pub fn into_indicator(self) -> I {
        self.indicator
    }

    /// Apply one signal.
    pub fn handle(&mut self, signal: NavigationSignal) -> Transition {
        let transition = match (self.state, signal) {
            (ProgressState::Idle, NavigationSignal::Start) => {
                self.state = ProgressState::Loading;
                self.indicator.begin();
                Transition::Started
            }
            (ProgressState::Loading, NavigationSignal::Start) => {
                self.indicator.begin();
                Transition::Restarted
            }
            (ProgressState::Loading, NavigationSignal::Rendered) => {
                self.state = ProgressState::Idle;
                self.indicator.finish();
                Transition::Finished
            }
            (ProgressState::Idle, NavigationSignal::Rendered) => Transition::Ignored,
        };
        tracing::trace!(?signal, ?transition, state = ?self.state, "navigation signal");
        transition
    }

    /// Drain a signal source, returning the final state.
    ///
    /// Blocks for as long as the source does; with a channel receiver that is
    /// until every sender is dropped.
    pub fn run<S>(&mut self, signals: S) -> ProgressState
    where
        S: IntoIterator<Item = NavigationSignal>,
    {
        for signal in signals {
            self.handle(signal);
        }
        self.state
    }
}

/// In-memory model of the bar: what a DOM binding would show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BarIndicator {
    pub visible: bool,
    pub animating: bool,
    /// Width of the bar in percent. Only meaningful while visible or right
    /// after a finish.
    pub percent: u8,
    /// Number of times the animation has been (re)started.
    pub runs: u32,
}

impl ProgressIndicator for BarIndicator {
    fn begin(&mut self) {
        self.visible = true;
        self.animating = true;
        self.percent = 0;
        self.runs += 1;
    }

    fn finish(&mut self) {
        self.animating = false;
        self.percent = 100;
        self.visible = false;
    }
}

/// Bar element plus the embedded script and styles, for the page body.
///
/// Renders nothing when the indicator is disabled.
pub fn render_progress_indicator(config: &ProgressConfig) -> Markup {
    html! {
        @if config.enabled {
            style { (PreEscaped(PROGRESS_CSS)) }
            div.nav-progress id="nav-progress" role="progressbar" aria-hidden="true"
                data-start-event=(config.start_event)
                data-done-event=(config.done_event) {}
            script { (PreEscaped(PROGRESS_JS)) }
        }
    }
}
