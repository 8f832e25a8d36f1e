use std::fmt;

// ---------------------------------------------------------------------------
// Screens and actions
// ---------------------------------------------------------------------------

/// The six mutually exclusive screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Table,
    Summary,
    HealthTip,
    Trends,
    Search,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "🌤 AirAware Alert",
            Screen::Table => "📋 Air Quality Data",
            Screen::Summary => "📊 AQI Category Summary",
            Screen::HealthTip => "💡 Health Tip by Date",
            Screen::Trends => "📈 Air Quality Trends",
            Screen::Search => "🔎 Search by Date",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A button press that may change the active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Open(Screen),
    Back,
    Exit,
}

/// Home menu entries, top to bottom.
pub const HOME_MENU: [(&str, Action); 6] = [
    ("View Air Quality Table", Action::Open(Screen::Table)),
    ("AQI Summary", Action::Open(Screen::Summary)),
    ("Health Tip", Action::Open(Screen::HealthTip)),
    ("Plot Trends", Action::Open(Screen::Trends)),
    ("Search by Date", Action::Open(Screen::Search)),
    ("Exit", Action::Exit),
];

/// Outcome of applying an action to the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Goto(Screen),
    Exit,
    /// Action has no edge from the current screen.
    Ignored,
}

/// Transition table.
pub fn transition(from: Screen, action: Action) -> Transition {
    match (from, action) {
        (Screen::Home, Action::Open(Screen::Home)) => Transition::Ignored,
        (Screen::Home, Action::Open(to)) => Transition::Goto(to),
        (Screen::Home, Action::Exit) => Transition::Exit,
        (Screen::Home, Action::Back) => Transition::Ignored,
        (_, Action::Back) => Transition::Goto(Screen::Home),
        (_, _) => Transition::Ignored,
    }
}

// ---------------------------------------------------------------------------
// Navigator
// ---------------------------------------------------------------------------

/// Single-active-screen state machine.
#[derive(Debug, Default)]
pub struct Navigator {
    screen: Screen,
    exited: bool,
}

impl Navigator {
    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn has_exited(&self) -> bool {
        self.exited
    }

    /// Apply `action`; the screen only changes on a `Goto`.
    pub fn dispatch(&mut self, action: Action) -> Transition {
        if self.exited {
            return Transition::Ignored;
        }
        let t = transition(self.screen, action);
        match t {
            Transition::Goto(to) => {
                log::info!("screen {} -> {}", self.screen, to);
                self.screen = to;
            }
            Transition::Exit => {
                log::info!("exit requested from {}", self.screen);
                self.exited = true;
            }
            Transition::Ignored => {
                log::warn!("ignoring {action:?} on {}", self.screen);
            }
        }
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_home() {
        let nav = Navigator::default();
        assert_eq!(nav.screen(), Screen::Home);
        assert!(!nav.has_exited());
    }

    #[test]
    fn every_menu_entry_returns_home_via_back() {
        for (label, action) in HOME_MENU {
            let mut nav = Navigator::default();
            match action {
                Action::Open(to) => {
                    assert_eq!(nav.dispatch(action), Transition::Goto(to), "{label}");
                    assert_eq!(nav.screen(), to);
                    assert_eq!(nav.dispatch(Action::Back), Transition::Goto(Screen::Home));
                    assert_eq!(nav.screen(), Screen::Home);
                }
                Action::Exit => {
                    assert_eq!(nav.dispatch(action), Transition::Exit);
                    assert_eq!(nav.screen(), Screen::Home);
                    assert!(nav.has_exited());
                }
                Action::Back => unreachable!("Back is not a menu entry"),
            }
        }
    }

    #[test]
    fn exit_and_menu_are_home_only() {
        let mut nav = Navigator::default();
        nav.dispatch(Action::Open(Screen::Trends));
        assert_eq!(nav.dispatch(Action::Exit), Transition::Ignored);
        assert_eq!(nav.dispatch(Action::Open(Screen::Table)), Transition::Ignored);
        assert_eq!(nav.screen(), Screen::Trends);
        assert!(!nav.has_exited());
    }

    #[test]
    fn back_on_home_is_ignored() {
        assert_eq!(transition(Screen::Home, Action::Back), Transition::Ignored);
        assert_eq!(transition(Screen::Home, Action::Open(Screen::Home)), Transition::Ignored);
    }

    #[test]
    fn nothing_happens_after_exit() {
        let mut nav = Navigator::default();
        nav.dispatch(Action::Exit);
        assert_eq!(nav.dispatch(Action::Open(Screen::Table)), Transition::Ignored);
        assert_eq!(nav.screen(), Screen::Home);
    }
}
