//! Screens of the calculator and the transitions between them.

/// The screen currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    MainMenu,
    CalculatorForm,
}

/// A user action that may change the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    ComputeNewWarrant,
    Calculate,
    MainMenu,
    Exit,
}

impl ScreenEvent {
    pub fn label(&self) -> &'static str {
        match self {
            ScreenEvent::ComputeNewWarrant => "Compute New Warrant",
            ScreenEvent::Calculate => "Calculate",
            ScreenEvent::MainMenu => "Main Menu",
            ScreenEvent::Exit => "Exit",
        }
    }
}

impl Screen {
    /// Actions offered on this screen, in display order.
    pub fn events(&self) -> &'static [ScreenEvent] {
        match self {
            Screen::MainMenu => &[ScreenEvent::ComputeNewWarrant, ScreenEvent::Exit],
            Screen::CalculatorForm => &[ScreenEvent::Calculate, ScreenEvent::MainMenu],
        }
    }

    /// Returns the screen after `event`, or `None` when the application exits.
    ///
    /// Events not offered on the current screen leave it unchanged.
    pub fn next(self, event: ScreenEvent) -> Option<Screen> {
        match (self, event) {
            (_, ScreenEvent::Exit) => None,
            (Screen::MainMenu, ScreenEvent::ComputeNewWarrant) => Some(Screen::CalculatorForm),
            (Screen::CalculatorForm, ScreenEvent::MainMenu) => Some(Screen::MainMenu),
            (screen, _) => Some(screen),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_main_menu() {
        assert_eq!(Screen::default(), Screen::MainMenu);
    }

    #[test]
    fn test_main_menu_opens_form() {
        assert_eq!(
            Screen::MainMenu.next(ScreenEvent::ComputeNewWarrant),
            Some(Screen::CalculatorForm)
        );
    }

    #[test]
    fn test_calculate_stays_on_form() {
        assert_eq!(
            Screen::CalculatorForm.next(ScreenEvent::Calculate),
            Some(Screen::CalculatorForm)
        );
    }

    #[test]
    fn test_form_returns_to_menu() {
        assert_eq!(
            Screen::CalculatorForm.next(ScreenEvent::MainMenu),
            Some(Screen::MainMenu)
        );
    }

    #[test]
    fn test_exit_from_any_screen() {
        assert_eq!(Screen::MainMenu.next(ScreenEvent::Exit), None);
        assert_eq!(Screen::CalculatorForm.next(ScreenEvent::Exit), None);
    }

    #[test]
    fn test_unoffered_event_is_ignored() {
        assert_eq!(
            Screen::MainMenu.next(ScreenEvent::Calculate),
            Some(Screen::MainMenu)
        );
    }

    #[test]
    fn test_events_have_labels() {
        let labels: Vec<_> = Screen::MainMenu.events().iter().map(|e| e.label()).collect();
        assert_eq!(labels, vec!["Compute New Warrant", "Exit"]);

        let labels: Vec<_> = Screen::CalculatorForm
            .events()
            .iter()
            .map(|e| e.label())
            .collect();
        assert_eq!(labels, vec!["Calculate", "Main Menu"]);
    }
}
