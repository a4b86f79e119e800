//! Keyboard mapping from crossterm events to host actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use ps_simulation::{Command, POPULATION_STEP, RATE_STEP, STEP_DELAY_STEP};

/// What a key press asks the host to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Leave the main loop.
    Quit,
    /// Show or hide the key reference.
    ToggleHelp,
    /// Forward a command to the simulation.
    Engine(Command),
}

/// Map a key press to an action. Unbound keys yield `None`.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    let command = match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return Some(Action::Quit),
        KeyCode::Char('?') => return Some(Action::ToggleHelp),
        KeyCode::Char(' ') => Command::TogglePause,
        KeyCode::Char('r') | KeyCode::Char('R') => Command::Reset,
        KeyCode::Tab | KeyCode::Down => Command::SelectNext,
        KeyCode::BackTab | KeyCode::Up => Command::SelectPrevious,
        KeyCode::Enter => Command::AddPopulation(POPULATION_STEP),
        KeyCode::Left => Command::AdjustGrowth(-RATE_STEP),
        KeyCode::Right => Command::AdjustGrowth(RATE_STEP),
        KeyCode::Char('[') => Command::AdjustDeath(-RATE_STEP),
        KeyCode::Char(']') => Command::AdjustDeath(RATE_STEP),
        KeyCode::Char('-') => Command::AdjustStepDelay(STEP_DELAY_STEP),
        KeyCode::Char('+') | KeyCode::Char('=') => Command::AdjustStepDelay(-STEP_DELAY_STEP),
        KeyCode::Char('n') | KeyCode::Char('N') => Command::ToggleNoise,
        KeyCode::Char('c') | KeyCode::Char('C') => Command::ToggleColorPreference,
        _ => return None,
    };
    Some(Action::Engine(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Option<Action> {
        map_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn quit_keys() {
        assert_eq!(press(KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn plain_c_toggles_color() {
        assert_eq!(
            press(KeyCode::Char('c')),
            Some(Action::Engine(Command::ToggleColorPreference))
        );
    }

    #[test]
    fn selection_and_editing_keys() {
        assert_eq!(press(KeyCode::Tab), Some(Action::Engine(Command::SelectNext)));
        assert_eq!(press(KeyCode::Up), Some(Action::Engine(Command::SelectPrevious)));
        assert_eq!(
            press(KeyCode::Enter),
            Some(Action::Engine(Command::AddPopulation(10.0)))
        );
        assert_eq!(
            press(KeyCode::Left),
            Some(Action::Engine(Command::AdjustGrowth(-0.01)))
        );
        assert_eq!(
            press(KeyCode::Char(']')),
            Some(Action::Engine(Command::AdjustDeath(0.01)))
        );
    }

    #[test]
    fn speed_keys_move_delay_in_opposite_directions() {
        assert_eq!(
            press(KeyCode::Char('-')),
            Some(Action::Engine(Command::AdjustStepDelay(0.02)))
        );
        assert_eq!(
            press(KeyCode::Char('=')),
            Some(Action::Engine(Command::AdjustStepDelay(-0.02)))
        );
    }

    #[test]
    fn unbound_keys_ignored() {
        assert_eq!(press(KeyCode::Char('x')), None);
        assert_eq!(press(KeyCode::F(5)), None);
    }
}
