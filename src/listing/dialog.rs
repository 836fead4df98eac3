// Filter dialog state
//
// Self-contained like the other modals: it owns its open flag and form
// fields, handles its own keys and returns an action. Submitting hands the
// filter to the caller and closes the dialog itself.

use crate::animals::{AnimalFilter, ANIMAL_GENDERS, ANIMAL_TYPES};
use crossterm::event::KeyCode;

/// Label for the "no criterion" option of each selector
pub const ANY_OPTION: &str = "Todos";

/// Result of a key press inside the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    /// Input consumed, nothing for the caller to do
    None,
    /// Dialog closed without a new filter
    Closed,
    /// Dialog closed with a filter to apply
    Submit(AnimalFilter),
}

/// Form field with keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogField {
    #[default]
    Type,
    Gender,
}

impl DialogField {
    fn toggle(self) -> Self {
        match self {
            DialogField::Type => DialogField::Gender,
            DialogField::Gender => DialogField::Type,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DialogField::Type => "Tipo",
            DialogField::Gender => "Gênero",
        }
    }
}

/// The "Filtros" dialog
#[derive(Debug, Clone, Default)]
pub struct FilterDialog {
    open: bool,
    focus: DialogField,
    /// 0 = any, n = ANIMAL_TYPES[n - 1]
    type_idx: usize,
    /// 0 = any, n = ANIMAL_GENDERS[n - 1]
    gender_idx: usize,
}

impl FilterDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open-state change requested from outside (trigger button, Esc)
    ///
    /// Opening starts from a blank form.
    pub fn set_open(&mut self, open: bool) {
        if open && !self.open {
            self.focus = DialogField::default();
            self.type_idx = 0;
            self.gender_idx = 0;
        }
        self.open = open;
    }

    pub fn close(&mut self) {
        self.set_open(false);
    }

    pub fn focus(&self) -> DialogField {
        self.focus
    }

    pub fn selected_type(&self) -> Option<&'static str> {
        option_at(ANIMAL_TYPES, self.type_idx)
    }

    pub fn selected_gender(&self) -> Option<&'static str> {
        option_at(ANIMAL_GENDERS, self.gender_idx)
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&mut self, key: KeyCode) -> DialogAction {
        if !self.open {
            return DialogAction::None;
        }

        match key {
            KeyCode::Esc => {
                self.close();
                DialogAction::Closed
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Char('j')
            | KeyCode::Char('k') => {
                self.focus = self.focus.toggle();
                DialogAction::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.cycle(true);
                DialogAction::None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.cycle(false);
                DialogAction::None
            }
            _ => DialogAction::None,
        }
    }

    fn cycle(&mut self, forward: bool) {
        let (idx, len) = match self.focus {
            DialogField::Type => (&mut self.type_idx, ANIMAL_TYPES.len() + 1),
            DialogField::Gender => (&mut self.gender_idx, ANIMAL_GENDERS.len() + 1),
        };
        *idx = if forward {
            (*idx + 1) % len
        } else {
            (*idx + len - 1) % len
        };
    }

    fn submit(&mut self) -> DialogAction {
        let filter = AnimalFilter::new(
            self.selected_type().map(str::to_string),
            self.selected_gender().map(str::to_string),
        );
        self.close();
        match filter {
            Some(filter) => DialogAction::Submit(filter),
            None => DialogAction::Closed,
        }
    }
}

fn option_at(options: &'static [&'static str], idx: usize) -> Option<&'static str> {
    idx.checked_sub(1).and_then(|i| options.get(i).copied())
}

/// Display label for a selector value
pub fn option_label(value: Option<&str>) -> &str {
    value.unwrap_or(ANY_OPTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_dialog_ignores_input() {
        let mut dialog = FilterDialog::new();
        assert_eq!(dialog.handle_input(KeyCode::Enter), DialogAction::None);
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_submit_returns_filter_and_closes_itself() {
        let mut dialog = FilterDialog::new();
        dialog.set_open(true);

        // Tipo: Todos -> Cachorro
        dialog.handle_input(KeyCode::Right);
        assert_eq!(dialog.selected_type(), Some("Cachorro"));

        let action = dialog.handle_input(KeyCode::Enter);
        assert_eq!(
            action,
            DialogAction::Submit(AnimalFilter::new(Some("Cachorro".into()), None).unwrap())
        );
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_empty_submit_just_closes() {
        let mut dialog = FilterDialog::new();
        dialog.set_open(true);
        assert_eq!(dialog.handle_input(KeyCode::Enter), DialogAction::Closed);
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_esc_closes_without_submit() {
        let mut dialog = FilterDialog::new();
        dialog.set_open(true);
        dialog.handle_input(KeyCode::Right);
        assert_eq!(dialog.handle_input(KeyCode::Esc), DialogAction::Closed);
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_both_fields_and_wraparound() {
        let mut dialog = FilterDialog::new();
        dialog.set_open(true);

        // Left from "Todos" wraps to the last type
        dialog.handle_input(KeyCode::Left);
        assert_eq!(dialog.selected_type(), Some("Gato"));

        dialog.handle_input(KeyCode::Down);
        assert_eq!(dialog.focus(), DialogField::Gender);
        dialog.handle_input(KeyCode::Right);
        dialog.handle_input(KeyCode::Right);
        assert_eq!(dialog.selected_gender(), Some("Fêmea"));
        dialog.handle_input(KeyCode::Right);
        assert_eq!(dialog.selected_gender(), None);
        dialog.handle_input(KeyCode::Right);

        match dialog.handle_input(KeyCode::Enter) {
            DialogAction::Submit(filter) => {
                assert_eq!(filter.kind(), Some("Gato"));
                assert_eq!(filter.gender(), Some("Macho"));
            }
            other => panic!("Expected Submit, got {:?}", other),
        }
    }

    #[test]
    fn test_reopening_starts_blank() {
        let mut dialog = FilterDialog::new();
        dialog.set_open(true);
        dialog.handle_input(KeyCode::Right);
        dialog.handle_input(KeyCode::Esc);

        dialog.set_open(true);
        assert_eq!(dialog.selected_type(), None);
        assert_eq!(dialog.focus(), DialogField::Type);
    }
}
