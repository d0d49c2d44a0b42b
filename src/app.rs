use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

use crate::calculator::{self, Installment, RateSchedule};
use crate::config::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Otr,
    DownPayment,
    Duration,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Otr, Field::DownPayment, Field::Duration];

    pub fn next(self) -> Self {
        match self {
            Field::Otr => Field::DownPayment,
            Field::DownPayment => Field::Duration,
            Field::Duration => Field::Otr,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Field::Otr => Field::Duration,
            Field::DownPayment => Field::Otr,
            Field::Duration => Field::DownPayment,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Otr => "OTR (On The Road Price)",
            Field::DownPayment => "Down Payment (%)",
            Field::Duration => "Duration (months)",
        }
    }
}

/// Raw text of the three form fields. The OTR is stored without grouping
/// separators; they are only added for display.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanInputs {
    pub otr: String,
    pub down_payment: String,
    pub duration: String,
}

pub struct App {
    pub focus: Field,
    pub inputs: LoanInputs,
    pub rates: RateSchedule,
    pub installment: Option<Installment>,
}

impl Default for App {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl App {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            focus: Field::Otr,
            inputs: LoanInputs {
                otr: settings.defaults.otr.clone(),
                down_payment: settings.defaults.down_payment.clone(),
                duration: settings.defaults.duration.clone(),
            },
            rates: settings.rates,
            installment: None,
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Otr => &self.inputs.otr,
            Field::DownPayment => &self.inputs.down_payment,
            Field::Duration => &self.inputs.duration,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Otr => &mut self.inputs.otr,
            Field::DownPayment => &mut self.inputs.down_payment,
            Field::Duration => &mut self.inputs.duration,
        }
    }

    /// Replaces any previous result.
    pub fn calculate_installment(&mut self) {
        let installment = calculator::compute(
            &self.inputs.otr,
            &self.inputs.down_payment,
            &self.inputs.duration,
            &self.rates,
        );
        info!(
            otr = %self.inputs.otr,
            down_payment = %self.inputs.down_payment,
            duration = %self.inputs.duration,
            result = %installment.formatted(),
            "installment calculated"
        );
        self.installment = Some(installment);
    }

    pub fn installment_text(&self) -> Option<String> {
        self.installment.as_ref().map(Installment::formatted)
    }
}

/// Returns `true` when the app should exit.
pub fn handle_key_input(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.field_mut(app.focus).clear();
        }
        // only digits ever reach a field
        KeyCode::Char(c) if c.is_ascii_digit() => {
            app.field_mut(app.focus).push(c);
        }
        KeyCode::Backspace => {
            app.field_mut(app.focus).pop();
        }
        KeyCode::Tab | KeyCode::Down => app.focus = app.focus.next(),
        KeyCode::BackTab | KeyCode::Up => app.focus = app.focus.previous(),
        KeyCode::Enter => app.calculate_installment(),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_key_input(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn empty_app() -> App {
        let mut app = App::default();
        for field in Field::ALL {
            app.field_mut(field).clear();
        }
        app
    }

    #[test]
    fn test_starts_with_defaults_and_no_result() {
        let app = App::default();
        assert_eq!(app.focus, Field::Otr);
        assert_eq!(app.field(Field::Otr), "240000000");
        assert_eq!(app.field(Field::DownPayment), "20");
        assert_eq!(app.field(Field::Duration), "18");
        assert!(app.installment_text().is_none());
    }

    #[test]
    fn test_non_digits_are_filtered() {
        let mut app = empty_app();
        type_text(&mut app, "1a2.3,4 -5");
        assert_eq!(app.field(Field::Otr), "12345");
    }

    #[test]
    fn test_backspace_and_clear() {
        let mut app = App::default();
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.field(Field::Otr), "24000000");

        handle_key_input(
            &mut app,
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
        );
        assert_eq!(app.field(Field::Otr), "");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.field(Field::Otr), "");
    }

    #[test]
    fn test_focus_wraps() {
        let mut app = App::default();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Field::DownPayment);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.focus, Field::Duration);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Field::Otr);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.focus, Field::Duration);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Field::DownPayment);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut app = empty_app();
        type_text(&mut app, "100000000");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "0");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "6");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.installment_text().as_deref(), Some("Rp 18.666.666,67"));
    }

    #[test]
    fn test_enter_replaces_previous_result() {
        let mut app = App::default();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.installment_text().as_deref(), Some("Rp 12.160.000,00"));

        app.focus = Field::Duration;
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, "0");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.installment_text().as_deref(), Some("Rp ∞"));
    }

    #[test]
    fn test_editing_does_not_recalculate() {
        let mut app = App::default();
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "0");
        assert_eq!(app.installment_text().as_deref(), Some("Rp 12.160.000,00"));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::default();
        assert!(press(&mut app, KeyCode::Esc));
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(handle_key_input(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
        assert!(!press(&mut app, KeyCode::Char('7')));
    }

    #[test]
    fn test_settings_rates_are_used() {
        let mut settings = Settings::default();
        settings.rates.medium_term = 0.0;
        let mut app = App::from_settings(&settings);
        press(&mut app, KeyCode::Enter);
        let installment = app.installment.unwrap();
        assert_eq!(installment.rate, 0.0);
        assert_eq!(app.installment_text().as_deref(), Some("Rp 10.666.666,67"));
    }
}
