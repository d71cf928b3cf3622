// Evaluation core
//
// The calculator is a small explicit state machine: the display buffer being
// edited, the stored first operand, and the pending operator. Every keypad
// press mutates the state in place; the text to display afterwards is always
// the buffer. All failure paths (unparseable buffer, sqrt of a negative,
// reciprocal of zero, equals without an operator) are silent no-ops - the
// engine never returns an error and never panics.

mod button;
mod format;
mod tape;

pub use button::{Button, ButtonClass, GRID};
pub use format::format_number;
pub use tape::{to_json_lines, TapeEntry};

/// Binary operator stored while the second operand is entered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryOp {
    /// Apply the operator. Division and modulus by zero follow IEEE-754
    /// (±inf / NaN), they are not errors.
    pub fn apply(self, first: f64, second: f64) -> f64 {
        match self {
            BinaryOp::Add => first + second,
            BinaryOp::Sub => first - second,
            BinaryOp::Mul => first * second,
            BinaryOp::Div => first / second,
            BinaryOp::Mod => first % second,
        }
    }

    /// Operator glyph, shared by keycaps and tape expressions
    pub fn label(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "−",
            BinaryOp::Mul => "×",
            BinaryOp::Div => "÷",
            BinaryOp::Mod => "%",
        }
    }
}

/// Calculator state: display buffer plus the pending binary operation
#[derive(Debug, Default)]
pub struct Calculator {
    /// Text currently shown and edited. Empty or a decimal-literal prefix;
    /// at most one decimal point, a leading '-' only via Negate.
    buffer: String,
    /// First operand, captured when an operator key is pressed
    first: f64,
    /// Operator awaiting its second operand
    pending: Option<BinaryOp>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text for the display field
    pub fn display(&self) -> &str {
        &self.buffer
    }

    /// Operator awaiting a second operand, for the display indicator
    pub fn pending(&self) -> Option<BinaryOp> {
        self.pending
    }

    /// Stored first operand, shown dimmed above the buffer while an
    /// operation is pending
    pub fn first_operand(&self) -> f64 {
        self.first
    }

    /// Press a button. Returns a tape entry when a computation completed
    /// (equals or a unary application), None otherwise.
    pub fn press(&mut self, button: Button) -> Option<TapeEntry> {
        match button {
            Button::Digit(d) => {
                if let Some(c) = char::from_digit(u32::from(d), 10) {
                    self.buffer.push(c);
                }
                None
            }
            Button::Decimal => {
                // Second decimal point is rejected; a bare "." is allowed
                // transiently and fails the next parse silently
                if !self.buffer.contains('.') {
                    self.buffer.push('.');
                }
                None
            }
            Button::ClearAll => {
                self.buffer.clear();
                self.first = 0.0;
                self.pending = None;
                None
            }
            Button::ClearEntry => {
                self.buffer.clear();
                None
            }
            Button::Backspace => {
                self.buffer.pop();
                None
            }
            Button::Negate => {
                let value = self.parsed()?;
                self.buffer = format_number(-value);
                None
            }
            Button::Square => {
                let value = self.parsed()?;
                self.replace_with_result(format!("{}²", self.buffer), value * value)
            }
            Button::Sqrt => {
                let value = self.parsed()?;
                if value < 0.0 {
                    return None;
                }
                self.replace_with_result(format!("√{}", self.buffer), value.sqrt())
            }
            Button::Reciprocal => {
                let value = self.parsed()?;
                if value == 0.0 {
                    return None;
                }
                self.replace_with_result(format!("⅟{}", self.buffer), 1.0 / value)
            }
            Button::Op(op) => {
                let value = self.parsed()?;
                self.first = value;
                self.buffer.clear();
                self.pending = Some(op);
                None
            }
            Button::Equals => {
                let op = self.pending?;
                let second = self.parsed()?;
                let expression = format!(
                    "{} {} {}",
                    format_number(self.first),
                    op.label(),
                    self.buffer
                );
                self.pending = None;
                self.replace_with_result(expression, op.apply(self.first, second))
            }
        }
    }

    /// Label-based entry point: resolve a keycap label (or ASCII alias),
    /// press it, and return the text to display. Unrecognized labels leave
    /// the state untouched. Kept as the string-facing seam for embedding
    /// the engine behind other frontends.
    #[allow(dead_code)]
    pub fn press_label(&mut self, label: &str) -> &str {
        if let Some(button) = Button::from_label(label) {
            self.press(button);
        }
        self.display()
    }

    fn parsed(&self) -> Option<f64> {
        self.buffer.parse().ok()
    }

    fn replace_with_result(&mut self, expression: String, result: f64) -> Option<TapeEntry> {
        let formatted = format_number(result);
        self.buffer = formatted.clone();
        Some(TapeEntry::new(expression, formatted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(calc: &mut Calculator, labels: &[&str]) {
        for label in labels {
            calc.press_label(label);
        }
    }

    #[test]
    fn digits_accumulate_in_buffer() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["1", "2", ".", "5"]);
        assert_eq!(calc.display(), "12.5");
    }

    #[test]
    fn second_decimal_point_is_rejected() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["3", ".", "1", ".", "4"]);
        assert_eq!(calc.display(), "3.14");
    }

    #[test]
    fn addition_via_equals() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["5", "+", "3"]);
        assert_eq!(calc.press_label("="), "8");
    }

    #[test]
    fn subtraction_can_go_negative() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["2", "-", "7", "="]);
        assert_eq!(calc.display(), "-5");
    }

    #[test]
    fn multiplication_formats_fractions() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["2", ".", "5", "*", "3", "="]);
        assert_eq!(calc.display(), "7.5");
    }

    #[test]
    fn division_by_zero_displays_infinity() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["5", "/", "0", "="]);
        assert_eq!(calc.display(), "inf");
    }

    #[test]
    fn zero_divided_by_zero_is_nan() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["0", "/", "0", "="]);
        assert_eq!(calc.display(), "NaN");
    }

    #[test]
    fn modulus_of_zero_divisor_is_nan() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["7", "%", "0", "="]);
        assert_eq!(calc.display(), "NaN");
    }

    #[test]
    fn equals_without_pending_operator_is_noop() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["4", "2"]);
        assert!(calc.press(Button::Equals).is_none());
        assert_eq!(calc.display(), "42");
    }

    #[test]
    fn equals_with_empty_buffer_keeps_pending() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["5", "+", "="]);
        assert_eq!(calc.display(), "");
        assert_eq!(calc.pending(), Some(BinaryOp::Add));

        // The operation is still armed: entering the operand completes it
        press_all(&mut calc, &["3", "="]);
        assert_eq!(calc.display(), "8");
    }

    #[test]
    fn operator_on_empty_buffer_is_noop() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["5", "+", "+"]);
        assert_eq!(calc.pending(), Some(BinaryOp::Add));
        press_all(&mut calc, &["3", "="]);
        assert_eq!(calc.display(), "8");
    }

    #[test]
    fn negate_flips_sign() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["9", "±"]);
        assert_eq!(calc.display(), "-9");
        calc.press_label("±");
        assert_eq!(calc.display(), "9");
    }

    #[test]
    fn negate_on_empty_buffer_is_noop() {
        let mut calc = Calculator::new();
        calc.press_label("±");
        assert_eq!(calc.display(), "");
    }

    #[test]
    fn square_replaces_buffer() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["1", "2"]);
        let entry = calc.press(Button::Square).unwrap();
        assert_eq!(calc.display(), "144");
        assert_eq!(entry.line(), "12² = 144");
    }

    #[test]
    fn sqrt_of_negative_is_noop() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["9", "±"]);
        assert!(calc.press(Button::Sqrt).is_none());
        assert_eq!(calc.display(), "-9");
    }

    #[test]
    fn sqrt_of_positive_applies() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["9"]);
        calc.press(Button::Sqrt);
        assert_eq!(calc.display(), "3");
    }

    #[test]
    fn reciprocal_of_zero_is_noop() {
        let mut calc = Calculator::new();
        calc.press_label("0");
        assert!(calc.press(Button::Reciprocal).is_none());
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn reciprocal_rounds_to_two_places() {
        let mut calc = Calculator::new();
        calc.press_label("3");
        calc.press(Button::Reciprocal);
        assert_eq!(calc.display(), "0.33");
    }

    #[test]
    fn backspace_removes_last_character() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["1", "2", "3"]);
        calc.press(Button::Backspace);
        assert_eq!(calc.display(), "12");
    }

    #[test]
    fn backspace_on_empty_buffer_is_noop() {
        let mut calc = Calculator::new();
        calc.press(Button::Backspace);
        assert_eq!(calc.display(), "");
    }

    #[test]
    fn clear_entry_keeps_pending_operation() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["5", "+", "9", "9"]);
        calc.press(Button::ClearEntry);
        assert_eq!(calc.display(), "");
        assert_eq!(calc.pending(), Some(BinaryOp::Add));
        press_all(&mut calc, &["3", "="]);
        assert_eq!(calc.display(), "8");
    }

    #[test]
    fn clear_all_resets_everything() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["5", "+", "3"]);
        calc.press(Button::ClearAll);
        assert_eq!(calc.display(), "");
        assert_eq!(calc.pending(), None);

        // A fresh equals after clear is a no-op, not 5 + something
        press_all(&mut calc, &["7", "="]);
        assert_eq!(calc.display(), "7");
    }

    #[test]
    fn digits_append_to_a_shown_result() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["5", "+", "3", "=", "5"]);
        assert_eq!(calc.display(), "85");
    }

    #[test]
    fn bare_decimal_point_fails_parses_silently() {
        let mut calc = Calculator::new();
        calc.press_label(".");
        assert_eq!(calc.display(), ".");

        // Operator press cannot parse "." and leaves everything untouched
        calc.press_label("+");
        assert_eq!(calc.display(), ".");
        assert_eq!(calc.pending(), None);
    }

    #[test]
    fn equals_emits_tape_entry() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["5", "+", "3"]);
        let entry = calc.press(Button::Equals).unwrap();
        assert_eq!(entry.expression, "5 + 3");
        assert_eq!(entry.result, "8");
    }

    #[test]
    fn chained_operations_use_previous_result() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["5", "+", "3", "=", "*", "2", "="]);
        assert_eq!(calc.display(), "16");
    }

    #[test]
    fn unknown_label_returns_current_display() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["4", "2"]);
        assert_eq!(calc.press_label("bogus"), "42");
    }
}
