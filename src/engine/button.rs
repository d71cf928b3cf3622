// Keypad button model
//
// One variant per keycap. The grid constant defines the on-screen layout;
// labels are the keycap glyphs, with ASCII aliases accepted on input so the
// label-based contract works from plain keyboards too.

use super::BinaryOp;

/// A calculator keycap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Digit key 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// Binary operator key
    Op(BinaryOp),
    /// Evaluate pending operation
    Equals,
    /// Reset buffer, operands and pending operation
    ClearAll,
    /// Reset buffer only
    ClearEntry,
    /// Remove last buffer character
    Backspace,
    /// Flip sign
    Negate,
    /// x squared
    Square,
    /// Square root
    Sqrt,
    /// 1/x
    Reciprocal,
}

/// Visual class of a button, drives theme colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonClass {
    /// Digit keys 0-9
    Digit,
    /// Gray function/operator keys
    Function,
    /// The highlighted equals key
    Accent,
    /// The clear-all key
    Danger,
}

/// Keypad layout, row-major top to bottom
pub const GRID: [[Button; 4]; 6] = [
    [
        Button::Op(BinaryOp::Mod),
        Button::ClearEntry,
        Button::ClearAll,
        Button::Backspace,
    ],
    [
        Button::Reciprocal,
        Button::Square,
        Button::Sqrt,
        Button::Op(BinaryOp::Div),
    ],
    [
        Button::Digit(7),
        Button::Digit(8),
        Button::Digit(9),
        Button::Op(BinaryOp::Mul),
    ],
    [
        Button::Digit(4),
        Button::Digit(5),
        Button::Digit(6),
        Button::Op(BinaryOp::Sub),
    ],
    [
        Button::Digit(1),
        Button::Digit(2),
        Button::Digit(3),
        Button::Op(BinaryOp::Add),
    ],
    [
        Button::Negate,
        Button::Digit(0),
        Button::Decimal,
        Button::Equals,
    ],
];

impl Button {
    /// Keycap glyph shown on the keypad
    pub fn label(&self) -> &'static str {
        match self {
            Button::Digit(0) => "0",
            Button::Digit(1) => "1",
            Button::Digit(2) => "2",
            Button::Digit(3) => "3",
            Button::Digit(4) => "4",
            Button::Digit(5) => "5",
            Button::Digit(6) => "6",
            Button::Digit(7) => "7",
            Button::Digit(8) => "8",
            Button::Digit(9) => "9",
            Button::Digit(_) => "?",
            Button::Decimal => ".",
            Button::Op(op) => op.label(),
            Button::Equals => "=",
            Button::ClearAll => "C",
            Button::ClearEntry => "CE",
            Button::Backspace => "⌫",
            Button::Negate => "±",
            Button::Square => "x²",
            Button::Sqrt => "√",
            Button::Reciprocal => "⅟x",
        }
    }

    /// Resolve a keycap label (or ASCII alias) back to a button
    pub fn from_label(label: &str) -> Option<Self> {
        let button = match label {
            "0" => Button::Digit(0),
            "1" => Button::Digit(1),
            "2" => Button::Digit(2),
            "3" => Button::Digit(3),
            "4" => Button::Digit(4),
            "5" => Button::Digit(5),
            "6" => Button::Digit(6),
            "7" => Button::Digit(7),
            "8" => Button::Digit(8),
            "9" => Button::Digit(9),
            "." | "•" => Button::Decimal,
            "+" => Button::Op(BinaryOp::Add),
            "−" | "-" => Button::Op(BinaryOp::Sub),
            "×" | "*" | "x" => Button::Op(BinaryOp::Mul),
            "÷" | "/" => Button::Op(BinaryOp::Div),
            "%" => Button::Op(BinaryOp::Mod),
            "=" | "🟰" => Button::Equals,
            "C" | "c" => Button::ClearAll,
            "CE" | "ce" => Button::ClearEntry,
            "⌫" | "⬅" | "backspace" => Button::Backspace,
            "±" => Button::Negate,
            "x²" | "sqr" => Button::Square,
            "√" | "sqrt" => Button::Sqrt,
            "⅟x" | "¹/ₓ" | "1/x" => Button::Reciprocal,
            _ => return None,
        };
        Some(button)
    }

    /// Visual class for theme styling
    pub fn class(&self) -> ButtonClass {
        match self {
            Button::Digit(_) => ButtonClass::Digit,
            Button::Equals => ButtonClass::Accent,
            Button::ClearAll => ButtonClass::Danger,
            _ => ButtonClass::Function,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_label() {
        for row in GRID {
            for button in row {
                assert_eq!(
                    Button::from_label(button.label()),
                    Some(button),
                    "label {:?} did not resolve",
                    button.label()
                );
            }
        }
    }

    #[test]
    fn ascii_aliases_resolve() {
        assert_eq!(Button::from_label("*"), Some(Button::Op(BinaryOp::Mul)));
        assert_eq!(Button::from_label("/"), Some(Button::Op(BinaryOp::Div)));
        assert_eq!(Button::from_label("-"), Some(Button::Op(BinaryOp::Sub)));
        assert_eq!(Button::from_label("1/x"), Some(Button::Reciprocal));
        assert_eq!(Button::from_label("sqrt"), Some(Button::Sqrt));
    }

    #[test]
    fn unknown_label_is_none() {
        assert_eq!(Button::from_label("sin"), None);
        assert_eq!(Button::from_label(""), None);
    }

    #[test]
    fn classes_drive_key_styling() {
        assert_eq!(Button::Digit(7).class(), ButtonClass::Digit);
        assert_eq!(Button::Equals.class(), ButtonClass::Accent);
        assert_eq!(Button::ClearAll.class(), ButtonClass::Danger);
        assert_eq!(Button::ClearEntry.class(), ButtonClass::Function);
        assert_eq!(Button::Op(BinaryOp::Add).class(), ButtonClass::Function);
    }
}
