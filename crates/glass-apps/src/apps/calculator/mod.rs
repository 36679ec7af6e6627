//! Calculator Application
//!
//! An expression-buffer calculator:
//! - Keypad presses append to the expression
//! - Backspace and clear edit it
//! - Equals evaluates and replaces the buffer with the result
//!
//! A failed evaluation leaves the buffer exactly as it was.

mod eval;
mod format;

pub use eval::{evaluate, EvalError};
pub use format::format_number;

use super::{ContentProvider, ContentView, RenderContext};
use crate::catalog::AppKind;
use crate::error::AppError;
use alloc::string::{String, ToString};
use core::str::FromStr;
use serde::Serialize;

/// Keypad layout, row by row
pub const KEYPAD: [&str; 16] = [
    "7", "8", "9", "/", //
    "4", "5", "6", "*", //
    "1", "2", "3", "-", //
    "0", ".", "(", ")",
];

/// A calculator button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalculatorKey {
    /// A keypad character appended to the expression
    Input(char),
    Backspace,
    Clear,
    Equals,
}

impl FromStr for CalculatorKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backspace" | "⌫" => Ok(CalculatorKey::Backspace),
            "clear" | "C" => Ok(CalculatorKey::Clear),
            "equals" | "=" => Ok(CalculatorKey::Equals),
            key if KEYPAD.contains(&key) => {
                let ch = key.chars().next().ok_or_else(|| AppError::UnknownKey(key.to_string()))?;
                Ok(CalculatorKey::Input(ch))
            }
            other => Err(AppError::UnknownKey(other.to_string())),
        }
    }
}

/// Calculator state (per window)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CalculatorApp {
    expression: String,
}

impl CalculatorApp {
    #[inline]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Replace the expression wholesale (direct typing in the display)
    pub fn set_expression(&mut self, text: &str) {
        self.expression = text.to_string();
    }

    /// Handle a button press
    pub fn press(&mut self, key: CalculatorKey) {
        match key {
            CalculatorKey::Input(ch) => self.expression.push(ch),
            CalculatorKey::Backspace => {
                self.expression.pop();
            }
            CalculatorKey::Clear => self.expression.clear(),
            CalculatorKey::Equals => {
                // Malformed input is ignored; the buffer stays as typed.
                if let Err(e) = self.evaluate() {
                    log::debug!("calculator: '{}' not evaluated: {}", self.expression, e);
                }
            }
        }
    }

    /// Evaluate the buffer, replacing it with the formatted result on success
    pub fn evaluate(&mut self) -> Result<f64, EvalError> {
        let value = evaluate(&self.expression)?;
        self.expression = format_number(value);
        Ok(value)
    }
}

/// Calculator content view
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CalculatorView {
    pub expression: String,
    pub keypad: &'static [&'static str],
    pub backspace: &'static str,
    pub clear: &'static str,
    pub equals: &'static str,
}

impl ContentProvider for CalculatorApp {
    fn kind(&self) -> AppKind {
        AppKind::Calculator
    }

    fn render(&self, _ctx: &RenderContext<'_>) -> ContentView {
        ContentView::Calculator(CalculatorView {
            expression: self.expression.clone(),
            keypad: &KEYPAD,
            backspace: "⌫",
            clear: "C",
            equals: "=",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_keys(calc: &mut CalculatorApp, keys: &str) {
        for ch in keys.chars() {
            calc.press(CalculatorKey::Input(ch));
        }
    }

    #[test]
    fn test_simple_sum() {
        let mut calc = CalculatorApp::default();
        type_keys(&mut calc, "2+2");
        calc.press(CalculatorKey::Equals);
        assert_eq!(calc.expression(), "4");
    }

    #[test]
    fn test_malformed_leaves_buffer() {
        let mut calc = CalculatorApp::default();
        type_keys(&mut calc, "2+");
        calc.press(CalculatorKey::Equals);
        assert_eq!(calc.expression(), "2+");
    }

    #[test]
    fn test_parentheses() {
        let mut calc = CalculatorApp::default();
        type_keys(&mut calc, "(1+2)*3");
        calc.press(CalculatorKey::Equals);
        assert_eq!(calc.expression(), "9");
    }

    #[test]
    fn test_result_can_be_extended() {
        let mut calc = CalculatorApp::default();
        type_keys(&mut calc, "1/4");
        calc.press(CalculatorKey::Equals);
        assert_eq!(calc.expression(), "0.25");
        type_keys(&mut calc, "*8");
        calc.press(CalculatorKey::Equals);
        assert_eq!(calc.expression(), "2");
    }

    #[test]
    fn test_exponent_result_can_be_extended() {
        let mut calc = CalculatorApp::default();
        type_keys(&mut calc, "100000000000*100000000000");
        calc.press(CalculatorKey::Equals);
        assert_eq!(calc.expression(), "1e+22");

        type_keys(&mut calc, "*2");
        calc.press(CalculatorKey::Equals);
        assert_eq!(calc.expression(), "2e+22");

        calc.set_expression("1.5e-7");
        type_keys(&mut calc, "*2");
        calc.press(CalculatorKey::Equals);
        assert_eq!(calc.expression(), "3e-7");
    }

    #[test]
    fn test_non_finite_result_can_be_extended() {
        let mut calc = CalculatorApp::default();
        type_keys(&mut calc, "1/0");
        calc.press(CalculatorKey::Equals);
        assert_eq!(calc.expression(), "Infinity");

        type_keys(&mut calc, "-1");
        calc.press(CalculatorKey::Equals);
        assert_eq!(calc.expression(), "Infinity");

        calc.set_expression("0/0");
        calc.press(CalculatorKey::Equals);
        type_keys(&mut calc, "+1");
        calc.press(CalculatorKey::Equals);
        assert_eq!(calc.expression(), "NaN");
    }

    #[test]
    fn test_backspace_and_clear() {
        let mut calc = CalculatorApp::default();
        calc.press(CalculatorKey::Backspace);
        assert_eq!(calc.expression(), "");

        type_keys(&mut calc, "12");
        calc.press(CalculatorKey::Backspace);
        assert_eq!(calc.expression(), "1");

        calc.press(CalculatorKey::Clear);
        assert_eq!(calc.expression(), "");
    }

    #[test]
    fn test_empty_equals_is_noop() {
        let mut calc = CalculatorApp::default();
        calc.press(CalculatorKey::Equals);
        assert_eq!(calc.expression(), "");
    }

    #[test]
    fn test_typed_garbage_is_rejected() {
        let mut calc = CalculatorApp::default();
        calc.set_expression("process.exit()");
        assert!(calc.evaluate().is_err());
        assert_eq!(calc.expression(), "process.exit()");
    }

    #[test]
    fn test_key_names() {
        assert_eq!("7".parse::<CalculatorKey>(), Ok(CalculatorKey::Input('7')));
        assert_eq!("(".parse::<CalculatorKey>(), Ok(CalculatorKey::Input('(')));
        assert_eq!("=".parse::<CalculatorKey>(), Ok(CalculatorKey::Equals));
        assert_eq!("backspace".parse::<CalculatorKey>(), Ok(CalculatorKey::Backspace));
        assert_eq!("C".parse::<CalculatorKey>(), Ok(CalculatorKey::Clear));
        assert_eq!(
            "%".parse::<CalculatorKey>(),
            Err(AppError::UnknownKey("%".to_string()))
        );
    }
}
