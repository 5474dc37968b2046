//! The lesson run: every computed result paired with its label, in print
//! order, and the renderer that writes them out one per line.

use crate::config::Language;
use crate::error::Result;
use crate::evaluator::NumberList;
use crate::lambdas::{
    double_lambda, is_even_lambda, is_negative_lambda, over_10_lambda, square_lambda,
    triple_lambda,
};
use colored::Colorize;
use std::fmt;
use std::io::Write;
use tracing::debug;

/// Numbers bound alongside the single-value checks.
pub const WARMUP_NUMBERS: [i64; 5] = [15, 5, -3, 8, 12];

/// Numbers every batch operation runs over.
pub const LESSON_NUMBERS: [i64; 7] = [-5, 2, 8, 15, -2, 12, 1];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Triple,
    IsEven,
    Square,
    Over10,
    Double,
    IsNegative,
    AllDoubled,
    BigNumbers,
    Negatives,
}

impl Label {
    pub fn text(self, language: Language) -> &'static str {
        match (self, language) {
            (Label::Triple, _) => "3 * 3 =",
            (Label::IsEven, Language::Ko) => "4는 짝수인가?",
            (Label::IsEven, Language::En) => "Is 4 even?",
            (Label::Square, Language::Ko) => "5의 제곱 =",
            (Label::Square, Language::En) => "5 squared =",
            (Label::Over10, Language::Ko) => "15는 10보다 큰가?",
            (Label::Over10, Language::En) => "Is 15 greater than 10?",
            (Label::Double, Language::Ko) => "7의 두 배는?",
            (Label::Double, Language::En) => "What is 7 doubled?",
            (Label::IsNegative, Language::Ko) => "-3은 음수인가?",
            (Label::IsNegative, Language::En) => "Is -3 negative?",
            (Label::AllDoubled, Language::Ko) => "모든 수를 두 배로:",
            (Label::AllDoubled, Language::En) => "All numbers doubled:",
            (Label::BigNumbers, Language::Ko) => "10보다 큰 수들:",
            (Label::BigNumbers, Language::En) => "Numbers greater than 10:",
            (Label::Negatives, Language::Ko) => "음수들:",
            (Label::Negatives, Language::En) => "Negatives:",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Bool(bool),
    List(NumberList),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::List(list) => write!(f, "{}", list),
        }
    }
}

impl From<NumberList> for Value {
    fn from(list: NumberList) -> Self {
        Value::List(list)
    }
}

/// One printed line. Lines without a label print the bare value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub label: Option<Label>,
    pub value: Value,
}

impl Line {
    fn labeled(label: Label, value: Value) -> Self {
        Line {
            label: Some(label),
            value,
        }
    }

    fn bare(value: Value) -> Self {
        Line { label: None, value }
    }

    pub fn render(&self, language: Language) -> String {
        match self.label {
            Some(label) => format!("{} {}", label.text(language), self.value),
            None => self.value.to_string(),
        }
    }
}

/// Computes every result of the lesson in print order.
pub fn run() -> Vec<Line> {
    // Single-value checks with the closure forms.
    let triple = triple_lambda();
    let is_even = is_even_lambda();
    let square = square_lambda();

    let mut lines = vec![
        Line::labeled(Label::Triple, Value::Int(triple(3))),
        Line::labeled(Label::IsEven, Value::Bool(is_even(4))),
        Line::labeled(Label::Square, Value::Int(square(5))),
    ];

    let over_10 = over_10_lambda();
    let double = double_lambda();
    let is_negative = is_negative_lambda();

    let warmup_numbers = NumberList::new(WARMUP_NUMBERS);
    debug!(%warmup_numbers, "warmup list bound, no batch operation");

    lines.push(Line::labeled(Label::Over10, Value::Bool(over_10(15))));
    lines.push(Line::labeled(Label::Double, Value::Int(double(7))));
    lines.push(Line::labeled(Label::IsNegative, Value::Bool(is_negative(-3))));

    // Batch operations over the lesson list.
    let numbers = NumberList::new(LESSON_NUMBERS);
    let doubled = numbers.map(&double);
    let big_numbers = numbers.filter(&over_10);
    let negatives = numbers.filter(&is_negative);
    debug!(%numbers, ?doubled, %big_numbers, %negatives, "batch operations");

    lines.push(Line::labeled(Label::AllDoubled, Value::List(doubled.into())));
    lines.push(Line::labeled(Label::BigNumbers, big_numbers.into()));
    lines.push(Line::labeled(Label::Negatives, negatives.into()));

    let result = numbers.map(|x| x * 2);
    debug!(?result, "inline closure map");
    lines.push(Line::bare(Value::List(result.into())));

    lines
}

/// Writes one line per entry. With `color`, labels are bold cyan.
pub fn render<W: Write>(
    lines: &[Line],
    language: Language,
    color: bool,
    out: &mut W,
) -> Result<()> {
    for line in lines {
        match (line.label, color) {
            (Some(label), true) => {
                writeln!(out, "{} {}", label.text(language).bold().cyan(), line.value)?
            }
            _ => writeln!(out, "{}", line.render(language))?,
        }
    }
    out.flush()?;
    debug!(count = lines.len(), "transcript written");
    Ok(())
}
