use pest::Parser;
use pest_derive::Parser;
use serde_json::{json, Value};
use thiserror::Error;

pub mod number;
pub mod syntax;

pub use number::{pow_num, Number};

#[derive(Parser)]
#[grammar = "calculator.pest"]
pub struct CalculatorParser;

#[derive(Error, Debug, PartialEq)]
pub enum CalculatorError {
  #[error("Parse error: {0}")]
  ParseError(#[from] Box<pest::error::Error<Rule>>),
  #[error("Empty input")]
  EmptyInput,
  #[error("Division by zero")]
  DivisionByZero,
  #[error("Overflow: result is too large to represent")]
  Overflow,
  #[error("0^0 is undefined")]
  PowerError,
  #[error("Complex numbers are not supported")]
  ComplexNumber,
  #[error("Invalid decimal point")]
  InvalidDecimalPoint,
  #[error("Invalid number: {0}")]
  InvalidLiteral(String),
  #[error("Unmatched bracket")]
  UnmatchedBracket,
  #[error("Unknown operator: {0}")]
  UnknownOperator(String),
  #[error("Incorrect operator usage")]
  IncorrectOperatorUsage,
}

impl CalculatorParser {
  pub fn parse_calculation(
    input: &str,
  ) -> Result<pest::iterators::Pairs<'_, Rule>, Box<pest::error::Error<Rule>>>
  {
    Self::parse(Rule::Calculation, input).map_err(Box::new)
  }
}

pub fn parse(
  input: &str,
) -> Result<pest::iterators::Pairs<'_, Rule>, Box<pest::error::Error<Rule>>> {
  CalculatorParser::parse_calculation(input)
}

/// Evaluates an arithmetic expression such as `2^(1/2) * 3 - 1.5`.
pub fn evaluate(input: &str) -> Result<Number, CalculatorError> {
  let trimmed = input.trim();

  // Fast path for plain literals
  if !trimmed.is_empty()
    && trimmed.bytes().all(|byte| byte.is_ascii_digit() || byte == b'.')
  {
    return trimmed.parse();
  }

  let tokens = syntax::tokenize(trimmed)?;
  let postfix = syntax::to_postfix(tokens)?;
  syntax::evaluate_postfix(&postfix)
}

/// Evaluates `input` and renders the result the way the calculator
/// prints it.
pub fn interpret(input: &str) -> Result<String, CalculatorError> {
  evaluate(input).map(|number| number.to_string())
}

/// JSON rendering of a number: its tag, its exact parts and a
/// floating-point approximation.
pub fn describe(number: &Number) -> Value {
  let approximation = number.to_f64();
  match number {
    Number::Integer(integer) => json!({
      "type": "Integer",
      "value": integer.get(),
      "display": number.to_string(),
      "approximation": approximation,
    }),
    Number::Fraction(fraction) => json!({
      "type": "Fraction",
      "integer": fraction.integer.get(),
      "numerator": fraction.numerator.get(),
      "denominator": fraction.denominator.get(),
      "display": number.to_string(),
      "approximation": approximation,
    }),
    Number::Power(power) => json!({
      "type": "Power",
      "multiplicand": {
        "integer": power.multiplicand.integer.get(),
        "numerator": power.multiplicand.numerator.get(),
        "denominator": power.multiplicand.denominator.get(),
      },
      "base": {
        "numerator": power.base.numerator.get(),
        "denominator": power.base.denominator.get(),
      },
      "exponent": {
        "numerator": power.exponent.numerator.get(),
        "denominator": power.exponent.denominator.get(),
      },
      "display": number.to_string(),
      "approximation": approximation,
    }),
    Number::Double(double) => json!({
      "type": "Double",
      "value": double,
      "display": number.to_string(),
      "approximation": approximation,
    }),
  }
}
