use super::*;

mod errors {
  use super::*;

  #[test]
  fn division_by_zero() {
    for input in ["1 / 0", "0 / 0", "1.5 / 0.0", "1 / (0.5 - 1/2)", "0^-1"] {
      assert_eq!(
        evaluate(input),
        Err(CalculatorError::DivisionByZero),
        "{}",
        input
      );
    }
    assert_eq!(
      interpret("1 / 0").unwrap_err().to_string(),
      "Division by zero"
    );
  }

  #[test]
  fn zero_to_the_zero() {
    for input in ["0^0", "(1 - 1)^0", "0.0^0", "0^(2 - 2)"] {
      assert_eq!(
        evaluate(input),
        Err(CalculatorError::PowerError),
        "{}",
        input
      );
    }
  }

  #[test]
  fn even_roots_of_negative_numbers() {
    for input in ["(-4)^(1/2)", "(-1)^(1/2)", "(-2)^(3/4)"] {
      assert_eq!(
        evaluate(input),
        Err(CalculatorError::ComplexNumber),
        "{}",
        input
      );
    }
  }

  #[test]
  fn overflow_past_the_double_range() {
    let enormous = format!("1{}", "0".repeat(400));
    assert_eq!(evaluate(&enormous), Err(CalculatorError::Overflow));
    assert_eq!(
      evaluate("100000000000000000000^100"),
      Err(CalculatorError::Overflow)
    );
  }

  #[test]
  fn overflowed_powers_in_floating_point() {
    let inputs = [
      "2^2000 - 3^2000",
      "2^2000 * 0",
      "2^2000 / 3^2000",
      "2^2000 + 0.5",
      "(2^2000)^0",
      "2^(2^2000)",
    ];
    for input in inputs {
      assert_eq!(
        evaluate(input),
        Err(CalculatorError::Overflow),
        "{}",
        input
      );
    }
    // still exact while it stays symbolic
    assert_eq!(
      interpret("2^2000").unwrap(),
      "(1+0/1)*(2/1)^(2000/1)"
    );
  }

  #[test]
  fn malformed_numbers() {
    assert_eq!(evaluate("1.2.3"), Err(CalculatorError::InvalidDecimalPoint));
    assert_eq!(
      evaluate("1 + 2,5,0"),
      Err(CalculatorError::InvalidDecimalPoint)
    );
    assert_eq!(
      evaluate("."),
      Err(CalculatorError::InvalidLiteral(".".to_string()))
    );
  }

  #[test]
  fn brackets() {
    for input in ["(1 + 2", "1 + 2)", ")(", "((1)"] {
      assert_eq!(
        evaluate(input),
        Err(CalculatorError::UnmatchedBracket),
        "{}",
        input
      );
    }
  }

  #[test]
  fn unknown_operators() {
    assert_eq!(
      evaluate("2 % 3"),
      Err(CalculatorError::UnknownOperator("%".to_string()))
    );
    assert_eq!(
      evaluate("1e5"),
      Err(CalculatorError::UnknownOperator("e".to_string()))
    );
  }

  #[test]
  fn incorrect_operator_usage() {
    for input in ["*2", "1 +", "1 2", "()", "1 + *2", "2^"] {
      assert_eq!(
        evaluate(input),
        Err(CalculatorError::IncorrectOperatorUsage),
        "{}",
        input
      );
    }
  }

  #[test]
  fn empty_input() {
    assert_eq!(evaluate(""), Err(CalculatorError::EmptyInput));
    assert_eq!(evaluate(" \t "), Err(CalculatorError::EmptyInput));
  }
}
