use pest::iterators::Pair;
use tracing::trace;

use crate::number::{pow_num, Number};
use crate::{parse, CalculatorError, Rule};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
  Number(Number),
  Operator(Operator),
  LeftBracket,
  RightBracket,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
  Plus,
  Minus,
  Times,
  Divide,
  Power,
  /// Prefix `-`
  Negate,
  /// Prefix `+`
  Identity,
}

impl Operator {
  pub fn precedence(self) -> u8 {
    match self {
      Operator::Plus | Operator::Minus => 2,
      Operator::Times | Operator::Divide => 3,
      Operator::Negate | Operator::Identity => 4,
      Operator::Power => 5,
    }
  }

  pub fn is_right_associative(self) -> bool {
    matches!(self, Operator::Power)
  }

  pub fn is_prefix(self) -> bool {
    matches!(self, Operator::Negate | Operator::Identity)
  }

  fn apply_prefix(self, operand: Number) -> Number {
    match self {
      Operator::Negate => operand.negate(),
      _ => operand,
    }
  }

  fn apply(
    self,
    lhs: &Number,
    rhs: &Number,
  ) -> Result<Number, CalculatorError> {
    match self {
      Operator::Plus => lhs.plus(rhs),
      Operator::Minus => lhs.minus(rhs),
      Operator::Times => lhs.times(rhs),
      Operator::Divide => lhs.divide(rhs),
      Operator::Power => pow_num(lhs, rhs),
      Operator::Negate | Operator::Identity => {
        Err(CalculatorError::IncorrectOperatorUsage)
      }
    }
  }
}

/// Splits `input` into numbers, operators and brackets.
///
/// `+` and `-` are read as prefix operators at the start of the input,
/// after another operator and after an opening bracket. A prefix `-` in
/// front of a literal is folded into it, so `-9223372036854775808` stays
/// an integer.
pub fn tokenize(input: &str) -> Result<Vec<Token>, CalculatorError> {
  let calculation = parse(input)?
    .next()
    .ok_or(CalculatorError::EmptyInput)?;

  let pairs: Vec<Pair<'_, Rule>> = calculation.into_inner().collect();
  let mut tokens: Vec<Token> = Vec::new();
  let mut index = 0;
  while let Some(pair) = pairs.get(index) {
    index += 1;
    let token = match pair.as_rule() {
      Rule::Literal => Token::Number(pair.as_str().parse()?),
      Rule::Operator => {
        let operator = operator(pair, tokens.last())?;
        match negative_literal(operator, &pairs[index..]) {
          Some(literal) => {
            index += 1;
            Token::Number(format!("-{}", literal).parse()?)
          }
          None => Token::Operator(operator),
        }
      }
      Rule::LeftBracket => Token::LeftBracket,
      Rule::RightBracket => Token::RightBracket,
      Rule::Unknown => {
        return Err(CalculatorError::UnknownOperator(pair.as_str().to_string()))
      }
      _ => continue,
    };
    tokens.push(token);
  }

  if tokens.is_empty() {
    return Err(CalculatorError::EmptyInput);
  }
  Ok(tokens)
}

fn operator(
  pair: &Pair<'_, Rule>,
  previous: Option<&Token>,
) -> Result<Operator, CalculatorError> {
  let unary = matches!(
    previous,
    None | Some(Token::Operator(_)) | Some(Token::LeftBracket)
  );
  match (pair.as_str(), unary) {
    ("+", false) => Ok(Operator::Plus),
    ("-", false) => Ok(Operator::Minus),
    ("*", false) => Ok(Operator::Times),
    ("/", false) => Ok(Operator::Divide),
    ("^", false) => Ok(Operator::Power),
    ("+", true) => Ok(Operator::Identity),
    ("-", true) => Ok(Operator::Negate),
    ("*" | "/" | "^", true) => Err(CalculatorError::IncorrectOperatorUsage),
    (other, _) => Err(CalculatorError::UnknownOperator(other.to_string())),
  }
}

/// The literal a prefix `-` can be folded into. Not when the literal is
/// raised to a power: `-2^2` is `-(2^2)`.
fn negative_literal<'i>(
  operator: Operator,
  rest: &[Pair<'i, Rule>],
) -> Option<&'i str> {
  if operator != Operator::Negate {
    return None;
  }
  match rest {
    [literal, after @ ..] if literal.as_rule() == Rule::Literal => {
      let raised = matches!(after.first(), Some(next) if next.as_str() == "^");
      (!raised).then(|| literal.as_str())
    }
    _ => None,
  }
}

/// Shunting-yard conversion to postfix order.
pub fn to_postfix(tokens: Vec<Token>) -> Result<Vec<Token>, CalculatorError> {
  let mut output = Vec::with_capacity(tokens.len());
  let mut stack: Vec<Token> = Vec::new();

  for token in tokens {
    match token {
      Token::Number(_) => output.push(token),
      Token::Operator(operator) if operator.is_prefix() => stack.push(token),
      Token::Operator(operator) => {
        while let Some(&Token::Operator(top)) = stack.last() {
          let binds_tighter = top.precedence() > operator.precedence()
            || (top.precedence() == operator.precedence()
              && !operator.is_right_associative());
          if !binds_tighter {
            break;
          }
          output.push(Token::Operator(top));
          stack.pop();
        }
        stack.push(token);
      }
      Token::LeftBracket => stack.push(token),
      Token::RightBracket => loop {
        match stack.pop() {
          Some(Token::LeftBracket) => break,
          Some(popped) => output.push(popped),
          None => return Err(CalculatorError::UnmatchedBracket),
        }
      },
    }
  }

  while let Some(token) = stack.pop() {
    if token == Token::LeftBracket {
      return Err(CalculatorError::UnmatchedBracket);
    }
    output.push(token);
  }
  trace!(?output, "postfix");
  Ok(output)
}

pub fn evaluate_postfix(postfix: &[Token]) -> Result<Number, CalculatorError> {
  let mut operands: Vec<Number> = Vec::new();
  for token in postfix {
    match *token {
      Token::Number(number) => operands.push(number),
      Token::Operator(operator) if operator.is_prefix() => {
        let operand = pop_operand(&mut operands)?;
        operands.push(operator.apply_prefix(operand));
      }
      Token::Operator(operator) => {
        let rhs = pop_operand(&mut operands)?;
        let lhs = pop_operand(&mut operands)?;
        operands.push(operator.apply(&lhs, &rhs)?);
      }
      Token::LeftBracket | Token::RightBracket => {
        return Err(CalculatorError::UnmatchedBracket)
      }
    }
  }

  let result = pop_operand(&mut operands)?;
  if !operands.is_empty() {
    return Err(CalculatorError::IncorrectOperatorUsage);
  }
  Ok(result)
}

fn pop_operand(operands: &mut Vec<Number>) -> Result<Number, CalculatorError> {
  operands.pop().ok_or(CalculatorError::IncorrectOperatorUsage)
}
