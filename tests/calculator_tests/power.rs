use super::*;

mod power {
  use super::*;

  fn simple(numerator: i64, denominator: i64) -> SimpleFraction {
    SimpleFraction::new(numerator, denominator).unwrap()
  }

  fn approximately(input: &str, expected: f64) {
    match evaluate(input).unwrap() {
      Number::Double(value) => assert!(
        (value - expected).abs() < 1e-12,
        "{} = {}, expected {}",
        input,
        value,
        expected
      ),
      other => panic!("expected a double for {}, got {:?}", input, other),
    }
  }

  mod integer_exponents {
    use super::*;

    #[test]
    fn exact_results() {
      assert_eq!(interpret("2^10").unwrap(), "1024");
      assert_eq!(interpret("(-3)^3").unwrap(), "-27");
      assert_eq!(interpret("2^-1").unwrap(), "0+1/2");
      assert_eq!(interpret("(2/3)^-2").unwrap(), "2+1/4");
      assert_eq!(interpret("2.5^2").unwrap(), "6+1/4");
    }

    #[test]
    fn precedence_and_associativity() {
      assert_eq!(interpret("-2^2").unwrap(), "-4");
      assert_eq!(interpret("(-2)^2").unwrap(), "4");
      assert_eq!(interpret("2^3^2").unwrap(), "512");
      assert_eq!(interpret("2 * 3^2").unwrap(), "18");
    }

    #[test]
    fn overflow_stays_symbolic() {
      assert_eq!(interpret("10^30").unwrap(), "(1+0/1)*(10/1)^(30/1)");
      assert_eq!(
        evaluate("10^30").unwrap(),
        Number::Power(Power::unsimplified(simple(10, 1), simple(30, 1)))
      );
      assert_eq!(interpret("(3/2)^200").unwrap(), "(1+0/1)*(3/2)^(200/1)");
    }

    #[test]
    fn binomial_series_keeps_large_powers_exact() {
      assert_eq!(
        interpret("(1000000 + 1/3)^3").unwrap(),
        "1000001000333333+10/27"
      );
    }
  }

  mod roots {
    use super::*;

    #[test]
    fn perfect_roots() {
      assert_eq!(interpret("8^(1/3)").unwrap(), "2");
      assert_eq!(interpret("(-8)^(1/3)").unwrap(), "-2");
      assert_eq!(interpret("4^(3/2)").unwrap(), "8");
      assert_eq!(interpret("27^(2/3)").unwrap(), "9");
      assert_eq!(interpret("(-27)^(2/3)").unwrap(), "9");
      assert_eq!(interpret("16^(1/4)").unwrap(), "2");
      assert_eq!(interpret("4^(-1/2)").unwrap(), "0+1/2");
      assert_eq!(interpret("(1/8)^(1/3)").unwrap(), "0+1/2");
    }

    #[test]
    fn surds() {
      assert_eq!(
        evaluate("2^(1/2)").unwrap(),
        Number::Power(Power::unsimplified(simple(2, 1), simple(1, 2)))
      );
      assert_eq!(interpret("2^0.5").unwrap(), "(1+0/1)*(2/1)^(1/2)");
      assert_eq!(interpret("2^(1/2)^2").unwrap(), "(1+0/1)*(2/1)^(1/4)");
    }

    #[test]
    fn surds_are_simplified() {
      assert_eq!(interpret("72^(1/2)").unwrap(), "(6+0/1)*(2/1)^(1/2)");
      assert_eq!(interpret("(-16)^(1/3)").unwrap(), "(-2+0/1)*(2/1)^(1/3)");
      assert_eq!(interpret("(1/2)^(1/2)").unwrap(), "(0+1/2)*(2/1)^(1/2)");
      assert_eq!(interpret("(1/4)^(1/3)").unwrap(), "(0+1/2)*(2/1)^(1/3)");
      assert_eq!(
        evaluate("72^(1/2)").unwrap(),
        Number::Power(Power::new(
          Fraction::from(CheckedInt::new(6)),
          simple(2, 1),
          simple(1, 2)
        ))
      );
    }
  }

  mod surd_arithmetic {
    use super::*;

    #[test]
    fn like_terms() {
      assert_eq!(
        interpret("3^(1/2) + 3^(1/2)").unwrap(),
        "(2+0/1)*(3/1)^(1/2)"
      );
      assert_eq!(
        interpret("8^(1/2) + 2^(1/2)").unwrap(),
        "(3+0/1)*(2/1)^(1/2)"
      );
      assert_eq!(interpret("2^(1/2) - 2^(1/2)").unwrap(), "0");
    }

    #[test]
    fn products() {
      assert_eq!(interpret("2^(1/2) * 2^(1/2)").unwrap(), "2");
      assert_eq!(interpret("2^(1/2) * 8^(1/2)").unwrap(), "4");
      assert_eq!(interpret("3^(1/2) * 12^(1/2)").unwrap(), "6");
      assert_eq!(
        interpret("2^(1/3) * 2^(1/3)").unwrap(),
        "(1+0/1)*(4/1)^(1/3)"
      );
      assert_eq!(
        interpret("2^(1/2) * 3^(1/2)").unwrap(),
        "(1+0/1)*(6/1)^(1/2)"
      );
    }

    #[test]
    fn everything_else_is_approximated() {
      approximately("2^(1/2) + 3^(1/2)", 2f64.sqrt() + 3f64.sqrt());
      approximately("2^(1/2) * 2", 2.0 * 2f64.sqrt());
      approximately("2^(1/2) / 2^(1/2)", 1.0);
      approximately("(2^(1/2))^2", 2.0);
      approximately("(-8)^(1/3) * 0.5 + 2^(1/3)", -1.0 + 2f64.cbrt());
    }
  }
}
