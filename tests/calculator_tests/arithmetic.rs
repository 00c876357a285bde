use super::*;

mod arithmetic {
  use super::*;

  mod integer {
    use super::*;

    #[test]
    fn addition() {
      assert_eq!(interpret("1 + 2").unwrap(), "3");
      assert_eq!(interpret("1 + 2 + 3").unwrap(), "6");
      assert_eq!(interpret("(1 + 2) + 3").unwrap(), "6");
    }

    #[test]
    fn subtraction() {
      assert_eq!(interpret("3 - 1").unwrap(), "2");
      assert_eq!(interpret("7 - 3 - 1").unwrap(), "3");
      assert_eq!(interpret("1 - 5").unwrap(), "-4");
    }

    #[test]
    fn precedence() {
      assert_eq!(interpret("2 * 3 + 4 * 5").unwrap(), "26");
      assert_eq!(interpret("(1 + 2) * 3").unwrap(), "9");
      assert_eq!(interpret("10 - 4 / 2").unwrap(), "8");
    }

    #[test]
    fn unary_signs() {
      assert_eq!(interpret("-1 + 3").unwrap(), "2");
      assert_eq!(interpret("2 * -3").unwrap(), "-6");
      assert_eq!(interpret("--2").unwrap(), "2");
      assert_eq!(interpret("+5").unwrap(), "5");
      assert_eq!(interpret("-(2 + 3)").unwrap(), "-5");
    }

    #[test]
    fn division() {
      assert_eq!(interpret("10 / 2").unwrap(), "5");
      assert_eq!(interpret("10 / 3").unwrap(), "3+1/3");
      assert_eq!(interpret("-10 / 4").unwrap(), "-3+1/2");
    }
  }

  mod fraction {
    use super::*;

    #[test]
    fn addition_and_subtraction() {
      assert_eq!(interpret("1/2 + 1/3").unwrap(), "0+5/6");
      assert_eq!(interpret("1/3 - 1/2").unwrap(), "-1+5/6");
      assert_eq!(interpret("1/2 + 1/2").unwrap(), "1");
    }

    #[test]
    fn decimals_stay_exact() {
      assert_eq!(interpret("0.1 + 0.2").unwrap(), "0+3/10");
      assert_eq!(interpret("0.5 * 0.5").unwrap(), "0+1/4");
      assert_eq!(interpret("1,5 + 1").unwrap(), "2+1/2");
    }

    #[test]
    fn multiplication_and_division() {
      assert_eq!(interpret("3 * (1/3)").unwrap(), "1");
      assert_eq!(interpret("1.5 / 0.5").unwrap(), "3");
      assert_eq!(interpret("(2/3) / (4/9)").unwrap(), "1+1/2");
      assert_eq!(interpret("-0.5 * 3").unwrap(), "-2+1/2");
    }

    #[test]
    fn negative_fractions_carry_the_sign_in_the_integer() {
      assert_eq!(interpret("-0.5").unwrap(), "-1+1/2");
      assert_eq!(interpret("-0.25").unwrap(), "-1+3/4");
      assert_eq!(
        evaluate("-0.25").unwrap(),
        Number::Fraction(Fraction::new(-1, 3, 4).unwrap())
      );
    }
  }

  mod overflow {
    use super::*;

    fn double(input: &str) -> f64 {
      match evaluate(input).unwrap() {
        Number::Double(value) => value,
        other => panic!("expected a double for {}, got {:?}", input, other),
      }
    }

    #[test]
    fn integer_overflow_becomes_double() {
      assert_eq!(double("9223372036854775807 + 1"), 9.223372036854775808e18);
      assert_eq!(
        double("9223372036854775807 * 9223372036854775807"),
        9223372036854775807.0 * 9223372036854775807.0
      );
      assert_eq!(double("-9223372036854775807 - 2"), -9.223372036854775808e18);
    }

    #[test]
    fn fraction_overflow_becomes_double() {
      let value = double("(1/3037000499) * (1/3037000501) * (1/7)");
      let expected = 1.0 / 3037000499.0 / 3037000501.0 / 7.0;
      assert!((value - expected).abs() < 1e-30);
    }

    #[test]
    fn doubles_absorb_exact_values() {
      assert_eq!(double("100000000000000000000 + 0.5"), 1e20);
      assert_eq!(
        interpret("100000000000000000000 * 2").unwrap(),
        "200000000000000000000"
      );
    }
  }
}
