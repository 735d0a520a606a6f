//! Formula normalization.
//!
//! Rewrites loosely typed input into something the plotting engine's
//! formula parser accepts:
//! - `SIN(X)` -> `sin(x)` (case folding)
//! - `sin（x）` -> `sin(x)` (full-width parentheses)
//! - `ln(x)` -> `log(x)` (one logarithm spelling)
//! - `sin2x` -> `sin(2x)`, `sqrt2.5` -> `sqrt(2.5)` (shorthand calls)
//!
//! This is a best-effort pass over a fixed table of function names, not a
//! tokenizer. Anything it can't repair is left for the engine to reject.
//!
//! Word boundaries are ASCII-only: a non-ASCII letter such as `π` does not
//! glue to the name that follows it, so `πsinx` becomes `πsin(x)`.

use std::sync::LazyLock;

use log::debug;
use regex::{Captures, Regex};

/// Function names that get shorthand expansion, in the order they are applied.
pub const FUNCTION_NAMES: [&str; 10] = [
    "sin", "cos", "tan", "log", "sqrt", "abs", "exp", "asin", "acos", "atan",
];

/// Upper bound on normalization passes. Every pass that changes the string
/// wraps at least one more call, so real input settles in two or three.
const MAX_PASSES: usize = 16;

static LN_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)ln(?-u:\b)").expect("ln pattern is valid"));

/// `name`, optional whitespace, then a bare run of digits, dots and `x`.
static SHORTHAND: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    FUNCTION_NAMES
        .iter()
        .map(|name| {
            let pattern = format!(r"(?-u:\b){}\s*([0-9x.]+)", name);
            let re = Regex::new(&pattern).expect("shorthand pattern is valid");
            (*name, re)
        })
        .collect()
});

/// Normalize a raw formula string.
///
/// Never fails. The result is stable: normalizing it again returns it
/// unchanged. Shorthand nested across two names (`sinsinx`) is not bracketed.
pub fn normalize(raw: &str) -> String {
    let mut current = normalize_pass(raw);

    for _ in 1..MAX_PASSES {
        let next = normalize_pass(&current);
        if next == current {
            break;
        }
        current = next;
    }

    debug!("normalized {:?} -> {:?}", raw, current);
    current
}

/// One run of the four rewrite steps, in order.
fn normalize_pass(input: &str) -> String {
    let lowered = input.to_lowercase();
    let folded = fold_full_width(&lowered);
    let aliased = LN_WORD.replace_all(&folded, "log");
    expand_shorthand(&aliased)
}

fn fold_full_width(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '（' => '(',
            '）' => ')',
            other => other,
        })
        .collect()
}

fn expand_shorthand(input: &str) -> String {
    let mut output = input.to_string();
    for (name, re) in SHORTHAND.iter() {
        let replaced = re.replace_all(&output, |caps: &Captures| {
            format!("{}({})", name, &caps[1])
        });
        output = replaced.into_owned();
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_shorthand_number_and_variable() {
        assert_eq!(normalize("sin2x"), "sin(2x)");
        assert_eq!(normalize("sinx"), "sin(x)");
        assert_eq!(normalize("sqrt2.5"), "sqrt(2.5)");
        assert_eq!(normalize("cos x"), "cos(x)");
    }

    #[test]
    fn test_ln_alias() {
        assert_eq!(normalize("LN(x)"), "log(x)");
        assert_eq!(normalize("ln x + 1"), "log(x) + 1");
        assert_eq!(normalize("lnx"), "lnx");
    }

    #[test]
    fn test_ln_inside_identifier_untouched() {
        assert_eq!(normalize("kiln(x)"), "kiln(x)");
        assert_eq!(normalize("lnq(x)"), "lnq(x)");
    }

    #[test]
    fn test_full_width_parentheses() {
        assert_eq!(normalize("sin（x）"), "sin(x)");
        assert_eq!(normalize("（x+1）^2"), "(x+1)^2");
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(normalize("SIN(X) + Cos(X)"), "sin(x) + cos(x)");
        assert_eq!(normalize("SQRTX"), "sqrt(x)");
    }

    #[test]
    fn test_already_wrapped_untouched() {
        assert_eq!(normalize("sin(x)"), "sin(x)");
        assert_eq!(normalize("sin (x)"), "sin (x)");
        assert_eq!(normalize("sqrt(x^2 + 1)"), "sqrt(x^2 + 1)");
    }

    #[test]
    fn test_inverse_trig_not_split() {
        assert_eq!(normalize("asinx"), "asin(x)");
        assert_eq!(normalize("acos0.5"), "acos(0.5)");
        assert_eq!(normalize("atan(x)"), "atan(x)");
    }

    #[test]
    fn test_repeated_calls_all_wrapped() {
        assert_eq!(normalize("sinxsinx"), "sin(x)sin(x)");
        assert_eq!(normalize("sinx*cosx"), "sin(x)*cos(x)");
    }

    #[test]
    fn test_non_ascii_neighbour_is_a_boundary() {
        assert_eq!(normalize("πsinx"), "πsin(x)");
        assert_eq!(normalize("2πln x"), "2πlog(x)");
        assert_eq!(normalize("2sinx"), "2sinx");
    }

    #[test]
    fn test_nested_shorthand_left_alone() {
        assert_eq!(normalize("sinsinx"), "sinsinx");
    }

    #[test]
    fn test_equations_pass_through() {
        assert_eq!(normalize("X^2 + Y^2 = 9"), "x^2 + y^2 = 9");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "sin2x",
            "sinx",
            "sqrt2.5",
            "LN(x)",
            "sin（x）",
            "x^2 + y^2 = 9",
            "sinxsinx",
            "sinxln",
            "ln x * exp2x",
            "abs x - tan.5",
            "",
            "   ",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input: {:?}", s);
        }
    }

    #[test]
    fn test_function_table_order() {
        assert_eq!(FUNCTION_NAMES[0], "sin");
        assert_eq!(FUNCTION_NAMES.len(), 10);
        assert!(FUNCTION_NAMES.contains(&"log"));
    }
}
