// SPDX-License-Identifier: MIT
//
// CSS color grammar — classifies text into a tagged syntax tree.
//
// Validity here is purely syntactic. `rgb(-100, 300, +137)` is a valid
// color even though its channels are far outside 0–255; range handling
// belongs to the parser and the manipulation operations, not to the
// grammar.
//
// Accepted shapes (ASCII case-insensitive):
//
//   #rgb  #rrggbb
//   rgb(I, I, I)        rgba(I, I, I, N)       I = integer
//   rgb(P, P, P)        rgba(P, P, P, N)       P = number%
//   hsl(N, P, P)        hsla(N, P, P, N)       N = number
//   <keyword>           transparent
//
// Channel lists never mix integers and percentages, and no whitespace is
// allowed between a number and its `%`.

use std::sync::LazyLock;

use regex::Regex;

use crate::named;

static HEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#([0-9a-f]{3}|[0-9a-f]{6})$").expect("hex pattern is valid")
});

static FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([a-z]+)\(([^()]*)\)$").expect("function pattern is valid")
});

static ARGUMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+))(%)?$")
        .expect("argument pattern is valid")
});

/// How the three channels of an `rgb()`/`rgba()` function were written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelUnit {
    /// Plain integers, nominally 0–255.
    Integer,
    /// Percentages, nominally 0–100.
    Percentage,
}

/// A classified CSS color string.
///
/// Numbers are carried exactly as written: percentages are still in
/// 0–100 form and integer channels in 0–255 form. Scaling into the
/// engine's 0.0–1.0 ranges is the parser's job.
#[derive(Debug, Clone, PartialEq)]
pub enum Syntax<'a> {
    /// `#rgb` or `#rrggbb`; holds the hex digits without the `#`.
    Hex(&'a str),

    /// `rgb()` or `rgba()`.
    Rgb {
        channels: [f64; 3],
        unit: ChannelUnit,
        alpha: Option<f64>,
    },

    /// `hsl()` or `hsla()`; saturation and lightness are percentages.
    Hsl {
        hue: f64,
        saturation: f64,
        lightness: f64,
        alpha: Option<f64>,
    },

    /// A color keyword, resolved to 8-bit RGBA.
    Named((u8, u8, u8, u8)),

    /// Anything else.
    Invalid,
}

impl Syntax<'_> {
    /// Whether the text was a legal CSS color.
    #[inline]
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

/// One comma-separated function argument.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Argument {
    Integer(f64),
    Decimal(f64),
    Percent(f64),
}

impl Argument {
    /// The value if this is a bare number (integer or decimal).
    const fn number(self) -> Option<f64> {
        match self {
            Self::Integer(v) | Self::Decimal(v) => Some(v),
            Self::Percent(_) => None,
        }
    }

    const fn percent(self) -> Option<f64> {
        match self {
            Self::Percent(v) => Some(v),
            Self::Integer(_) | Self::Decimal(_) => None,
        }
    }
}

/// Classify `text` as one of the accepted CSS color shapes.
///
/// Leading and trailing whitespace is ignored.
#[must_use]
pub fn classify(text: &str) -> Syntax<'_> {
    let text = text.trim();
    let syntax = classify_trimmed(text).unwrap_or(Syntax::Invalid);
    log::trace!("classified {text:?} as {syntax:?}");
    syntax
}

/// Whether `text` is syntactically a legal CSS color.
#[must_use]
pub fn is_valid(text: &str) -> bool {
    classify(text).is_valid()
}

fn classify_trimmed(text: &str) -> Option<Syntax<'_>> {
    if let Some(caps) = HEX.captures(text) {
        return caps.get(1).map(|digits| Syntax::Hex(digits.as_str()));
    }
    if let Some(caps) = FUNCTION.captures(text) {
        return function(&caps[1], &caps[2]);
    }
    named::lookup(text).map(Syntax::Named)
}

fn function<'a>(name: &str, body: &str) -> Option<Syntax<'a>> {
    let args = body.split(',').map(argument).collect::<Option<Vec<_>>>()?;
    match name.to_ascii_lowercase().as_str() {
        "rgb" => rgb(&args, false),
        "rgba" => rgb(&args, true),
        "hsl" => hsl(&args, false),
        "hsla" => hsl(&args, true),
        _ => None,
    }
}

fn argument(raw: &str) -> Option<Argument> {
    let raw = raw.trim();
    let caps = ARGUMENT.captures(raw)?;
    let number = &caps[1];
    let value: f64 = number.parse().ok()?;
    Some(if caps.get(2).is_some() {
        Argument::Percent(value)
    } else if number.contains('.') {
        Argument::Decimal(value)
    } else {
        Argument::Integer(value)
    })
}

/// Split a function's arguments into three channels and the optional
/// alpha slot. The `a` suffix makes alpha mandatory; its absence forbids it.
fn split_alpha(args: &[Argument], with_alpha: bool) -> Option<([Argument; 3], Option<f64>)> {
    match (args, with_alpha) {
        ([a, b, c], false) => Some(([*a, *b, *c], None)),
        ([a, b, c, alpha], true) => Some(([*a, *b, *c], Some(alpha.number()?))),
        _ => None,
    }
}

fn rgb<'a>(args: &[Argument], with_alpha: bool) -> Option<Syntax<'a>> {
    let (channels, alpha) = split_alpha(args, with_alpha)?;
    let unit = match channels[0] {
        Argument::Integer(_) => ChannelUnit::Integer,
        Argument::Percent(_) => ChannelUnit::Percentage,
        Argument::Decimal(_) => return None,
    };
    let value = |arg: Argument| match (unit, arg) {
        (ChannelUnit::Integer, Argument::Integer(v))
        | (ChannelUnit::Percentage, Argument::Percent(v)) => Some(v),
        _ => None,
    };
    Some(Syntax::Rgb {
        channels: [value(channels[0])?, value(channels[1])?, value(channels[2])?],
        unit,
        alpha,
    })
}

fn hsl<'a>(args: &[Argument], with_alpha: bool) -> Option<Syntax<'a>> {
    let ([hue, saturation, lightness], alpha) = split_alpha(args, with_alpha)?;
    Some(Syntax::Hsl {
        hue: hue.number()?,
        saturation: saturation.percent()?,
        lightness: lightness.percent()?,
        alpha,
    })
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Truth table ──────────────────────────────────────────────────────

    #[test]
    fn validity_truth_table() {
        let table: [(&str, bool); 25] = [
            ("rgb(55, 111, 222)", true),
            ("rgb(2.2, 3.3, 127.3 )", false),
            ("rgb(1, 2, 3, 4)", false),
            ("rgb(aa, 22, 44)", false),
            ("rgb(-100, 300, +137)", true),
            ("rgb(100%, 50%, 30%)", true),
            ("rgb(88.8%, +111%, -30%)", true),
            ("rgb(2 %, 2%, 2%)", false),
            ("rgb(33%, 22%, 11)", false),
            ("rgba(42, 24, 42, 0)", true),
            ("rgba(42, 24, 42, 1)", true),
            ("rgba(42, 24, 42, 2)", true),
            ("rgba(1, 2, 3)", false),
            ("rgba(11, 22, 33, -.5)", true),
            ("rgba(33%, 50%, )", false),
            ("#f00", true),
            ("f00", false),
            ("#00AA00", true),
            ("#00aAAA999", false),
            ("hsl(300.3, 100%, 50%)", true),
            ("hsl(-300.3, 110%, -50%)", true),
            ("hsla(-300.3, 110%, -50%)", false),
            ("hsla(-300.3, 110%, -50%, 3)", true),
            ("seagreen", true),
            ("transparent", true),
        ];
        for (text, expected) in table {
            assert_eq!(is_valid(text), expected, "is_valid({text:?})");
        }
    }

    #[test]
    fn function_names_are_case_insensitive() {
        assert!(is_valid("RGB(1, 2, 3)"));
        assert!(is_valid("Hsla(10, 20%, 30%, .5)"));
        assert!(is_valid("#ABCDEF"));
        assert!(is_valid("DarkSeaGreen"));
    }

    #[test]
    fn hex_digit_counts_other_than_three_or_six_are_invalid() {
        for text in ["#", "#f", "#ff", "#ffff", "#fffff", "#fffffff", "#ffffffff"] {
            assert!(!is_valid(text), "{text:?} should be invalid");
        }
        assert!(!is_valid("#ggg"));
    }

    #[test]
    fn hsl_requires_bare_hue_and_percent_channels() {
        assert!(!is_valid("hsl(10%, 20%, 30%)"));
        assert!(!is_valid("hsl(10, 20, 30%)"));
        assert!(!is_valid("hsl(10, 20%, 30)"));
        assert!(is_valid("hsl(+10, 20.5%, .5%)"));
    }

    #[test]
    fn alpha_must_be_a_bare_number() {
        assert!(!is_valid("rgba(1, 2, 3, 50%)"));
        assert!(!is_valid("hsla(1, 2%, 3%, 4%)"));
        assert!(is_valid("rgba(1%, 2%, 3%, 0.25)"));
    }

    #[test]
    fn unknown_functions_and_garbage_are_invalid() {
        assert!(!is_valid("rgbx(1, 2, 3)"));
        assert!(!is_valid("hwb(1, 2%, 3%)"));
        assert!(!is_valid("rgb(1, 2, 3"));
        assert!(!is_valid("rgb(1,, 2, 3)"));
        assert!(!is_valid(""));
        assert!(!is_valid("   "));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(is_valid("  #f00  "));
        assert!(is_valid("\trgb( 0% , 9%, 16% )\n"));
    }

    // ── Classification ───────────────────────────────────────────────────

    #[test]
    fn classify_hex_keeps_digits() {
        assert_eq!(classify("#f0f000"), Syntax::Hex("f0f000"));
    }

    #[test]
    fn classify_rgb_integers() {
        assert_eq!(
            classify("rgb(-100, 300, +137)"),
            Syntax::Rgb {
                channels: [-100.0, 300.0, 137.0],
                unit: ChannelUnit::Integer,
                alpha: None,
            }
        );
    }

    #[test]
    fn classify_rgba_percentages() {
        assert_eq!(
            classify("rgba(0%,9%,16%,-.42)"),
            Syntax::Rgb {
                channels: [0.0, 9.0, 16.0],
                unit: ChannelUnit::Percentage,
                alpha: Some(-0.42),
            }
        );
    }

    #[test]
    fn classify_hsla_keeps_raw_hue() {
        assert_eq!(
            classify("hsla(563, 50%, 40%, 2)"),
            Syntax::Hsl {
                hue: 563.0,
                saturation: 50.0,
                lightness: 40.0,
                alpha: Some(2.0),
            }
        );
    }

    #[test]
    fn classify_keyword() {
        assert_eq!(classify("seagreen"), Syntax::Named((46, 139, 87, 255)));
        assert_eq!(classify("nonsense"), Syntax::Invalid);
    }
}
