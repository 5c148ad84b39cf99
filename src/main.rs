// SPDX-License-Identifier: MIT
//
// tint — inspect, adjust and harmonize CSS colors from the command line.
//
// This is the binary that wires the two library crates together:
//
//   tint-color  → parsing, conversion, manipulation, CSS output
//   tint-scheme → hue-offset schemes and contrast
//
// Each invocation flows through:
//
//   argv → parse_args → Command → run → Report → stdout + exit code
//
// Exit codes:
//
//   0  success (or `valid` on a valid color)
//   1  a color argument failed to parse (or `valid` on an invalid one)
//   2  usage error: unknown command, missing or non-numeric argument

use std::env;
use std::process;

use thiserror::Error;
use tint_color::{Color, is_valid};
use tint_scheme::{SchemeKind, Schemes, contrast_ratio};

const USAGE: &str = "\
usage: tint [--bytes N] <command> [args...]

commands:
  show <color>                 all representations of a color
  valid <text>                 exit 0 if valid CSS color, 1 otherwise
  scheme <kind> <color>        hex list of a named scheme
  degrees <color> <deg>...     scheme from explicit hue offsets
  blend <color> <color> <t>    linear RGB blend, t = 0 gives the first
  adjust <color> <op> <x>      op: lighten|darken|saturate|desaturate|value|devalue
                               with -amount or -ratio, or shift-hue
  contrast <color> <color>     contrast ratio, 1 to 21

<color> is CSS text, or JSON when it starts with '{' or '['.";

// ─── Errors ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Color(#[from] tint_color::Error),
}

impl CliError {
    const fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 2,
            Self::Color(_) => 1,
        }
    }
}

fn usage(message: impl Into<String>) -> CliError {
    CliError::Usage(message.into())
}

// ─── Adjustments ────────────────────────────────────────────────────────────

/// A single-color manipulation selected by name on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Adjustment {
    LightenAmount,
    LightenRatio,
    DarkenAmount,
    DarkenRatio,
    SaturateAmount,
    SaturateRatio,
    DesaturateAmount,
    DesaturateRatio,
    ValueAmount,
    ValueRatio,
    DevalueAmount,
    DevalueRatio,
    ShiftHue,
}

impl Adjustment {
    fn from_name(name: &str) -> Option<Self> {
        Some(match name.to_lowercase().as_str() {
            "lighten-amount" => Self::LightenAmount,
            "lighten-ratio" => Self::LightenRatio,
            "darken-amount" => Self::DarkenAmount,
            "darken-ratio" => Self::DarkenRatio,
            "saturate-amount" => Self::SaturateAmount,
            "saturate-ratio" => Self::SaturateRatio,
            "desaturate-amount" => Self::DesaturateAmount,
            "desaturate-ratio" => Self::DesaturateRatio,
            "value-amount" => Self::ValueAmount,
            "value-ratio" => Self::ValueRatio,
            "devalue-amount" => Self::DevalueAmount,
            "devalue-ratio" => Self::DevalueRatio,
            "shift-hue" => Self::ShiftHue,
            _ => return None,
        })
    }

    fn apply(self, color: &Color, x: f64) -> Color {
        match self {
            Self::LightenAmount => color.lighten_by_amount(x),
            Self::LightenRatio => color.lighten_by_ratio(x),
            Self::DarkenAmount => color.darken_by_amount(x),
            Self::DarkenRatio => color.darken_by_ratio(x),
            Self::SaturateAmount => color.saturate_by_amount(x),
            Self::SaturateRatio => color.saturate_by_ratio(x),
            Self::DesaturateAmount => color.desaturate_by_amount(x),
            Self::DesaturateRatio => color.desaturate_by_ratio(x),
            Self::ValueAmount => color.value_by_amount(x),
            Self::ValueRatio => color.value_by_ratio(x),
            Self::DevalueAmount => color.devalue_by_amount(x),
            Self::DevalueRatio => color.devalue_by_ratio(x),
            Self::ShiftHue => color.shift_hue(x),
        }
    }
}

// ─── Command parsing ────────────────────────────────────────────────────────

/// A parsed invocation. Color arguments stay as text until `run`, so a bad
/// color is a color error (exit 1) rather than a usage error.
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Show(String),
    Valid(String),
    Scheme { kind: SchemeKind, color: String },
    Degrees { color: String, degrees: Vec<f64> },
    Blend { from: String, to: String, ratio: f64 },
    Adjust { color: String, op: Adjustment, x: f64 },
    Contrast(String, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Options {
    /// Bytes per channel for hex output.
    bytes: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self { bytes: 1 }
    }
}

fn number(text: &str) -> Result<f64, CliError> {
    text.trim()
        .parse()
        .map_err(|_| usage(format!("not a number: {text:?}")))
}

/// Split `--bytes N` out of the arguments (program name already removed),
/// then parse what remains into a [`Command`].
fn parse_args(args: &[String]) -> Result<(Options, Command), CliError> {
    let mut options = Options::default();
    let mut rest: Vec<&str> = Vec::with_capacity(args.len());

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--bytes" {
            let n = iter.next().ok_or_else(|| usage("--bytes needs a value"))?;
            options.bytes = n
                .parse()
                .map_err(|_| usage(format!("--bytes: not a byte count: {n:?}")))?;
        } else if let Some(n) = arg.strip_prefix("--bytes=") {
            options.bytes = n
                .parse()
                .map_err(|_| usage(format!("--bytes: not a byte count: {n:?}")))?;
        } else {
            rest.push(arg);
        }
    }

    let command = match rest.as_slice() {
        ["show", color] => Command::Show((*color).to_owned()),
        ["valid", text] => Command::Valid((*text).to_owned()),
        ["scheme", kind, color] => Command::Scheme {
            kind: SchemeKind::from_name(kind)
                .ok_or_else(|| usage(format!("unknown scheme: {kind:?}")))?,
            color: (*color).to_owned(),
        },
        ["degrees", color, degrees @ ..] if !degrees.is_empty() => Command::Degrees {
            color: (*color).to_owned(),
            degrees: degrees.iter().map(|d| number(d)).collect::<Result<_, _>>()?,
        },
        ["blend", from, to, ratio] => Command::Blend {
            from: (*from).to_owned(),
            to: (*to).to_owned(),
            ratio: number(ratio)?,
        },
        ["adjust", color, op, x] => Command::Adjust {
            color: (*color).to_owned(),
            op: Adjustment::from_name(op)
                .ok_or_else(|| usage(format!("unknown adjustment: {op:?}")))?,
            x: number(x)?,
        },
        ["contrast", a, b] => Command::Contrast((*a).to_owned(), (*b).to_owned()),
        [] => return Err(usage("missing command")),
        [name, ..] => return Err(usage(format!("unknown command or wrong arguments: {name}"))),
    };

    Ok((options, command))
}

// ─── Execution ──────────────────────────────────────────────────────────────

/// What to print and how to exit.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Report {
    text: String,
    code: i32,
}

impl Report {
    const fn ok(text: String) -> Self {
        Self { text, code: 0 }
    }
}

/// Parse a color argument: JSON when it opens with `{` or `[`, CSS otherwise.
fn read_color(text: &str) -> tint_color::Result<Color> {
    let trimmed = text.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        let mut json = serde_json::Deserializer::from_str(trimmed);
        let color = tint_color::from_deserializer(&mut json)?;
        json.end().map_err(|e| {
            log::debug!("trailing input after JSON color {trimmed:?}: {e}");
            tint_color::Error::InvalidColorFormat(trimmed.to_owned())
        })?;
        Ok(color)
    } else {
        text.parse()
    }
}

fn hex_lines(colors: &[Color], bytes: u32) -> String {
    colors
        .iter()
        .map(|c| c.to_css(bytes))
        .collect::<Vec<_>>()
        .join("\n")
}

fn show(color: &Color, bytes: u32) -> String {
    let hsv = color.as_hsv();
    format!(
        "hex        {hex}\n\
         css        {color}\n\
         rgb        {rgb}\n\
         hsv        {h:.3} {s:.3} {v:.3}\n\
         hsl        {hsl}\n\
         alpha      {alpha}\n\
         luminance  {luminance:.4}",
        hex = color.to_css(bytes),
        rgb = color.to_rgb(),
        h = hsv.hue,
        s = hsv.saturation,
        v = hsv.value,
        hsl = color.to_hsl(),
        alpha = color.alpha(),
        luminance = color.luminance(),
    )
}

fn run(command: &Command, options: Options) -> Result<Report, CliError> {
    let bytes = options.bytes;
    let report = match command {
        Command::Show(text) => Report::ok(show(&read_color(text)?, bytes)),
        Command::Valid(text) => {
            let valid = is_valid(text);
            Report {
                text: if valid { "valid" } else { "invalid" }.to_owned(),
                code: i32::from(!valid),
            }
        }
        Command::Scheme { kind, color } => {
            Report::ok(hex_lines(&read_color(color)?.scheme(*kind), bytes))
        }
        Command::Degrees { color, degrees } => {
            Report::ok(hex_lines(&read_color(color)?.scheme_from_degrees(degrees), bytes))
        }
        Command::Blend { from, to, ratio } => {
            let blended = read_color(from)?.blend(&read_color(to)?, *ratio);
            Report::ok(blended.to_css(bytes))
        }
        Command::Adjust { color, op, x } => {
            Report::ok(op.apply(&read_color(color)?, *x).to_css(bytes))
        }
        Command::Contrast(a, b) => {
            let ratio = contrast_ratio(&read_color(a)?, &read_color(b)?);
            Report::ok(format!("{ratio:.2}"))
        }
    };
    Ok(report)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().skip(1).collect();

    let result = parse_args(&args).and_then(|(options, command)| run(&command, options));
    match result {
        Ok(report) => {
            println!("{}", report.text);
            process::exit(report.code);
        }
        Err(e @ CliError::Usage(_)) => {
            eprintln!("tint: {e}\n\n{USAGE}");
            process::exit(e.exit_code());
        }
        Err(e) => {
            eprintln!("tint: {e}");
            process::exit(e.exit_code());
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Helpers ───────────────────────────────────────────────────────────

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_owned).collect()
    }

    fn exec(line: &str) -> Result<Report, CliError> {
        let (options, command) = parse_args(&args(line))?;
        run(&command, options)
    }

    fn output(line: &str) -> String {
        exec(line).unwrap().text
    }

    // ── Parsing ───────────────────────────────────────────────────────────

    #[test]
    fn parse_scheme_command() {
        let (options, command) = parse_args(&args("scheme Triadic red")).unwrap();
        assert_eq!(options, Options::default());
        assert_eq!(
            command,
            Command::Scheme {
                kind: SchemeKind::Triadic,
                color: "red".to_owned(),
            }
        );
    }

    #[test]
    fn bytes_flag_anywhere() {
        let (options, _) = parse_args(&args("show --bytes 2 red")).unwrap();
        assert_eq!(options.bytes, 2);
        let (options, _) = parse_args(&args("--bytes=3 show red")).unwrap();
        assert_eq!(options.bytes, 3);
    }

    #[test]
    fn usage_errors_exit_2() {
        for line in ["", "paint red", "scheme pentagram red", "blend red blue half", "degrees red", "--bytes"] {
            let err = parse_args(&args(line)).unwrap_err();
            assert!(matches!(err, CliError::Usage(_)), "{line:?}");
            assert_eq!(err.exit_code(), 2);
        }
    }

    #[test]
    fn adjustment_names() {
        assert_eq!(Adjustment::from_name("lighten-ratio"), Some(Adjustment::LightenRatio));
        assert_eq!(Adjustment::from_name("Shift-Hue"), Some(Adjustment::ShiftHue));
        assert_eq!(Adjustment::from_name("lighten"), None);
    }

    // ── Running ───────────────────────────────────────────────────────────

    #[test]
    fn complementary_scheme_of_red() {
        assert_eq!(output("scheme complementary red"), "#FF0000\n#00FFFF");
    }

    #[test]
    fn degrees_scheme() {
        assert_eq!(output("degrees #f00 120 240"), "#00FF00\n#0000FF");
    }

    #[test]
    fn blend_endpoints() {
        assert_eq!(output("blend red blue 0"), "#FF0000");
        assert_eq!(output("blend red blue 1"), "#0000FF");
    }

    #[test]
    fn adjust_applies_operation() {
        assert_eq!(output("adjust #f00 shift-hue 180"), "#00FFFF");
        assert_eq!(output("adjust #000 lighten-amount 1"), "#FFFFFF");
    }

    #[test]
    fn saturating_an_hsl_gray_keeps_its_hue() {
        assert_eq!(output("adjust hsl(200,0%,50%) saturate-amount 0.5"), "#4095BF");
    }

    #[test]
    fn bytes_widen_hex() {
        assert_eq!(output("--bytes 2 adjust white darken-amount 1"), "#000000000000");
    }

    #[test]
    fn contrast_black_white() {
        assert_eq!(output("contrast black white"), "21.00");
    }

    #[test]
    fn valid_sets_exit_code() {
        assert_eq!(exec("valid #abc").unwrap().code, 0);
        let report = exec("valid #abcd").unwrap();
        assert_eq!(report.code, 1);
        assert_eq!(report.text, "invalid");
    }

    #[test]
    fn show_lists_representations() {
        let text = output("show rgb(255,0,0)");
        assert!(text.starts_with("hex        #FF0000\n"), "{text}");
        assert!(text.contains("hsl        hsl(0, 100%, 50%)"), "{text}");
        assert!(text.ends_with("luminance  0.2126"), "{text}");
    }

    #[test]
    fn json_color_arguments() {
        assert_eq!(output(r#"adjust {"hue":0,"saturation":1,"value":1} shift-hue 120"#), "#00FF00");
        assert_eq!(output("blend [1,0,0] [0,0,1,1] 0.5"), "#800080");
    }

    #[test]
    fn bad_color_exits_1() {
        let err = exec("show #ggg").unwrap_err();
        assert!(matches!(err, CliError::Color(_)));
        assert_eq!(err.exit_code(), 1);
        assert!(matches!(exec("show {\"hue\":1}"), Err(CliError::Color(_))));
        assert!(matches!(exec("show [1,0,0]x"), Err(CliError::Color(_))));
    }
}
