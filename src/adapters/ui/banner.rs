//! Welcome banner: figlet "OUTREACH" shaded top to bottom, then the version
//! and a one-line greeting.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

type Rgb = (u8, u8, u8);

/// Ink blue (#1f6feb).
const INK_BLUE: Rgb = (0x1f, 0x6f, 0xeb);
/// Mint (#3fd9a6).
const MINT: Rgb = (0x3f, 0xd9, 0xa6);

const GREETING: &str =
    "Welcome to the cold emailing automation tool! Enter a LinkedIn URL to get started.";

fn mix(from: u8, to: u8, t: f64) -> u8 {
    (f64::from(from) + (f64::from(to) - f64::from(from)) * t).round() as u8
}

/// Pairs every line of `text` with its colour; the first line gets `from`,
/// the last gets `to`. A single line is drawn in `to`.
fn gradient(text: &str, from: Rgb, to: Rgb) -> Vec<(&str, Rgb)> {
    let lines: Vec<&str> = text.lines().collect();
    let steps = lines.len().saturating_sub(1);
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let t = if steps == 0 {
                1.0
            } else {
                i as f64 / steps as f64
            };
            (line, (mix(from.0, to.0, t), mix(from.1, to.1, t), mix(from.2, to.2, t)))
        })
        .collect()
}

fn banner_art() -> Option<String> {
    let font = FIGfont::standard().ok()?;
    let figure = font.convert("OUTREACH")?;
    Some(figure.to_string())
}

fn print_colored(out: &mut impl Write, text: &str, (r, g, b): Rgb) {
    let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
    let _ = out.execute(Print(text));
    let _ = out.execute(Print("\r\n"));
    let _ = out.execute(ResetColor);
}

pub fn print_welcome() {
    let mut out = stdout();
    let art = banner_art().unwrap_or_else(|| "OUTREACH".to_string());
    for (line, color) in gradient(&art, INK_BLUE, MINT) {
        print_colored(&mut out, line, color);
    }
    print_colored(&mut out, &format!("v{}", env!("CARGO_PKG_VERSION")), MINT);
    print_colored(&mut out, GREETING, MINT);
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_runs_from_first_to_last_colour() {
        let shaded = gradient("a\nb\nc", INK_BLUE, MINT);
        let lines: Vec<&str> = shaded.iter().map(|(l, _)| *l).collect();
        assert_eq!(lines, vec!["a", "b", "c"]);
        assert_eq!(shaded[0].1, INK_BLUE);
        assert_eq!(shaded[1].1, (0x2f, 0xa4, 0xc9));
        assert_eq!(shaded[2].1, MINT);
    }

    #[test]
    fn test_single_line_uses_end_colour() {
        assert_eq!(gradient("OUTREACH", INK_BLUE, MINT), vec![("OUTREACH", MINT)]);
        assert!(gradient("", INK_BLUE, MINT).is_empty());
    }
}
