//! Parsing of the embedded TOML theme documents.

use anyhow::{Context, Result, anyhow, bail, ensure};
use include_dir::Dir;
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::style::theme::types::{Theme, ThemeRegistration};

pub(in crate::style::theme) struct BuiltinThemes {
	pub registrations: Vec<ThemeRegistration>,
	pub default_name: String,
	pub default_theme: Theme,
}

/// One theme file as written on disk.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: StyleTable,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StyleTable {
	header: StyleEntry,
	row_highlight: StyleEntry,
	prompt: StyleEntry,
	empty: StyleEntry,
	muted: StyleEntry,
	favorite: StyleEntry,
	error: StyleEntry,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StyleEntry {
	fg: Option<String>,
	bg: Option<String>,
	modifiers: Vec<String>,
}

struct ParsedTheme {
	registration: ThemeRegistration,
	is_default: bool,
}

const NAMED_COLOURS: &[(&str, Color)] = &[
	("reset", Color::Reset),
	("black", Color::Black),
	("red", Color::Red),
	("green", Color::Green),
	("yellow", Color::Yellow),
	("blue", Color::Blue),
	("magenta", Color::Magenta),
	("cyan", Color::Cyan),
	("gray", Color::Gray),
	("grey", Color::Gray),
	("darkgray", Color::DarkGray),
	("darkgrey", Color::DarkGray),
	("lightred", Color::LightRed),
	("lightgreen", Color::LightGreen),
	("lightyellow", Color::LightYellow),
	("lightblue", Color::LightBlue),
	("lightmagenta", Color::LightMagenta),
	("lightcyan", Color::LightCyan),
	("white", Color::White),
];

const MODIFIERS: &[(&str, Modifier)] = &[
	("bold", Modifier::BOLD),
	("dim", Modifier::DIM),
	("italic", Modifier::ITALIC),
	("underline", Modifier::UNDERLINED),
	("underlined", Modifier::UNDERLINED),
	("reversed", Modifier::REVERSED),
	("crossedout", Modifier::CROSSED_OUT),
];

pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut files: Vec<_> = dir.files().collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let mut parsed = Vec::with_capacity(files.len());
	for file in files {
		let origin = file.path().display().to_string();
		let contents = file
			.contents_utf8()
			.with_context(|| format!("{origin} is not valid UTF-8"))?;
		parsed.push(parse_theme_str(contents, &origin)?);
	}
	build_catalog(parsed)
}

fn build_catalog(parsed: Vec<ParsedTheme>) -> Result<BuiltinThemes> {
	let mut registrations: Vec<ThemeRegistration> = Vec::with_capacity(parsed.len());
	let mut default_name: Option<String> = None;

	for theme in parsed {
		let name = &theme.registration.name;
		ensure!(
			registrations.iter().all(|existing| &existing.name != name),
			"duplicate built-in theme `{name}`"
		);
		if theme.is_default {
			if let Some(previous) = &default_name {
				bail!("built-in themes `{previous}` and `{name}` are both marked as default");
			}
			default_name = Some(name.clone());
		}
		registrations.push(theme.registration);
	}

	let default_name = default_name
		.or_else(|| registrations.first().map(|first| first.name.clone()))
		.ok_or_else(|| anyhow!("no built-in theme definitions were found"))?;
	let default_theme = registrations
		.iter()
		.find(|registration| registration.name == default_name)
		.map(|registration| registration.theme)
		.ok_or_else(|| anyhow!("default theme `{default_name}` is not registered"))?;

	Ok(BuiltinThemes {
		registrations,
		default_name,
		default_theme,
	})
}

fn parse_theme_str(contents: &str, origin: &str) -> Result<ParsedTheme> {
	let file: ThemeFile =
		toml::from_str(contents).with_context(|| format!("failed to parse theme {origin}"))?;

	let styles = file.styles;
	let entries = [
		("header", styles.header),
		("row_highlight", styles.row_highlight),
		("prompt", styles.prompt),
		("empty", styles.empty),
		("muted", styles.muted),
		("favorite", styles.favorite),
		("error", styles.error),
	];
	let mut resolved = [Style::new(); 7];
	for (slot, (key, entry)) in resolved.iter_mut().zip(entries) {
		*slot = entry
			.to_style()
			.with_context(|| format!("{origin}: styles.{key}"))?;
	}
	let [header, row_highlight, prompt, empty, muted, favorite, error] = resolved;
	let theme = Theme {
		header,
		row_highlight,
		prompt,
		empty,
		muted,
		favorite,
		error,
	};

	let mut registration = ThemeRegistration::new(file.name, theme);
	for alias in file.aliases {
		let alias = alias.trim();
		if !alias.is_empty() {
			registration = registration.alias(alias.to_string());
		}
	}

	Ok(ParsedTheme {
		registration,
		is_default: file.default,
	})
}

impl StyleEntry {
	fn to_style(&self) -> Result<Style> {
		let mut style = Style::new();
		if let Some(fg) = &self.fg {
			style = style.fg(parse_colour(fg).context("foreground")?);
		}
		if let Some(bg) = &self.bg {
			style = style.bg(parse_colour(bg).context("background")?);
		}
		for name in &self.modifiers {
			let key = squash(name);
			let modifier = MODIFIERS
				.iter()
				.find(|(candidate, _)| *candidate == key)
				.map(|(_, modifier)| *modifier)
				.ok_or_else(|| anyhow!("unknown modifier `{name}`"))?;
			style = style.add_modifier(modifier);
		}
		Ok(style)
	}
}

/// Accepts `#rgb`, `#rrggbb`, a 256-colour index, or a named ANSI colour.
fn parse_colour(input: &str) -> Result<Color> {
	let value = input.trim();

	if let Some(hex) = value.strip_prefix('#') {
		let digits: Vec<u8> = match hex.len() {
			3 => hex.bytes().flat_map(|digit| [digit, digit]).collect(),
			6 => hex.bytes().collect(),
			_ => bail!("hex colour `{value}` must have 3 or 6 digits"),
		};
		let channel = |index: usize| -> Result<u8> {
			let pair = std::str::from_utf8(&digits[index * 2..index * 2 + 2])?;
			u8::from_str_radix(pair, 16).with_context(|| format!("invalid hex colour `{value}`"))
		};
		return Ok(Color::Rgb(channel(0)?, channel(1)?, channel(2)?));
	}

	if let Ok(index) = value.parse::<u8>() {
		return Ok(Color::Indexed(index));
	}

	let key = squash(value);
	NAMED_COLOURS
		.iter()
		.find(|(name, _)| *name == key)
		.map(|(_, colour)| *colour)
		.ok_or_else(|| anyhow!("unknown colour `{value}`"))
}

/// Lowercase and drop separators so `dark-gray`, `Dark Gray` and `dark_gray`
/// compare equal.
fn squash(value: &str) -> String {
	value
		.chars()
		.filter(|ch| !matches!(ch, '-' | '_' | ' '))
		.map(|ch| ch.to_ascii_lowercase())
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	const MINIMAL: &str = r##"
name = "test"
aliases = ["t", " "]

[styles.header]
fg = "#88c0d0"
modifiers = ["bold"]

[styles.row_highlight]
bg = "#345"

[styles.prompt]
fg = "cyan"

[styles.empty]
fg = "dark-gray"
modifiers = ["italic"]

[styles.muted]
fg = "244"

[styles.favorite]
fg = "yellow"

[styles.error]
fg = "light_red"
"##;

	#[test]
	fn parses_colours_and_modifiers() {
		let parsed = parse_theme_str(MINIMAL, "minimal").unwrap();
		let theme = parsed.registration.theme;
		assert_eq!(theme.header.fg, Some(Color::Rgb(0x88, 0xc0, 0xd0)));
		assert!(theme.header.add_modifier.contains(Modifier::BOLD));
		assert_eq!(theme.row_highlight.bg, Some(Color::Rgb(0x33, 0x44, 0x55)));
		assert_eq!(theme.empty.fg, Some(Color::DarkGray));
		assert_eq!(theme.muted.fg, Some(Color::Indexed(244)));
		assert_eq!(theme.error.fg, Some(Color::LightRed));
		assert_eq!(parsed.registration.aliases, vec!["t".to_string()]);
		assert!(!parsed.is_default);
	}

	#[test]
	fn rejects_unknown_colours() {
		let broken = MINIMAL.replace("\"cyan\"", "\"chartreuse\"");
		let error = parse_theme_str(&broken, "broken").err().unwrap();
		assert!(format!("{error:#}").contains("styles.prompt"));
	}

	#[test]
	fn first_theme_is_default_when_none_is_marked() {
		let parsed = vec![
			parse_theme_str(MINIMAL, "a").unwrap(),
			parse_theme_str(&MINIMAL.replace("\"test\"", "\"other\""), "b").unwrap(),
		];
		let catalog = build_catalog(parsed).unwrap();
		assert_eq!(catalog.default_name, "test");
		assert_eq!(catalog.registrations.len(), 2);
	}

	#[test]
	fn duplicate_defaults_are_rejected() {
		let marked = MINIMAL.replace("aliases", "default = true\naliases");
		let parsed = vec![
			parse_theme_str(&marked, "a").unwrap(),
			parse_theme_str(&marked.replace("\"test\"", "\"other\""), "b").unwrap(),
		];
		assert!(build_catalog(parsed).is_err());
	}
}
