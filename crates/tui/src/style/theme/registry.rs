use super::builtins;
use super::types::{Theme, ThemeDescriptor};

/// Look up a built-in theme by name or alias, ignoring case and separators.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = normalize_name(name);
	builtins::catalog()
		.registrations
		.iter()
		.find(|registration| {
			normalize_name(&registration.name) == wanted
				|| registration
					.aliases
					.iter()
					.any(|alias| normalize_name(alias) == wanted)
		})
		.map(|registration| registration.theme)
}

/// Names of all built-in themes, in catalog order.
#[must_use]
pub fn names() -> Vec<String> {
	builtins::catalog()
		.registrations
		.iter()
		.map(|registration| registration.name.clone())
		.collect()
}

/// Names, aliases and default flag of every built-in theme.
#[must_use]
pub fn descriptors() -> Vec<ThemeDescriptor> {
	let catalog = builtins::catalog();
	catalog
		.registrations
		.iter()
		.map(|registration| ThemeDescriptor {
			name: registration.name.clone(),
			aliases: registration.aliases.clone(),
			is_default: registration.name == catalog.default_name,
		})
		.collect()
}

fn normalize_name(name: &str) -> String {
	name.trim()
		.chars()
		.filter(|ch| !matches!(ch, '-' | '_' | ' '))
		.flat_map(char::to_lowercase)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::style::default_theme;

	#[test]
	fn lookup_ignores_case_and_separators() {
		assert_eq!(by_name("Slate"), by_name("slate"));
		assert!(by_name("LIGHT").is_some());
		assert!(by_name("sl-ate").is_some());
		assert!(by_name("missing").is_none());
	}

	#[test]
	fn aliases_resolve_to_their_theme() {
		assert_eq!(by_name("dark"), by_name("slate"));
		assert_eq!(by_name("day"), by_name("light"));
	}

	#[test]
	fn exactly_one_descriptor_is_default() {
		let descriptors = descriptors();
		let defaults: Vec<_> = descriptors.iter().filter(|d| d.is_default).collect();
		assert_eq!(defaults.len(), 1);
		assert_eq!(defaults[0].name, "slate");
		assert_eq!(by_name("slate"), Some(default_theme()));
		assert_eq!(names(), vec!["light".to_string(), "slate".to_string()]);
	}
}
