//! Human-readable names for lore lines.

use tapestry_primitives::Layer;

use crate::display_name;

/// Title-cases a raw enum name: `LIGHT_BLUE` becomes `Light Blue`.
///
/// Empty words (leading, trailing or doubled separators) are skipped.
pub fn format_color_name(raw: &str) -> String {
	let mut out = String::with_capacity(raw.len());
	for word in raw.split('_').filter(|w| !w.is_empty()) {
		if !out.is_empty() {
			out.push(' ');
		}
		let mut chars = word.chars();
		if let Some(first) = chars.next() {
			out.extend(first.to_uppercase());
			out.push_str(&chars.as_str().to_lowercase());
		}
	}
	out
}

/// Describes a layer as `"{color} {pattern}"`, e.g. `Light Blue Bend`.
pub fn describe_layer(layer: &Layer) -> String {
	format!("{} {}", format_color_name(layer.color().as_raw_name()), display_name(layer.pattern()))
}
