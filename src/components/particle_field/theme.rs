//! Visual styling for the particle backdrop.
//!
//! Provides the color type and the particle field configuration.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha, 0.0 to 1.0.
	pub a: f64,
}

impl Color {
	/// Opaque color from channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Same color with alpha `a`.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Parse `#rrggbb` or `#rgb`.
	pub fn from_hex(hex: &str) -> Option<Self> {
		let digits = hex.strip_prefix('#').filter(|d| d.bytes().all(|b| b.is_ascii_hexdigit()))?;
		let channel = |s: &str| u8::from_str_radix(s, 16).ok();
		match digits.len() {
			6 => Some(Self::rgb(
				channel(&digits[0..2])?,
				channel(&digits[2..4])?,
				channel(&digits[4..6])?,
			)),
			3 => {
				// #abc expands to #aabbcc
				let short = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
				Some(Self::rgb(short(0)?, short(1)?, short(2)?))
			}
			_ => None,
		}
	}

	/// `#rrggbb` when opaque, `rgba(...)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

impl TryFrom<String> for Color {
	type Error = String;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Color::from_hex(value.trim()).ok_or_else(|| format!("not a hex color: {value}"))
	}
}

/// Particle field configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FieldStyle {
	/// Whether the overlay is mounted at all
	pub enabled: bool,
	/// Number of particles, fixed for the lifetime of the field. Capped at
	/// [`MAX_PARTICLES`](super::MAX_PARTICLES).
	pub count: usize,
	/// Upper bound of each velocity component, in pixels per frame
	pub speed: f64,
	/// Minimum particle radius
	pub size_min: f64,
	/// Maximum particle radius (exclusive)
	pub size_max: f64,
	/// Pairs closer than this are linked by a line
	pub link_distance: f64,
	/// Opacity of link lines
	pub link_alpha: f64,
	/// Opacity of the whole overlay canvas
	pub opacity: f64,
	/// Particle colors, picked with equal probability
	pub palette: Vec<Color>,
}

impl FieldStyle {
	/// Palette color for a particle's color tag.
	pub fn color(&self, tone: usize) -> Color {
		if self.palette.is_empty() {
			return Color::rgb(255, 255, 255);
		}
		self.palette[tone % self.palette.len()]
	}
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self {
			enabled: true,
			count: 50,
			speed: 0.25,
			size_min: 1.0,
			size_max: 3.0,
			link_distance: 100.0,
			link_alpha: 0.1,
			opacity: 0.1,
			palette: vec![
				Color::rgb(0, 217, 255), // Cyan
				Color::rgb(255, 107, 53), // Orange
			],
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_long_and_short_hex() {
		assert_eq!(Color::from_hex("#00d9ff"), Some(Color::rgb(0, 217, 255)));
		assert_eq!(Color::from_hex("#fff"), Some(Color::rgb(255, 255, 255)));
		assert_eq!(Color::from_hex("00d9ff"), None);
		assert_eq!(Color::from_hex("#zzzzzz"), None);
	}

	#[test]
	fn css_output_switches_on_alpha() {
		let c = Color::rgb(255, 107, 53);
		assert_eq!(c.to_css(), "#ff6b35");
		assert_eq!(c.with_alpha(0.1).to_css(), "rgba(255, 107, 53, 0.1)");
	}

	#[test]
	fn palette_lookup_wraps_and_tolerates_empty() {
		let mut style = FieldStyle::default();
		assert_eq!(style.color(3), style.palette[1]);
		style.palette.clear();
		assert_eq!(style.color(0), Color::rgb(255, 255, 255));
	}

	#[test]
	fn style_deserializes_palette_strings() {
		let style: FieldStyle =
			serde_json::from_str(r##"{"count": 12, "palette": ["#123456"]}"##).unwrap();
		assert_eq!(style.count, 12);
		assert_eq!(style.palette, vec![Color::rgb(0x12, 0x34, 0x56)]);
		assert_eq!(style.link_distance, 100.0);
	}

	#[test]
	fn style_rejects_bad_palette_entry() {
		let res = serde_json::from_str::<FieldStyle>(r#"{"palette": ["cyan"]}"#);
		assert!(res.is_err());
	}
}
