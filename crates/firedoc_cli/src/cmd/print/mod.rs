use firedoc::firestore::Value;

/// Output truncation and formatting limits for decoded values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of fields printed for a single map.
	pub max_fields_per_map: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for arrays.
	pub max_array_items: usize,
	/// Maximum recursive print depth for nested arrays/maps.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_fields_per_map: 80,
			max_string_len: 200,
			max_array_items: 16,
			max_print_depth: 6,
		}
	}
}

impl PrintOptions {
	/// Preset for one-screen summaries.
	pub fn compact() -> Self {
		Self {
			max_fields_per_map: 20,
			max_string_len: 60,
			max_array_items: 4,
			max_print_depth: 3,
		}
	}
}

/// Print one decoded value tree to stdout.
pub fn print_value(value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let mut out = String::new();
	render_value(value, indent, depth, options, &mut out);
	print!("{out}");
}

/// Render one decoded value tree as indented text lines.
pub fn render_value(value: &Value, indent: usize, depth: u32, options: PrintOptions, out: &mut String) {
	let pad = " ".repeat(indent);
	match value {
		Value::Null => push_line(out, &pad, "null"),
		Value::Bool(v) => push_line(out, &pad, &v.to_string()),
		Value::Integer(v) => push_line(out, &pad, &v.to_string()),
		Value::Double(v) => push_line(out, &pad, &v.to_string()),
		Value::String(v) => push_line(out, &pad, &format!("\"{}\"", truncate(v, options.max_string_len))),
		Value::Array(items) => {
			if depth >= options.max_print_depth {
				push_line(out, &pad, &format!("[... {} items]", items.len()));
				return;
			}
			push_line(out, &pad, "[");
			for item in items.iter().take(options.max_array_items) {
				render_value(item, indent + 2, depth + 1, options, out);
			}
			if items.len() > options.max_array_items {
				push_line(out, &pad, &format!("  ... {} more", items.len() - options.max_array_items));
			}
			push_line(out, &pad, "]");
		}
		Value::Map(map) => {
			if depth >= options.max_print_depth {
				push_line(out, &pad, &format!("{{ ... {} fields }}", map.len()));
				return;
			}
			push_line(out, &pad, "{");
			for field in map.fields.iter().take(options.max_fields_per_map) {
				out.push_str(&format!("{}  {} = ", pad, field.name));
				if matches!(field.value, Value::Map(_) | Value::Array(_)) {
					out.push('\n');
					render_value(&field.value, indent + 4, depth + 1, options, out);
				} else {
					render_value(&field.value, 0, depth + 1, options, out);
				}
			}
			if map.len() > options.max_fields_per_map {
				push_line(out, &pad, &format!("  ... {} more fields", map.len() - options.max_fields_per_map));
			}
			push_line(out, &pad, "}");
		}
	}
}

fn push_line(out: &mut String, pad: &str, text: &str) {
	out.push_str(pad);
	out.push_str(text);
	out.push('\n');
}

/// Cut `input` to `max_len` characters, marking the cut with `...`.
pub fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}
