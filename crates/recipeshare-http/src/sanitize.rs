//! Markup stripping for untrusted string data.
//!
//! [`strip_html`] removes `<script>`/`<style>` blocks and every other tag,
//! then decodes `&lt; &gt; &amp; &quot; &#x27; &#x2F;`. Decoding can expose
//! new markup (`&lt;b&gt;` becomes `<b>`), so the step repeats until the
//! string stops changing. The result is a fixed point: sanitizing twice
//! gives the same output as sanitizing once.
//!
//! Each pass is linear. Entity decoding collapses a whole `&amp;amp;...`
//! chain in one step, so ordinary input settles within two or three passes.
//! Input still changing after [`MAX_PASSES`] has every `<`, `>` and `&`
//! dropped, which is itself a fixed point.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::debug;

/// Upper bound on strip/decode passes for a single string.
pub const MAX_PASSES: usize = 16;

static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(?:script|style)\b[^>]*>.*?</(?:script|style)\s*>")
        .expect("script block pattern is valid")
});

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// Entities decoded besides `&amp;`, which [`decode_entities`] handles as a prefix.
const ENTITIES: [(&str, char); 5] = [
    ("lt;", '<'),
    ("gt;", '>'),
    ("quot;", '"'),
    ("#x27;", '\''),
    ("#x2F;", '/'),
];

/// Fully decode the recognized entities in one left-to-right scan.
///
/// A run like `&amp;amp;lt;` decodes straight to `<` rather than one level
/// at a time. Unrecognized entities are copied as they are.
fn decode_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let mut tail = &rest[pos + 1..];
        while let Some(next) = tail.strip_prefix("amp;") {
            tail = next;
        }
        match ENTITIES.iter().find(|(name, _)| tail.starts_with(name)) {
            Some((name, ch)) => {
                out.push(*ch);
                tail = &tail[name.len()..];
            }
            None => out.push('&'),
        }
        rest = tail;
    }

    out.push_str(rest);
    out
}

fn strip_once(input: &str) -> String {
    let without_blocks = SCRIPT_BLOCK.replace_all(input, "");
    let without_tags = TAG.replace_all(&without_blocks, "");
    decode_entities(&without_tags)
}

fn strip_bounded(input: &str, max_passes: usize) -> String {
    let mut current = input.to_string();
    for _ in 0..max_passes {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }

    debug!(len = current.len(), "Markup did not settle; dropping markup characters");
    current.retain(|c| !matches!(c, '<' | '>' | '&'));
    current
}

/// Strip markup from a single string.
///
/// Strings with no `<` and no `&` are returned borrowed and unchanged.
pub fn strip_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['<', '&']) {
        return Cow::Borrowed(input);
    }
    Cow::Owned(strip_bounded(input, MAX_PASSES))
}

/// Sanitize every string leaf of a JSON value in place.
///
/// Arrays keep their length, objects keep their keys; only string values
/// change. Numbers, booleans, and null are left alone.
pub fn sanitize_in_place(value: &mut Value) {
    match value {
        Value::String(s) => {
            if let Cow::Owned(clean) = strip_html(s) {
                *s = clean;
            }
        }
        Value::Array(items) => items.iter_mut().for_each(sanitize_in_place),
        Value::Object(map) => map.values_mut().for_each(sanitize_in_place),
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

/// Sanitize a JSON value, returning the cleaned copy.
pub fn sanitize(mut value: Value) -> Value {
    sanitize_in_place(&mut value);
    value
}
