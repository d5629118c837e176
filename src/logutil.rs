//! Logging helpers for player-written text (wear styles, garment messages)
//! so every log record stays on one line and stays short.

const PREVIEW_CHARS: usize = 80;

/// Quote `s` for a log line: control characters become escapes, and text
/// past [`PREVIEW_CHARS`] is cut with an ellipsis.
pub fn preview(s: &str) -> String {
    let mut out = String::with_capacity(s.len().min(PREVIEW_CHARS) + 2);
    out.push('"');
    for (count, ch) in s.chars().enumerate() {
        if count >= PREVIEW_CHARS {
            out.push('…');
            break;
        }
        match ch {
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::preview;

    #[test]
    fn quotes_and_escapes() {
        assert_eq!(preview("say \"hi\"\n"), "\"say \\\"hi\\\"\\n\"");
        assert_eq!(preview("bell\u{7}"), "\"bell\\u{7}\"");
    }

    #[test]
    fn long_text_is_cut() {
        let long = "x".repeat(200);
        let out = preview(&long);
        assert!(out.ends_with("…\""));
        assert_eq!(out.chars().filter(|c| *c == 'x').count(), 80);
    }
}
