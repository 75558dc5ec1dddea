//! Case-insensitive match highlighting for search result rows.

/// A run of text, marked when it matches the search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: false,
        }
    }

    fn hit(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: true,
        }
    }
}

/// Whether `haystack` contains `needle`, ignoring case (Unicode-aware).
///
/// Uses the same per-char fold as [`highlight`], so a row kept by the filter
/// always has a highlighted match.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = fold(needle);
    if needle.is_empty() {
        return true;
    }
    haystack
        .char_indices()
        .any(|(offset, _)| match_len_at(&haystack[offset..], &needle).is_some())
}

fn fold(text: &str) -> Vec<char> {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Split `text` into alternating plain and matched segments.
///
/// A blank `term` yields the whole text as one plain segment. Matches never
/// overlap; scanning resumes after each hit.
#[must_use]
pub fn highlight(text: &str, term: &str) -> Vec<Segment> {
    let needle = fold(term.trim());
    if text.is_empty() {
        return Vec::new();
    }
    if needle.is_empty() {
        return vec![Segment::plain(text)];
    }

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;
    while cursor < text.len() {
        if let Some(len) = match_len_at(&text[cursor..], &needle) {
            if plain_start < cursor {
                segments.push(Segment::plain(&text[plain_start..cursor]));
            }
            segments.push(Segment::hit(&text[cursor..cursor + len]));
            cursor += len;
            plain_start = cursor;
        } else {
            cursor += text[cursor..].chars().next().map_or(1, char::len_utf8);
        }
    }
    if plain_start < text.len() {
        segments.push(Segment::plain(&text[plain_start..]));
    }
    segments
}

/// Byte length of the prefix of `haystack` whose lowercase form equals `needle`.
fn match_len_at(haystack: &str, needle: &[char]) -> Option<usize> {
    let mut lowered = Vec::with_capacity(needle.len());
    let mut consumed = 0;
    for (offset, c) in haystack.char_indices() {
        lowered.extend(c.to_lowercase());
        consumed = offset + c.len_utf8();
        if lowered.len() >= needle.len() {
            break;
        }
    }
    (lowered == needle).then_some(consumed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(segments: &[Segment]) -> String {
        segments
            .iter()
            .map(|s| {
                if s.matched {
                    format!("[{}]", s.text)
                } else {
                    s.text.clone()
                }
            })
            .collect()
    }

    #[test]
    fn marks_every_occurrence() {
        assert_eq!(
            render(&highlight("Cardiologia e cardiopatia", "CARDIO")),
            "[Cardio]logia e [cardio]patia"
        );
    }

    #[test]
    fn handles_accented_text() {
        assert_eq!(render(&highlight("Lesão do OMBRO", "são")), "Le[são] do OMBRO");
        assert_eq!(render(&highlight("ÉPOCA", "é")), "[É]POCA");
    }

    #[test]
    fn blank_term_is_one_plain_segment() {
        assert_eq!(highlight("Ortopedia", "  "), vec![Segment::plain("Ortopedia")]);
        assert!(highlight("", "x").is_empty());
    }

    #[test]
    fn segments_reassemble_original_text() {
        let text = "CRM 12345 / SP";
        let joined: String = highlight(text, "12").into_iter().map(|s| s.text).collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn contains_ignores_case() {
        assert!(contains_ignore_case("Fratura do FÊMUR", "fêmur"));
        assert!(!contains_ignore_case("Fratura", "femur"));
    }

    #[test]
    fn filter_and_highlight_agree_on_special_lowercase_forms() {
        let cases = [
            ("ΟΔΟΣ", "Σ"),
            ("ΟΔΟΣ", "ς"),
            ("İSTANBUL", "i"),
            ("İzmir", "i"),
            ("İzmir", "İ"),
            ("Straße", "SS"),
            ("Lesão", "SÃO"),
        ];
        for (text, term) in cases {
            let kept = contains_ignore_case(text, term);
            let marked = highlight(text, term).iter().any(|s| s.matched);
            assert_eq!(kept, marked, "{text:?} / {term:?}");
        }
    }

    #[test]
    fn final_sigma_is_matched_and_marked() {
        assert!(contains_ignore_case("ΟΔΟΣ", "Σ"));
        assert_eq!(render(&highlight("ΟΔΟΣ", "Σ")), "ΟΔΟ[Σ]");
    }

    #[test]
    fn dotted_capital_i_does_not_match_plain_i() {
        assert!(!contains_ignore_case("İSTANBUL", "i"));
        assert!(highlight("İSTANBUL", "i").iter().all(|s| !s.matched));
        assert_eq!(render(&highlight("İzmir", "i")), "İzm[i]r");
    }
}
