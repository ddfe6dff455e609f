//! Reply parsing for the scoring call.

use crate::error::ScoringError;
use crate::types::VendorScore;

/// Parses the model reply into vendor scores.
///
/// Models are instructed to return a bare JSON array but occasionally wrap
/// it in code fences or a sentence of prose, so parsing slices from the
/// first `[` to the last `]` before deserializing.
///
/// # Errors
///
/// Returns [`ScoringError::Parse`] when no array can be extracted or the
/// array elements do not match the expected shape.
pub(crate) fn parse_scores(content: &str) -> Result<Vec<VendorScore>, ScoringError> {
    let start = content.find('[').ok_or_else(|| ScoringError::Parse {
        reason: format!("no JSON array in reply: {}", snippet(content)),
    })?;
    let end = content.rfind(']').ok_or_else(|| ScoringError::Parse {
        reason: format!("unterminated JSON array in reply: {}", snippet(content)),
    })?;
    if end < start {
        return Err(ScoringError::Parse {
            reason: format!("malformed JSON array in reply: {}", snippet(content)),
        });
    }

    serde_json::from_str(&content[start..=end]).map_err(|e| ScoringError::Parse {
        reason: format!("{e}: {}", snippet(content)),
    })
}

fn snippet(content: &str) -> String {
    const MAX: usize = 120;
    let trimmed = content.trim();
    if trimmed.len() <= MAX {
        return trimmed.to_owned();
    }
    let cut = trimmed
        .char_indices()
        .take_while(|(i, _)| *i < MAX)
        .last()
        .map_or(0, |(i, c)| i + c.len_utf8());
    format!("{}…", &trimmed[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: &str = r#"[{"name": "Warung A", "relevance_score": 88, "relevance_reason": "Close match."}]"#;

    #[test]
    fn parses_bare_array() {
        let scores = parse_scores(PLAIN).expect("should parse");
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].name, "Warung A");
        assert_eq!(scores[0].relevance_score, 88);
    }

    #[test]
    fn parses_fenced_array() {
        let content = format!("```json\n{PLAIN}\n```");
        let scores = parse_scores(&content).expect("should parse fenced reply");
        assert_eq!(scores[0].relevance_score, 88);
    }

    #[test]
    fn parses_array_wrapped_in_prose() {
        let content = format!("Here are the scores you asked for:\n{PLAIN}\nLet me know!");
        let scores = parse_scores(&content).expect("should parse prose-wrapped reply");
        assert_eq!(scores[0].name, "Warung A");
    }

    #[test]
    fn rejects_reply_without_array() {
        let err = parse_scores("I cannot score these vendors.").expect_err("should fail");
        assert!(matches!(err, ScoringError::Parse { .. }));
    }

    #[test]
    fn rejects_array_of_wrong_shape() {
        let err = parse_scores(r#"[{"vendor": "Warung A"}]"#).expect_err("should fail");
        assert!(matches!(err, ScoringError::Parse { .. }));
    }

    #[test]
    fn out_of_range_scores_survive_parsing() {
        // Range enforcement happens at merge time, not parse time.
        let content = r#"[{"name": "A", "relevance_score": 140, "relevance_reason": "x"}]"#;
        let scores = parse_scores(content).expect("should parse");
        assert_eq!(scores[0].relevance_score, 140);
    }
}
