//! Fragment merging: repair sentences that end mid-thought.
//!
//! Sentence splitters cut on punctuation, but spoken Korean scripts are full
//! of clauses that end in a particle or connective and only make sense with
//! the next clause:
//!
//! ```text
//! ["오늘은 날씨가 좋고", "바람도 시원합니다."]
//!            ^^ connective "고": incomplete
//!
//! -> ["오늘은 날씨가 좋고 바람도 시원합니다."]
//! ```
//!
//! ## When Is a Sentence Incomplete?
//!
//! After trimming, a sentence is incomplete if any of these holds:
//!
//! | Rule | Example |
//! |------|---------|
//! | shorter than 10 chars | `"네 맞아요."` |
//! | ends in a dangling particle or connective | `"...좋지만"` |
//! | is a bare connective adverb | `"그리고"` |
//! | no sentence-final ending and shorter than 15 chars | `"첫 번째 항목"` |
//!
//! The word lists live in [`DANGLING_ENDINGS`], [`CONNECTIVE_ADVERBS`] and
//! [`SENTENCE_FINAL_ENDINGS`].
//!
//! ## Length Cap
//!
//! Merging stops at `max_segment_chars`. When appending the next sentence
//! would pass the cap, the buffer is flushed as-is, complete or not: the cap
//! wins over completeness. A single sentence already at the cap is emitted
//! alone rather than used to seed a buffer.

/// Case particles and connective suffixes that leave a clause hanging.
pub const DANGLING_ENDINGS: &[&str] = &[
    "은", "는", "이", "가", "을", "를", "에", "으로", "고", "와", "과", "며", "는데", "지만",
    "거나", "든지", "든지간에", "든가",
];

/// Connective adverbs that cannot stand alone as a sentence.
pub const CONNECTIVE_ADVERBS: &[&str] = &[
    "그리고", "하지만", "그러나", "또한", "그래서", "즉", "또", "그러면", "그런데",
];

/// Punctuation and sentence-final endings that close a sentence.
pub const SENTENCE_FINAL_ENDINGS: &[&str] = &[".", "!", "?", "다", "요", "죠", "까", "나", "시오"];

/// Below this many chars a sentence is always incomplete.
const MIN_COMPLETE_CHARS: usize = 10;

/// Below this many chars a sentence without a final ending is incomplete.
const MIN_UNTERMINATED_CHARS: usize = 15;

/// Default cap on merged segment length, in chars.
pub const DEFAULT_MAX_SEGMENT_CHARS: usize = 200;

/// Whether `text` ends with any of `suffixes`.
pub fn ends_with_any(text: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suffix| text.ends_with(suffix))
}

/// Whether a sentence needs the next one to be complete.
///
/// ```rust
/// use scriptdeck::is_incomplete;
///
/// assert!(is_incomplete("그리고"));
/// assert!(is_incomplete("오늘은 날씨가 정말 좋았지만"));
/// assert!(!is_incomplete("오늘은 정말 좋은 날입니다."));
/// ```
pub fn is_incomplete(sentence: &str) -> bool {
    let sentence = sentence.trim();
    let len = sentence.chars().count();

    if len < MIN_COMPLETE_CHARS {
        return true;
    }
    if ends_with_any(sentence, DANGLING_ENDINGS) {
        return true;
    }
    if CONNECTIVE_ADVERBS.contains(&sentence) {
        return true;
    }
    !ends_with_any(sentence, SENTENCE_FINAL_ENDINGS) && len < MIN_UNTERMINATED_CHARS
}

/// Merge incomplete sentences with their neighbours.
///
/// Every non-empty input sentence appears, trimmed and in order, inside
/// exactly one output segment. Output is empty only when every input
/// sentence is blank.
///
/// ## Example
///
/// ```rust
/// use scriptdeck::merge_sentences;
///
/// let merged = merge_sentences(
///     &["오늘은 날씨가 좋고", "바람도 시원합니다.", "내일도 맑을 예정입니다."],
///     200,
/// );
/// assert_eq!(
///     merged,
///     vec!["오늘은 날씨가 좋고 바람도 시원합니다.", "내일도 맑을 예정입니다."]
/// );
/// ```
pub fn merge_sentences<S: AsRef<str>>(sentences: &[S], max_segment_chars: usize) -> Vec<String> {
    let mut merged = Vec::new();
    let mut buffer = String::new();
    let mut buffer_len = 0;
    let last = sentences.len().saturating_sub(1);

    for (i, sentence) in sentences.iter().enumerate() {
        let sentence = sentence.as_ref().trim();
        if sentence.is_empty() {
            continue;
        }
        let sentence_len = sentence.chars().count();
        let is_last = i == last;

        if buffer.is_empty() {
            if is_incomplete(sentence) && !is_last && sentence_len < max_segment_chars {
                buffer.push_str(sentence);
                buffer_len = sentence_len;
            } else {
                merged.push(sentence.to_string());
            }
            continue;
        }

        if buffer_len + 1 + sentence_len > max_segment_chars {
            // Cap wins: flush what we have, even if incomplete
            merged.push(std::mem::take(&mut buffer));
            buffer.push_str(sentence);
            buffer_len = sentence_len;
        } else {
            buffer.push(' ');
            buffer.push_str(sentence);
            buffer_len += 1 + sentence_len;
        }

        if !is_incomplete(&buffer) || is_last {
            merged.push(std::mem::take(&mut buffer));
            buffer_len = 0;
        }
    }

    if !buffer.is_empty() {
        merged.push(buffer);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_is_incomplete() {
        assert!(is_incomplete(""));
        assert!(is_incomplete("네 맞아요."));
        assert!(is_incomplete("   짧다   "));
    }

    #[test]
    fn test_dangling_endings() {
        for ending in DANGLING_ENDINGS {
            let sentence = format!("여기에 충분히 긴 문장을 씁니다 그래서{ending}");
            assert!(is_incomplete(&sentence), "{sentence} should be incomplete");
        }
    }

    #[test]
    fn test_connective_adverbs_are_incomplete() {
        for adverb in CONNECTIVE_ADVERBS {
            assert!(is_incomplete(adverb));
        }
    }

    #[test]
    fn test_unterminated_short_vs_long() {
        // 13 chars, no final ending
        assert!(is_incomplete("첫 번째 항목 목록 정리"));
        // Long enough and no dangling ending: complete even without terminator
        assert!(!is_incomplete("this line has no terminator at all"));
    }

    #[test]
    fn test_complete_sentences() {
        assert!(!is_incomplete("오늘은 정말 좋은 날입니다."));
        assert!(!is_incomplete("정말 그렇게 생각하시나요?"));
        assert!(!is_incomplete("This is a full sentence."));
    }

    #[test]
    fn test_merge_connective_with_next() {
        let merged = merge_sentences(&["그리고", "우리는 함께 앞으로 나아갑니다."], 200);
        assert_eq!(merged, vec!["그리고 우리는 함께 앞으로 나아갑니다."]);
    }

    #[test]
    fn test_complete_sentences_pass_through() {
        let input = ["오늘은 정말 좋은 날입니다.", "내일도 좋은 날이 될 거예요."];
        assert_eq!(merge_sentences(&input, 200), input);
    }

    #[test]
    fn test_last_incomplete_emitted() {
        let merged = merge_sentences(&["오늘은 정말 좋은 날입니다.", "그리고"], 200);
        assert_eq!(merged, vec!["오늘은 정말 좋은 날입니다.", "그리고"]);
    }

    #[test]
    fn test_skips_empty() {
        let merged = merge_sentences(&["", "  ", "오늘은 정말 좋은 날입니다.", ""], 200);
        assert_eq!(merged, vec!["오늘은 정말 좋은 날입니다."]);
        assert!(merge_sentences(&["", " "], 200).is_empty());
        assert!(merge_sentences::<&str>(&[], 200).is_empty());
    }

    #[test]
    fn test_trailing_blank_still_flushes_buffer() {
        // The incomplete fragment is not the last raw entry, so it buffers
        let merged = merge_sentences(&["그리고", ""], 200);
        assert_eq!(merged, vec!["그리고"]);
    }

    #[test]
    fn test_cap_flushes_incomplete_buffer() {
        let a = "가".repeat(8); // incomplete (short)
        let b = "나".repeat(8);
        let merged = merge_sentences(&[a.as_str(), b.as_str(), "끝입니다 정말로 끝."], 10);
        // a + " " + b = 17 > 10: a is flushed alone, then b
        assert_eq!(merged, vec![a, b, "끝입니다 정말로 끝.".to_string()]);
    }

    #[test]
    fn test_oversized_incomplete_sentence_not_buffered() {
        let long = format!("{}는", "가".repeat(30));
        let merged = merge_sentences(&[long.as_str(), "다음 문장은 완전한 문장입니다."], 20);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0], long);
    }

    #[test]
    fn test_every_sentence_kept_in_order() {
        let input = [
            "그리고",
            "오늘은 날씨가 좋고",
            "바람도 시원합니다.",
            "하지만",
            "내일은 비가 온다고 합니다.",
            "짧음",
        ];
        let merged = merge_sentences(&input, 200);
        let rejoined = merged.join(" ");
        assert_eq!(rejoined, input.join(" "));
    }
}
