//! Text segmentation for chunked TTS
//!
//! The Google translate TTS endpoint rejects requests over 200
//! characters, so long text is cut into segments at punctuation
//! boundaries first, then at whitespace, then hard-split as a last
//! resort. Invariant: concatenating the segments in order covers the
//! entire input, so no audio chunk is ever dropped.

/// Maximum characters per TTS request
pub const MAX_SEGMENT_CHARS: usize = 200;

/// Punctuation at which segments prefer to break
const SPLIT_PUNCT: [char; 3] = [',', '.', '?'];

/// Split text into TTS-sized segments.
///
/// Empty and whitespace-only inputs yield no segments.
pub fn split_text(text: &str) -> Vec<String> {
    split_text_with_limit(text, MAX_SEGMENT_CHARS)
}

pub fn split_text_with_limit(text: &str, max_chars: usize) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();

    for piece in sentence_pieces(text) {
        if piece.chars().count() > max_chars {
            // Flush what we have, then break the oversized piece further.
            push_segment(&mut segments, &mut current);
            for word_piece in whitespace_pieces(piece, max_chars) {
                if current.chars().count() + word_piece.chars().count() > max_chars {
                    push_segment(&mut segments, &mut current);
                }
                current.push_str(word_piece);
            }
            continue;
        }

        if current.chars().count() + piece.chars().count() > max_chars {
            push_segment(&mut segments, &mut current);
        }
        current.push_str(piece);
    }

    push_segment(&mut segments, &mut current);
    segments
}

fn push_segment(segments: &mut Vec<String>, current: &mut String) {
    if !current.trim().is_empty() {
        segments.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

/// Split into pieces ending at (and including) split punctuation.
fn sentence_pieces(text: &str) -> impl Iterator<Item = &str> {
    text.split_inclusive(|c| SPLIT_PUNCT.contains(&c))
}

/// Split an oversized piece at whitespace, hard-cutting words that are
/// themselves longer than the limit.
fn whitespace_pieces(piece: &str, max_chars: usize) -> Vec<&str> {
    let mut result = Vec::new();
    for word in piece.split_inclusive(char::is_whitespace) {
        if word.chars().count() <= max_chars {
            result.push(word);
            continue;
        }
        let mut rest = word;
        while !rest.is_empty() {
            let cut = rest
                .char_indices()
                .nth(max_chars)
                .map(|(i, _)| i)
                .unwrap_or(rest.len());
            result.push(&rest[..cut]);
            rest = &rest[cut..];
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(split_text("").is_empty());
        assert!(split_text("   ").is_empty());
    }

    #[test]
    fn test_short_text_single_segment() {
        let segments = split_text("Hello world.");
        assert_eq!(segments, vec!["Hello world.".to_string()]);
    }

    #[test]
    fn test_segments_respect_limit() {
        let text = "One sentence here. Another sentence follows, with a clause. \
                    Then a question? And more text to push past the limit."
            .repeat(5);
        for segment in split_text(&text) {
            assert!(segment.chars().count() <= MAX_SEGMENT_CHARS);
        }
    }

    #[test]
    fn test_breaks_at_punctuation() {
        let segments = split_text_with_limit("First part, second part. Third part?", 15);
        assert_eq!(
            segments,
            vec!["First part,", " second part.", " Third part?"]
        );
    }

    #[test]
    fn test_full_coverage_no_text_dropped() {
        let text = "Sentence one is here. Sentence two, with commas, is longer. \
                    A question arises? Final words without trailing punctuation"
            .repeat(3);
        let segments = split_text(&text);
        assert_eq!(segments.concat(), text);
    }

    #[test]
    fn test_oversized_word_hard_split() {
        let word = "a".repeat(450);
        let segments = split_text(&word);
        assert!(segments.len() >= 3);
        assert_eq!(segments.concat(), word);
        for segment in segments {
            assert!(segment.chars().count() <= MAX_SEGMENT_CHARS);
        }
    }

    #[test]
    fn test_ordering_preserved() {
        let text = "alpha. beta. gamma. delta.";
        let segments = split_text_with_limit(text, 8);
        let joined = segments.concat();
        let a = joined.find("alpha").unwrap();
        let b = joined.find("beta").unwrap();
        let c = joined.find("gamma").unwrap();
        assert!(a < b && b < c);
    }
}
