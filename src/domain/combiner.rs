//! Hybrid joke synthesis.
//!
//! Takes the setup of one joke and the punchline of another and stitches them
//! together with one of four connective templates. Template choice depends only
//! on the input lengths, so the same two jokes always produce the same output.

use crate::domain::entities::Joke;
use regex::Regex;
use std::sync::LazyLock;

/// A sentence: non-terminators followed by at least one terminator.
static SENTENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?。！？]+[.!?。！？]+").unwrap());

/// Like [`SENTENCE_REGEX`], but a trailing unterminated fragment also counts.
static FRAGMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?。！？]+[.!?。！？]*").unwrap());

const TERMINATORS: [char; 6] = ['.', '!', '?', '。', '！', '？'];

const TEMPLATE_COUNT: usize = 4;

/// Combines the setup of `first` with the punchline of `second`.
///
/// # Examples
///
/// ```
/// use hybrid_jokes::domain::combiner::combine;
/// use hybrid_jokes::domain::entities::Joke;
///
/// let a = Joke::new("Setup line. Extra.").unwrap();
/// let b = Joke::new("Is this a question? Yes it is.").unwrap();
///
/// assert_eq!(combine(&a, &b).as_str(), "Setup line. Meanwhile, yes it is.");
/// ```
pub fn combine(first: &Joke, second: &Joke) -> Joke {
    let setup = extract_setup(first.as_str());
    let punchline = extract_punchline(second.as_str());

    Joke::stitched(stitch(template_index(first, second), setup, punchline))
}

/// First sentence of `text`, or the whole trimmed text if it has no terminator.
pub fn extract_setup(text: &str) -> &str {
    SENTENCE_REGEX
        .find(text)
        .map(|m| m.as_str().trim())
        .unwrap_or_else(|| text.trim())
}

/// Answer part of `text`.
///
/// Text after the last `?` wins when there is any. Otherwise the last sentence
/// is used, or the whole trimmed text when it is a single sentence.
pub fn extract_punchline(text: &str) -> &str {
    if let Some((_, answer)) = text.rsplit_once('?') {
        let answer = answer.trim();
        if !answer.is_empty() {
            return answer;
        }
    }

    let fragments: Vec<&str> = FRAGMENT_REGEX
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .collect();

    match fragments.as_slice() {
        [.., last] if fragments.len() > 1 => *last,
        _ => text.trim(),
    }
}

/// Template selected for a pair of jokes.
///
/// Lengths are counted in UTF-16 code units.
pub fn template_index(first: &Joke, second: &Joke) -> usize {
    (first.utf16_len() + second.utf16_len()) % TEMPLATE_COUNT
}

fn stitch(index: usize, setup: &str, punchline: &str) -> String {
    let punchline = terminate(punchline.to_lowercase());

    match index {
        0 => format!("{setup} Meanwhile, {punchline}"),
        1 => format!("{setup} Speaking of which, {punchline}"),
        2 => format!("{setup} Also, {punchline}"),
        _ => format!(
            "Legend says that {} And that's why {punchline}",
            setup.to_lowercase()
        ),
    }
}

fn terminate(mut sentence: String) -> String {
    if !sentence.ends_with(TERMINATORS) {
        sentence.push('.');
    }
    sentence
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joke(text: &str) -> Joke {
        Joke::new(text).unwrap()
    }

    fn combined(a: &str, b: &str) -> String {
        combine(&joke(a), &joke(b)).into_inner()
    }

    #[test]
    fn test_setup_takes_first_sentence() {
        assert_eq!(extract_setup("Setup line. Extra."), "Setup line.");
    }

    #[test]
    fn test_setup_keeps_repeated_terminators() {
        assert_eq!(extract_setup("Wow!!! Really."), "Wow!!!");
    }

    #[test]
    fn test_setup_without_terminator_uses_whole_text() {
        assert_eq!(extract_setup("  no punctuation here "), "no punctuation here");
    }

    #[test]
    fn test_setup_full_width_terminator() {
        assert_eq!(extract_setup("你好。再见。"), "你好。");
    }

    #[test]
    fn test_punchline_after_question_mark() {
        assert_eq!(
            extract_punchline("Is this a question? Yes it is."),
            "Yes it is."
        );
    }

    #[test]
    fn test_punchline_after_last_question_mark() {
        assert_eq!(extract_punchline("Who? What? That one."), "That one.");
    }

    #[test]
    fn test_punchline_trailing_question_falls_back_to_sentence() {
        assert_eq!(
            extract_punchline("Why did the math book look sad?"),
            "Why did the math book look sad?"
        );
        assert_eq!(extract_punchline("Hello. Why so sad?"), "Why so sad?");
    }

    #[test]
    fn test_punchline_last_sentence_without_question() {
        assert_eq!(extract_punchline("One. Two. Three"), "Three");
        assert_eq!(extract_punchline("One. Two.   "), "Two.");
    }

    #[test]
    fn test_punchline_single_sentence_uses_whole_text() {
        assert_eq!(extract_punchline(" Short dad. "), "Short dad.");
    }

    #[test]
    fn test_template_meanwhile() {
        assert_eq!(
            combined("Setup line. Extra.", "Is this a question? Yes it is."),
            "Setup line. Meanwhile, yes it is."
        );
    }

    #[test]
    fn test_template_speaking_of_which() {
        assert_eq!(
            combined("Setup line. Extra.", "Is this a question? Yes it is!!"),
            "Setup line. Speaking of which, yes it is!!"
        );
    }

    #[test]
    fn test_template_also() {
        assert_eq!(
            combined("Setup line. Extra.", "Is this a question? Yes it is!!!"),
            "Setup line. Also, yes it is!!!"
        );
    }

    #[test]
    fn test_template_legend() {
        assert_eq!(
            combined("Setup line. Extra.", "Is this a question?  Yes it is!!!"),
            "Legend says that setup line. And that's why yes it is!!!"
        );
    }

    #[test]
    fn test_unterminated_punchline_gets_period() {
        assert_eq!(
            combined("No punctuation here", "Plain answer"),
            "Legend says that no punctuation here And that's why plain answer."
        );
        assert_eq!(combined("First. Second! Third?", "One. Two. Three"), "First. Meanwhile, three.");
    }

    #[test]
    fn test_real_world_pair() {
        assert_eq!(
            combined(
                "Chuck Norris counted to infinity. Twice.",
                "Why did the math book look sad? Because it had too many problems."
            ),
            "Chuck Norris counted to infinity. Speaking of which, because it had too many problems."
        );
        assert_eq!(
            combined(
                "Chuck Norris counted to infinity.",
                "Why did the math book look sad?"
            ),
            "Chuck Norris counted to infinity. Meanwhile, why did the math book look sad?"
        );
    }

    #[test]
    fn test_short_jokes() {
        assert_eq!(
            combined("Short chuck.", "Short dad."),
            "Short chuck. Also, short dad."
        );
    }

    #[test]
    fn test_template_index_counts_utf16_units() {
        // 3 + 3 code units, but only 2 + 3 chars.
        assert_eq!(template_index(&joke("😀."), &joke("Ok.")), 2);
        assert_eq!(combined("😀.", "Ok."), "😀. Also, ok.");
    }

    #[test]
    fn test_special_characters() {
        let result = combined(
            "Chuck's joke with 'quotes' and \"double quotes\"",
            "Dad's joke with special chars: !@#$%",
        );
        assert!(!result.is_empty());
        assert!(result.contains("Chuck's joke"));
    }

    #[test]
    fn test_combine_is_deterministic() {
        let a = joke("Chuck Norris can divide by zero.");
        let b = joke("What do you call a fake noodle? An impasta.");
        assert_eq!(combine(&a, &b), combine(&a, &b));
    }

    #[test]
    fn test_combine_does_not_touch_inputs() {
        let a = joke("Setup line. Extra.");
        let b = joke("Is this a question? Yes it is.");
        let _ = combine(&a, &b);
        assert_eq!(a.as_str(), "Setup line. Extra.");
        assert_eq!(b.as_str(), "Is this a question? Yes it is.");
    }
}
