//! Numbered-reply realignment.
//!
//! The completion service is asked to answer with one numbered line per
//! input sentence, but nothing forces it to comply: lines go missing, get
//! renumbered, or split across extra lines. Realignment recovers a list
//! whose length exactly equals the sentence count regardless — shortfalls
//! are padded with empty strings (dropped translations, not a crash) and
//! surplus segments are merged into the final expected slot.

use std::sync::LazyLock;

use regex::Regex;

use crate::translator::BatchReplies;

/// "newline, digits, dot, space" opens a numbered line.
static LINE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\d+\. ").expect("static pattern"));

/// First numbered marker anywhere; what precedes it is preamble, what
/// follows is line 1.
static HEAD_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\. ").expect("static pattern"));

/// Parse the batch replies back into exactly `total` entries, in order.
pub fn realign(batches: &BatchReplies, total: usize) -> Vec<String> {
    if total == 0 {
        return Vec::new();
    }

    let law = batches.law;
    let reply_count = batches.replies.len();
    let mut lines = Vec::with_capacity(total);

    for (k, reply) in batches.replies.iter().enumerate() {
        let expected = if k + 1 == reply_count {
            (total - 1) % law + 1
        } else {
            law
        };

        let segments = numbered_segments(reply);
        if segments.len() != expected {
            tracing::warn!(
                batch = k,
                got = segments.len(),
                expected,
                "reply ignored numbering discipline; realigning"
            );
        }
        lines.extend(pad_or_merge(segments, expected));
    }

    debug_assert_eq!(lines.len(), total);
    lines
}

/// Split one reply into its numbered segments, newline-stripped. The text
/// before the first line marker is segment 1, minus a leading "N. " when
/// the reply numbers its first line. A reply with no markers at all is one
/// segment.
fn numbered_segments(reply: &str) -> Vec<String> {
    let markers: Vec<_> = LINE_MARKER.find_iter(reply).collect();
    let head_start = HEAD_MARKER
        .find(reply)
        .filter(|m| markers.first().is_none_or(|first| m.end() <= first.start()))
        .map_or(0, |m| m.end());

    let Some(first) = markers.first() else {
        return vec![clean(&reply[head_start..])];
    };

    let mut segments = Vec::with_capacity(markers.len() + 1);
    segments.push(clean(&reply[head_start..first.start()]));
    for pair in markers.windows(2) {
        segments.push(clean(&reply[pair[0].end()..pair[1].start()]));
    }
    if let Some(last) = markers.last() {
        segments.push(clean(&reply[last.end()..]));
    }
    segments
}

/// Restore the expected entry count: pad a shortfall with empty strings,
/// space-join any surplus into the final slot.
fn pad_or_merge(mut segments: Vec<String>, expected: usize) -> Vec<String> {
    if segments.len() < expected {
        segments.resize(expected, String::new());
    } else {
        let tail = segments.split_off(expected - 1);
        segments.push(tail.join(" "));
    }
    segments
}

fn clean(text: &str) -> String {
    text.replace('\n', "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn batches(law: usize, replies: &[&str]) -> BatchReplies {
        BatchReplies {
            law,
            replies: replies.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn well_formed_replies_map_one_to_one() {
        let reply = indoc! {"
            1. The weather is nice today.
            2. It will rain tomorrow.
            3. Let us begin.
        "};
        let lines = realign(&batches(3, &[reply]), 3);
        assert_eq!(
            lines,
            [
                "The weather is nice today.",
                "It will rain tomorrow.",
                "Let us begin.",
            ]
        );
    }

    #[test]
    fn global_numbering_in_the_second_batch_still_splits() {
        let first = "1. a\n2. b\n3. c\n";
        let second = "4. d\n5. e\n";
        let lines = realign(&batches(3, &[first, second]), 5);
        assert_eq!(lines, ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn short_reply_pads_trailing_entries_with_empty_strings() {
        // 12 sentences at law 10: the second batch expects 2 entries but
        // the reply numbered only one line.
        let first = "1. a\n2. b\n3. c\n4. d\n5. e\n6. f\n7. g\n8. h\n9. i\n10. j\n";
        let second = "11. only line\n";
        let lines = realign(&batches(10, &[first, second]), 12);
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[10], "only line");
        assert_eq!(lines[11], "");
    }

    #[test]
    fn surplus_segments_merge_into_the_final_slot() {
        let reply = "1. a\n2. b\n3. c\n4. d\n5. e\n";
        let lines = realign(&batches(3, &[reply]), 3);
        assert_eq!(lines, ["a", "b", "c d e"]);
    }

    #[test]
    fn reply_without_any_numbering_becomes_line_one() {
        let lines = realign(&batches(3, &["just some prose, renumbered away"]), 3);
        assert_eq!(lines, ["just some prose, renumbered away", "", ""]);
    }

    #[test]
    fn preamble_before_the_first_marker_counts_as_line_one() {
        let reply = "Sure, here are the translations:\n1. a\n2. b\n";
        let lines = realign(&batches(2, &[reply]), 2);
        assert_eq!(lines, ["Sure, here are the translations:", "a b"]);
    }

    #[test]
    fn newlines_inside_an_entry_are_stripped() {
        let reply = "1. a line\nwrapped over\n2. b\n";
        let lines = realign(&batches(2, &[reply]), 2);
        assert_eq!(lines, ["a linewrapped over", "b"]);
    }

    #[test]
    fn length_invariant_holds_for_malformed_batches() {
        // Fuzz-ish sweep: every reply shape must still restore the count.
        let shapes = [
            "",
            "\n",
            "no numbers at all",
            "1. one\n1. one again\n1. and again\n",
            "2. started at two\n5. jumped\n",
            "1. a\n2. b\n3. c\n4. d\n",
        ];
        for shape in shapes {
            let lines = realign(&batches(3, &[shape]), 3);
            assert_eq!(lines.len(), 3, "shape {:?}", shape);
        }
    }

    #[test]
    fn last_batch_expectation_wraps_on_exact_multiples() {
        // 20 sentences at law 10: the last batch expects a full 10.
        let full = "1. a\n2. b\n3. c\n4. d\n5. e\n6. f\n7. g\n8. h\n9. i\n10. j\n";
        let lines = realign(&batches(10, &[full, full]), 20);
        assert_eq!(lines.len(), 20);
        assert_eq!(lines[19], "j");
    }

    #[test]
    fn no_sentences_no_lines() {
        let lines = realign(&batches(10, &[]), 0);
        assert!(lines.is_empty());
    }
}
