use sortext::grapheme::{
    byte_len, checked_length, checked_ordinal, cluster_at, cluster_count, infix, infix_while,
    max_byte_len, prefix, prefix_while, replace, scalar_count, substring, suffix, utf16_len,
};
use sortext::prelude::*;

const FLAGS: &str = "🇩🇪🇺🇸🇫🇷🇮🇹🇬🇧🇪🇸🇯🇵🇷🇺🇨🇳";
const EMOJI: &str = "🇩🇪👨‍👩‍👧‍👦👩‍❤️‍👩🇺🇸🇫🇷🇮🇹🇬🇧🇪🇸🇯🇵🇷🇺🇨🇳";
const PLAYGROUND: &str = "Hello, playground";

#[test]
fn test_composed_and_decomposed_e() {
    let composed = "\u{00E9}";
    let decomposed = "e\u{0301}";

    assert_eq!(cluster_count(composed), 1);
    assert_eq!(cluster_count(decomposed), 1);
    assert_eq!(byte_len(composed, Encoding::Utf8), 2);
    assert_eq!(byte_len(decomposed, Encoding::Utf8), 3);
    assert_eq!(byte_len(composed, Encoding::Utf16), 2);
    assert_eq!(byte_len(decomposed, Encoding::Utf32), 8);
    assert_ne!(composed, decomposed);
}

#[test]
fn test_flag_sequences() {
    assert_eq!(cluster_count(FLAGS), 9);
    assert_eq!(scalar_count(FLAGS), 18);
    assert_eq!(byte_len(FLAGS, Encoding::Utf8), 18 * 4);
    assert_eq!(cluster_count(&format!("{FLAGS}!")), 10);

    for n in 1..=9 {
        let flags = prefix(FLAGS, n);
        assert_eq!(cluster_count(flags), n);
        assert_eq!(byte_len(flags, Encoding::Utf8), n * 8);
    }
}

#[test]
fn test_zwj_sequences_are_single_clusters() {
    assert_eq!(cluster_count(EMOJI), 11);
    assert_eq!(cluster_at(EMOJI, 1), Ok("👨‍👩‍👧‍👦"));
    assert_eq!(cluster_at(EMOJI, 2), Ok("👩‍❤️‍👩"));
    assert_eq!(cluster_at(EMOJI, 10), Ok("🇨🇳"));
}

#[test]
fn test_carriage_return_line_feed() {
    assert_eq!(cluster_count("\r\n"), 1);
    assert_eq!(byte_len("\r\n", Encoding::Utf8), 2);
    assert_eq!(byte_len("\r\n", Encoding::Ascii), 2);
    assert_eq!(utf16_len("\r\n"), 2);

    assert_eq!(cluster_count("\n\r"), 2);
    assert_eq!(cluster_count("\n\r\r\n"), 3);
    assert_eq!(byte_len("\n\r\r\n", Encoding::Utf8), 4);

    assert_eq!(cluster_count("🇺🇸"), 1);
    assert_eq!(cluster_count("🇺🇸\n"), 2);
    assert_eq!(cluster_count("🇺🇸\r"), 2);
    assert_eq!(cluster_count("🇺🇸\r\n"), 2);
    assert_eq!(byte_len("🇺🇸\r\n", Encoding::Utf8), 10);
    assert_eq!(byte_len("🇺🇸\r\n", Encoding::Utf16), 12);
    assert_eq!(byte_len("🇺🇸\r\n", Encoding::Ascii), 0);
}

#[test]
fn test_counts_under_each_interpretation() {
    let spain = "España";
    assert_eq!(cluster_count(spain), 6);
    assert_eq!(scalar_count(spain), 6);
    assert_eq!(utf16_len(spain), 6);
    assert_eq!(byte_len(spain, Encoding::Utf8), 7);

    let dog = "Dog‼🐶";
    assert_eq!(cluster_count(dog), 5);
    assert_eq!(byte_len(dog, Encoding::Utf8), 10);
    assert_eq!(byte_len(dog, Encoding::Utf32), 20);
    assert_eq!(utf16_len(dog), 6);

    let cafe = "Cafe\u{0301}";
    assert_eq!(cluster_count(cafe), 4);
    assert_eq!(scalar_count(cafe), 5);
    assert_eq!(byte_len(cafe, Encoding::Utf8), 6);
    assert_eq!(byte_len(cafe, Encoding::Utf16), 10);

    let numbers = "12\n34\n";
    assert_eq!(cluster_count(numbers), 6);
    assert_eq!(utf16_len(numbers), 6);
    assert_eq!(byte_len(numbers, Encoding::Utf16), utf16_len(numbers) * 2);

    let ligature = "ﬃ ffi";
    assert_eq!(cluster_count(ligature), 5);
    assert_eq!(byte_len(ligature, Encoding::Utf32), 20);
}

#[test]
fn test_ascii_length() {
    assert_eq!(byte_len("hello", Encoding::Ascii), 5);
    assert_eq!(byte_len("hello", Encoding::Ascii), cluster_count("hello"));
    assert_eq!(byte_len("héllo", Encoding::Ascii), 0);
    assert_eq!(byte_len("\u{80}", Encoding::Ascii), 0);
    assert_eq!(byte_len("\u{7F}", Encoding::Ascii), 1);
    assert_eq!(byte_len("", Encoding::Ascii), 0);
}

#[test]
fn test_max_byte_len_bounds_exact_length() {
    for text in ["", "a", "\u{E9}", "e\u{301}", "ﬃ", FLAGS, EMOJI, "\r\n", "Dog‼🐶"] {
        for encoding in Encoding::ALL {
            assert!(
                max_byte_len(text, encoding) >= byte_len(text, encoding),
                "{text:?} {encoding:?}"
            );
        }
    }
}

#[test]
fn test_infix_clamps() {
    assert_eq!(infix(PLAYGROUND, 2, None), "llo, playground");
    assert_eq!(infix(PLAYGROUND, 16, None), "d");
    assert_eq!(infix(PLAYGROUND, 17, None), "");
    assert_eq!(infix(PLAYGROUND, 30, None), "");
    assert_eq!(infix(PLAYGROUND, 70, None), "");

    assert_eq!(infix(PLAYGROUND, 16, Some(0)), "");
    assert_eq!(infix(PLAYGROUND, 16, Some(1)), "d");
    assert_eq!(infix(PLAYGROUND, 16, Some(10)), "d");
    assert_eq!(infix(PLAYGROUND, 17, Some(0)), "");
    assert_eq!(infix(PLAYGROUND, 17, Some(1)), "");
    assert_eq!(infix(PLAYGROUND, 30, Some(10)), "");
    assert_eq!(infix(PLAYGROUND, 2, Some(30)), "llo, playground");
    assert_eq!(infix(PLAYGROUND, 7, Some(10)), "playground");

    assert_eq!(infix("a", 0, Some(2)), "a");
    assert_eq!(infix("", 0, None), "");
}

#[test]
fn test_infix_uses_cluster_ordinals() {
    let text = format!("0123{FLAGS}DEF");
    assert_eq!(cluster_count(&text), 16);
    assert_eq!(utf16_len(&text), 4 + 36 + 3);

    assert_eq!(infix(&text, 4, None), format!("{FLAGS}DEF"));
    assert_eq!(infix(&text, 13, None), "DEF");
    assert_eq!(infix(&text, 2, Some(70)), format!("23{FLAGS}DEF"));
    assert_eq!(infix(&text, 6, Some(4)), "🇫🇷🇮🇹🇬🇧🇪🇸");
    assert_eq!(substring(&text, 5..), infix(&text, 5, None));
}

#[test]
fn test_infix_while() {
    assert_eq!(infix_while("3742961", 1, |c| c != "6"), "7429");
    assert_eq!(infix_while("3742961", 0, |_| true), "3742961");
    assert_eq!(infix_while("3742961", 0, |_| false), "");
    assert_eq!(infix_while("3742961", 9, |_| true), "");

    // The predicate sees whole clusters.
    let mut seen = Vec::new();
    let taken = infix_while(EMOJI, 1, |c| {
        seen.push(c.to_string());
        !c.starts_with('\u{1F1EB}')
    });
    assert_eq!(taken, "👨‍👩‍👧‍👦👩‍❤️‍👩🇺🇸");
    assert_eq!(seen.len(), 4);

    let raw = "126 a.b 22219 zzzzzz";
    assert_eq!(
        prefix_while(raw, |c| c.chars().all(|ch| ch.is_ascii_digit())),
        "126"
    );
}

#[test]
fn test_replace() {
    assert_eq!(replace("🏠🏡🏠🏡🏠", 3, 1, "🐴"), "🏠🏡🏠🐴🏠");
    assert_eq!(replace("🏠🏡🏠🏡🏠", 3, 1, "🐴A"), "🏠🏡🏠🐴A🏠");
    assert_eq!(replace("\u{00E9}Aﬃ🏡🏠", 2, 2, "e"), "\u{00E9}Ae🏠");
    assert_eq!(replace("🏠🏡🏠🏡🏠", 2, 1, "ﬃ🐴A"), "🏠🏡ﬃ🐴A🏡🏠");

    // Clamped removal and pure append.
    assert_eq!(replace("🏠🏡🏠", 1, 50, "!"), "🏠!");
    assert_eq!(replace("🏠🏡🏠", 3, 2, "!"), "🏠🏡🏠!");
    assert_eq!(replace("🏠🏡🏠", 99, 0, "!"), "🏠🏡🏠!");
    assert_eq!(replace("abc", 1, 0, "X"), "aXbc");

    let original = String::from("e\u{301}x");
    let replaced = replace(&original, 0, 1, "é");
    assert_eq!(replaced, "éx");
    assert_eq!(original, "e\u{301}x");
}

#[test]
fn test_substring_range_forms() {
    assert_eq!(substring(EMOJI, ..=4), "🇩🇪👨‍👩‍👧‍👦👩‍❤️‍👩🇺🇸🇫🇷");
    assert_eq!(substring(EMOJI, ..4), "🇩🇪👨‍👩‍👧‍👦👩‍❤️‍👩🇺🇸");
    assert_eq!(substring(EMOJI, 1..=4), "👨‍👩‍👧‍👦👩‍❤️‍👩🇺🇸🇫🇷");
    assert_eq!(substring(EMOJI, 1..4), "👨‍👩‍👧‍👦👩‍❤️‍👩🇺🇸");
    assert_eq!(substring(EMOJI, 6..), "🇬🇧🇪🇸🇯🇵🇷🇺🇨🇳");
    assert_eq!(substring(EMOJI, 6..8), "🇬🇧🇪🇸");
    assert_eq!(substring(EMOJI, ..), EMOJI);
    assert_eq!(substring(EMOJI, 0..cluster_count(EMOJI)), EMOJI);

    assert_eq!(substring("file.swift", 2..=6), "le.sw");
    assert_eq!(substring("abc", ClusterRange::Between(1, 2)), "b");
    assert_eq!(substring("abc", 2..1), "");
    assert_eq!(substring("abc", 5..9), "");
}

#[test]
fn test_prefix_and_suffix() {
    assert_eq!(prefix("\u{E9}", 0), "");
    assert_eq!(prefix("a", 1), "a");
    assert_eq!(prefix("a", 2), "a");
    assert_eq!(suffix("a", 0), "");
    assert_eq!(suffix("a", 1), "a");
    assert_eq!(suffix("a", 2), "a");

    assert_eq!(suffix("Cafe\u{301}", 1), "e\u{301}");
    assert_eq!(suffix("Caf\u{E9}", 1), "\u{E9}");
    assert_eq!(suffix(FLAGS, 2), "🇷🇺🇨🇳");
}

#[test]
fn test_cluster_at_fails_out_of_range() {
    assert_eq!(cluster_at("Guten Tag!", 0), Ok("G"));
    assert_eq!(cluster_at("Guten Tag!", 7), Ok("a"));
    assert_eq!(cluster_at("Guten Tag!", 9), Ok("!"));
    assert_eq!(
        cluster_at("Guten Tag!", 10),
        Err(TextError::OrdinalOutOfRange {
            ordinal: 10,
            count: 10
        })
    );
    assert_eq!(
        cluster_at("", 0),
        Err(TextError::OrdinalOutOfRange {
            ordinal: 0,
            count: 0
        })
    );
    assert_eq!(
        cluster_at("\r\n", 1),
        Err(TextError::OrdinalOutOfRange {
            ordinal: 1,
            count: 1
        })
    );
}

#[test]
fn test_negative_arguments_fail_fast() {
    assert_eq!(checked_ordinal(0), Ok(0));
    assert_eq!(checked_ordinal(12), Ok(12));
    assert_eq!(
        checked_ordinal(-1),
        Err(TextError::NegativeOrdinal { value: -1 })
    );
    assert_eq!(checked_length(3), Ok(3));
    assert_eq!(
        checked_length(-2),
        Err(TextError::NegativeLength { value: -2 })
    );

    let error = checked_ordinal(-2).unwrap_err();
    assert_eq!(error.to_string(), "Negative cluster ordinal: -2");
}

#[test]
fn test_extension_trait_matches_free_functions() {
    let text = "0123🇩🇪🇺🇸DEF";
    assert_eq!(text.cluster_count(), cluster_count(text));
    assert_eq!(text.scalar_count(), scalar_count(text));
    assert_eq!(text.utf16_len(), utf16_len(text));
    assert_eq!(text.byte_len(Encoding::Utf16), byte_len(text, Encoding::Utf16));
    assert_eq!(text.max_byte_len(Encoding::Utf32), max_byte_len(text, Encoding::Utf32));
    assert_eq!(text.cluster_substring(1..5), substring(text, 1..5));
    assert_eq!(text.cluster_prefix(5), prefix(text, 5));
    assert_eq!(text.cluster_suffix(4), suffix(text, 4));
    assert_eq!(text.infix(4, Some(1)), "🇩🇪");
    assert_eq!(text.infix_while(0, |c| c.len() == 1), "0123");
    assert_eq!(text.replace_clusters(4, 2, "-"), "0123-DEF");
    assert_eq!(text.cluster_at(5), Ok("🇺🇸"));
    assert_eq!(text.cluster_cursor().count(), 10);
    assert_eq!(text.cluster_map().len(), 9);
}
