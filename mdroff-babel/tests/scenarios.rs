//! End-to-end behaviour shared by every dialect.

use crate::common::{body, convert};
use mdroff_babel::{transform, ConvertError, Dialect};

/// Header lines each dialect writes for a document without a title line.
fn header_lines(dialect: Dialect) -> usize {
    match dialect {
        Dialect::Man | Dialect::Mdoc => 1,
        Dialect::Mm => 0,
        Dialect::Mom => 5,
    }
}

#[test]
fn test_empty_document_is_preamble_only() {
    for dialect in Dialect::ALL {
        let out = convert(dialect, "");
        assert_eq!(out.lines().count(), 2 + header_lines(dialect), "{dialect}");
        assert!(out.starts_with(".\\\" x-roff document\n.do mso "), "{dialect}");
        assert_eq!(body(&out, header_lines(dialect)), "", "{dialect}");
    }
}

#[test]
fn test_first_level_header_is_a_major_section() {
    assert!(convert(Dialect::Mm, "# Title\n").contains("\n.SH Title\n"));
    assert!(convert(Dialect::Mom, "# Title\n").contains("\n.HEADING 1 \"Title\"\n"));
    // man and mdoc take a leading `# ` line as their .TH arguments
    assert!(convert(Dialect::Man, "text\n# Title\n").contains("\n.SH Title\n"));
    assert!(convert(Dialect::Mdoc, "text\n# Title\n").contains("\n.Sh Title\n"));
}

#[test]
fn test_bold_followed_by_text() {
    let out = convert(Dialect::Man, "**bold** text\n");
    assert_eq!(body(&out, 1), "\\fBbold\\fP text\n");
}

#[test]
fn test_ordered_list_ignores_later_literals() {
    let out = convert(Dialect::Man, "1. first\n5. second\n");
    assert_eq!(body(&out, 1), ".IP 1. 4\nfirst\n.IP 2. 4\nsecond\n");
}

#[test]
fn test_inline_code_per_dialect() {
    let expected = [
        (Dialect::Man, "`\\f[CR]code\\fP'\n"),
        (Dialect::Mdoc, "`\\f[CR]code\\fP'\n"),
        (Dialect::Mm, "`\\f[CR]code\\fP'\n"),
        (Dialect::Mom, "`\\*[CODE]code\\*[CODE OFF]'\n"),
    ];
    for (dialect, code) in expected {
        let out = convert(dialect, "`code`");
        assert_eq!(body(&out, header_lines(dialect)), code, "{dialect}");
    }
}

#[test]
fn test_web_link_per_dialect() {
    let expected = [
        (Dialect::Man, ".UR http://x.test\nExample\n.UE\n"),
        (Dialect::Mdoc, ".Lk http://x.test \"Example\"\n"),
        (Dialect::Mm, "Example <http://x.test>\n"),
        (Dialect::Mom, "Example \\*[UL]http://x.test\\*[ULX]\n"),
    ];
    for (dialect, link) in expected {
        let out = convert(dialect, "[Example](http://x.test)");
        assert_eq!(body(&out, header_lines(dialect)), link, "{dialect}");
    }
}

#[test]
fn test_unterminated_code_span_fails() {
    for dialect in Dialect::ALL {
        let err = transform("doc", "`abc", dialect).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::UnterminatedCodeSpan { line: 1, column: 1 }
        ));
    }
}

#[test]
fn test_level_four_headers_diverge_by_dialect() {
    // man renders deep headers as a run-in label; the others as subsections
    let source = "x\n#### Deep\n";
    assert!(convert(Dialect::Man, source).ends_with(".TP\n\\fBDeep\\fR\n"));
    assert!(convert(Dialect::Mdoc, source).ends_with(".Ss Deep\n"));
    assert!(convert(Dialect::Mm, source).ends_with(".SS Deep\n"));
    assert!(convert(Dialect::Mom, source).ends_with(".HEADING 3 \"Deep\"\n"));
}

#[test]
fn test_list_state_does_not_leak_between_documents() {
    let first = convert(Dialect::Mdoc, "- a\n  - b\n");
    let second = convert(Dialect::Mdoc, "- c\n");
    assert_eq!(first.matches(".El").count(), 2);
    assert!(second.contains(".Bl -bullet -offset indent\n.It\nc\n.El\n"));
}

#[test]
fn test_independent_conversions_in_parallel() {
    let handles: Vec<_> = Dialect::ALL
        .into_iter()
        .map(|dialect| std::thread::spawn(move || convert(dialect, "1. a\n2. b\n")))
        .collect();
    for handle in handles {
        let out = handle.join().unwrap();
        assert!(out.contains("\na\n") && out.contains("\nb\n"));
    }
}
