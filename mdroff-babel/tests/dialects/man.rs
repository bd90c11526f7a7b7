use crate::common::{body, convert, convert_fixture};
use insta::assert_snapshot;
use mdroff_babel::Dialect;

#[test]
fn test_kitchensink() {
    let out = convert_fixture(Dialect::Man, "kitchensink.md");
    assert_snapshot!(out, @r#"
.\" x-roff document
.do mso man.tmac
.TH MD2ROFF 1 2024-05-01
.PP
.SH NAME
.PP
md2roff - convert \fBMarkdown\fP to \fIroff\fP
.PP
.SH OPTIONS
.PP
.IP \(bu 4
`\f[CR]-n\fP' selects man
.IP \(bu 4
`\f[CR]-d\fP' selects mdoc
.IP 1. 4
nested one
.IP 2. 4
nested two
.PP
.RS 4
.EX
md2roff -n doc.md
.EE
.RE
.PP
See
\fBmd2roff\fP(1)
and
.UR https://example.test
the site
.UE
\&.
.PP
.SH Setext Title
.PP
.B
.br
Notes
.br
.FT P
"#);
}

#[test]
fn test_synthesized_th() {
    let out = convert(Dialect::Man, "text\n");
    assert_eq!(
        out,
        ".\\\" x-roff document\n.do mso man.tmac\n.TH doc 7 2024-05-01 document\ntext\n"
    );
}

#[test]
fn test_header_levels() {
    let out = convert(Dialect::Man, "x\n\n## A\n### B\n#### C\n");
    assert_eq!(
        body(&out, 1),
        "x\n.PP\n.SH A\n.SS B\n.TP\n\\fBC\\fR\n"
    );
}

#[test]
fn test_mail_link() {
    let out = convert(Dialect::Man, "[Jane](mailto:jane@x.test)\n");
    assert_eq!(body(&out, 1), ".MT jane@x.test\nJane\n.ME\n");
}

#[test]
fn test_man_reference_without_section() {
    let out = convert(Dialect::Man, "[intro](man)\n");
    assert_eq!(body(&out, 1), "\\fBintro\\fP\n");
}
