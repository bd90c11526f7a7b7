use crate::common::{body, convert, convert_fixture};
use insta::assert_snapshot;
use mdroff_babel::Dialect;

#[test]
fn test_kitchensink() {
    let out = convert_fixture(Dialect::Mdoc, "kitchensink.md");
    assert_snapshot!(out, @r#"
.\" x-roff document
.do mso mdoc.tmac
.TH MD2ROFF 1 2024-05-01
.Pp
.Sh NAME
.Pp
md2roff - convert \fBMarkdown\fP to \fIroff\fP
.Pp
.Sh OPTIONS
.Pp
.Bl -bullet -offset indent
.It
`\f[CR]-n\fP' selects man
.It
`\f[CR]-d\fP' selects mdoc
.Bl -enum -offset indent
.It
nested one
.It
nested two
.El
.Pp
.Bd -literal -offset indent
md2roff -n doc.md
.Ed
.El
.Pp
See
.Xr md2roff 1
and
.Lk https://example.test "the site"
\&.
.Pp
.Sh Setext Title
.Pp
.FT B
.br
Notes
.br
.FT P
"#);
}

#[test]
fn test_every_open_list_is_closed() {
    let out = convert(Dialect::Mdoc, "- a\n  - b\n    - c\n");
    assert_eq!(out.matches(".Bl").count(), 3);
    assert_eq!(out.matches(".El").count(), 3);
    assert!(out.contains(".Bl -bullet -offset indent\n.It\na\n.Bl -dash -offset indent\n"));
}

#[test]
fn test_mail_link_is_an_author() {
    let out = convert(Dialect::Mdoc, "[Jane Doe](jane@x.test)\n");
    assert_eq!(body(&out, 1), ".An Jane Doe Aq Mt jane@x.test\n");
}
