use crate::common::{body, convert, convert_fixture};
use mdroff_babel::Dialect;

#[test]
fn test_kitchensink() {
    let out = convert_fixture(Dialect::Mm, "kitchensink.md");
    assert!(out.starts_with(".\\\" x-roff document\n.do mso m.tmac\n.SH MD2ROFF 1 2024-05-01\n.PP\n"));
    assert!(out.contains(".BL\n.LI\n`\\f[CR]-n\\fP' selects man\n.LE\n.LI\n"));
    assert!(out.contains(".AL\n.LI\nnested one\n.LE\n.LI\nnested two\n.LE\n.PP\n"));
    assert!(out.contains(".EE\n.RE\n.LE\n.PP\n"));
    assert!(out.contains("See\nmd2roff 1\nand\nthe site <https://example.test>\n\\&.\n"));
    assert!(out.ends_with(".FT B\n.br\nNotes\n.br\n.FT P\n"));
}

#[test]
fn test_no_header_is_written() {
    let out = convert(Dialect::Mm, "");
    assert_eq!(out, ".\\\" x-roff document\n.do mso m.tmac\n");
}

#[test]
fn test_ordered_list() {
    let out = convert(Dialect::Mm, "1. a\n2. b\n");
    assert_eq!(body(&out, 0), ".AL\n.LI\na\n.LE\n.LI\nb\n.LE\n");
}
