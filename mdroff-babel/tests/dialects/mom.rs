use crate::common::{body, convert, convert_fixture};
use mdroff_babel::{Converter, Dialect, Document, RenderOptions};

#[test]
fn test_kitchensink() {
    let out = convert_fixture(Dialect::Mom, "kitchensink.md");
    assert!(out.starts_with(
        ".\\\" x-roff document\n.do mso mom.tmac\n.TITLE \"kitchensink.md\"\n.AUTHOR \"md2roff\"\n\
         .PAPER A4\n.PRINTSTYLE TYPESET\n.START\n.HEADING 1 \"MD2ROFF 1 2024-05-01\"\n.PP\n"
    ));
    assert!(out.contains(
        ".LIST BULLET\n.ITEM\n`\\*[CODE]-n\\*[CODE OFF]' selects man\n.ITEM\n"
    ));
    assert!(out.contains(".LIST ALPHA\n.ITEM\nnested one\n.ITEM\nnested two\n.LIST OFF\n.PP\n"));
    assert!(out.contains(".CODE\nmd2roff -n doc.md\n.CODE OFF\n.LIST OFF\n.PP\n"));
    assert!(out.contains("the site \\*[UL]https://example.test\\*[ULX]\n"));
    assert!(out.contains(".HEADING 1 \"Setext Title\"\n"));
    assert!(out.ends_with(".DRH\n.BR\nNotes\n.BR\n.DRH\n"));
}

#[test]
fn test_header_fields_come_from_options() {
    let options = RenderOptions {
        mom_author: "Jane Doe".to_string(),
        mom_paper: "LETTER".to_string(),
        mom_printstyle: "TYPEWRITE".to_string(),
        ..crate::common::fixed_options()
    };
    let out = Converter::with_options(Dialect::Mom, options)
        .convert(&Document::new("memo", ""))
        .unwrap();
    assert_eq!(
        body(&out, 0),
        ".TITLE \"memo\"\n.AUTHOR \"Jane Doe\"\n.PAPER LETTER\n.PRINTSTYLE TYPEWRITE\n.START\n"
    );
}

#[test]
fn test_inline_styles() {
    let out = convert(Dialect::Mom, "**a** *b*\n");
    // the space between two escapes touches no word character
    assert_eq!(body(&out, 5), "\\*[BD]a\\*[PREV]\\*[IT]b\\*[PREV]\n");
}
