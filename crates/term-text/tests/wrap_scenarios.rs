//! Paragraph wrapping scenarios: plain, padded, indented and aligned.
//!
//! Every case also checks that the returned line count agrees with the
//! number of `\n`-separated lines in the output.

use term_text::{
    Alignment, display_width, wrap, wrap_left_padded, wrap_with_indent, wrap_with_indent_align,
};

const LOREM: &str = concat!(
    "The Lorem ipsum text is typically composed of pseudo-Latin words. ",
    "It is commonly used as placeholder text to examine or demonstrate the visual ",
    "effects of various graphic design."
);

const CJK_LOREM: &str = concat!(
    "婞一枳郲逴靲屮蜧曀殳，掫乇峔掮傎溒兀緉冘仜。郼牪艽螗媷錵朸一",
    "詅掜豗怙刉笀丌，楀棶乇矹迡搦囷圣亍昄漚粁仈祂。覂一洳袶揙楱亍",
    "滻瘯毌，掗屮柅軡菵腩乜榵毌夯。勼哻怌婇怤灟葠雺奷朾恦扰衪岨坋",
    "誁乇芚誙腞。冇笉妺悆浂鱦賌廌灱灱觓坋佫呬耴跣兀枔蓔輈。嵅咍犴",
    "膰痭瘰机一靬涽捊矷尒玶乇，煚塈丌岰陊鉖怞戉兀甿跾觓夬侄。棩岧",
    "汌橩僁螗玎一逭舴圂衪扐衲兀，嵲媕亍衩衿溽昃夯丌侄蒰扂丱呤。毰",
    "侘妅錣廇螉仴一暀淖蚗佶庂咺丌，輀鈁乇彽洢溦洰氶乇构碨洐巿阹。",
);

const OT_LINE: &str = "OT: there are alternatives to maintainer-/user-set priority, e.g. \"[user pain](http://www.lostgarden.com/2008/05/improving-bug-triage-with-user-pain.html)\".";

#[track_caller]
fn assert_wrapped((out, lines): (String, usize), expected: &str) {
    assert_eq!(out, expected);
    assert_eq!(lines, expected.split('\n').count(), "line count of {expected:?}");
}

// ---------------------------------------------------------------------------
// wrap
// ---------------------------------------------------------------------------

#[test]
fn wrap_table() {
    let cases = [
        // a simple word passes through
        ("foo", "foo", 4),
        // long words are split
        ("foobarbaz", "foob\narba\nz", 4),
        // lines break at whitespace
        ("foo bar baz", "foo\nbar\nbaz", 4),
        ("foo bars bazzes", "foo\nbars\nbazz\nes", 4),
        ("fo sop", "fo\nsop", 4),
        // a tab counts as four spaces
        ("foo\nb\t r\n baz", "foo\nb\nr\n baz", 4),
        // whitespace at break points is dropped
        ("foo    \nb   ar   ", "foo\n\nb\nar\n", 4),
        // a final line break is preserved
        ("foo bar baz\n", "foo\nbar\nbaz\n", 4),
        // explicit breaks are always preserved
        ("\nfoo bar\n\n\nbaz\n", "\nfoo\nbar\n\n\nbaz\n", 4),
        // escapes travel with their word
        ("foo \x1b[31mbar\x1b[0m baz", "foo\n\x1b[31mbar\x1b[0m\nbaz", 4),
        // escapes inside a word
        ("foo b\x1b[31mbar\x1b[0mr baz", "foo\nb\x1b[31mbar\n\x1b[0mr\nbaz", 4),
        // split word carrying escapes
        ("foo bb\x1b[31mbar\x1b[0mr baz", "foo\nbb\x1b[31mba\nr\x1b[0mr\nbaz", 4),
        // complete example
        (" This is a list: \n\n\t* foo\n\t* bar\n\n\n\t* baz  \nBAM    ", " This\nis a\nlist:\n\n    *\nfoo\n    *\nbar\n\n\n    *\nbaz\nBAM\n", 6),
        // wide runes
        ("一只敏捷的狐狸跳过了一只懒狗。", "一只敏捷的狐\n狸跳过了一只\n懒狗。", 12),
        // wide runes with escapes
        ("一只敏捷的\x1b[31m狐狸跳过\x1b[0m了一只懒狗。", "一只敏捷的\x1b[31m狐\n狸跳过\x1b[0m了一只\n懒狗。", 12),
        // mixed wide and narrow
        ("敏捷 A quick 的狐狸 fox 跳过 jumps over a lazy 了一只懒狗 dog。", "敏捷 A quick\n的狐狸 fox\n跳过 jumps\nover a lazy\n了一只懒狗\ndog。", 12),
        // mixed with escapes
        ("敏捷 A \x1b31mquick 的狐狸 fox 跳\x1b0m过 jumps over a lazy 了一只懒狗 dog。", "敏捷 A \x1b31mquick\n的狐狸 fox\n跳\x1b0m过 jumps\nover a lazy\n了一只懒狗\ndog。", 12),
        // escapes at both ends
        ("\x1b31m敏捷 A quick 的狐狸 fox 跳过 jumps over a lazy 了一只懒狗 dog。\x1b0m", "\x1b31m敏捷 A quick\n的狐狸 fox\n跳过 jumps\nover a lazy\n了一只懒狗\ndog。\x1b0m", 12),
    ];

    for (input, expected, width) in cases {
        let (out, lines) = wrap(input, width);
        assert_eq!(out, expected, "{input:?} at {width}");
        assert_eq!(lines, expected.split('\n').count(), "{input:?} at {width}");
    }
}

// ---------------------------------------------------------------------------
// Padding and indentation
// ---------------------------------------------------------------------------

#[test]
fn left_padded_lorem() {
    assert_wrapped(
        wrap_left_padded(LOREM, 59, 4),
        concat!(
            "    The Lorem ipsum text is typically composed of\n",
            "    pseudo-Latin words. It is commonly used as placeholder\n",
            "    text to examine or demonstrate the visual effects of\n",
            "    various graphic design.",
        ),
    );
}

#[test]
fn left_padded_cjk() {
    assert_wrapped(
        wrap_left_padded(CJK_LOREM, 59, 4),
        concat!(
            "    婞一枳郲逴靲屮蜧曀殳，掫乇峔掮傎溒兀緉冘仜。郼牪艽螗媷\n",
            "    錵朸一詅掜豗怙刉笀丌，楀棶乇矹迡搦囷圣亍昄漚粁仈祂。覂\n",
            "    一洳袶揙楱亍滻瘯毌，掗屮柅軡菵腩乜榵毌夯。勼哻怌婇怤灟\n",
            "    葠雺奷朾恦扰衪岨坋誁乇芚誙腞。冇笉妺悆浂鱦賌廌灱灱觓坋\n",
            "    佫呬耴跣兀枔蓔輈。嵅咍犴膰痭瘰机一靬涽捊矷尒玶乇，煚塈\n",
            "    丌岰陊鉖怞戉兀甿跾觓夬侄。棩岧汌橩僁螗玎一逭舴圂衪扐衲\n",
            "    兀，嵲媕亍衩衿溽昃夯丌侄蒰扂丱呤。毰侘妅錣廇螉仴一暀淖\n",
            "    蚗佶庂咺丌，輀鈁乇彽洢溦洰氶乇构碨洐巿阹。",
        ),
    );
}

#[test]
fn left_padded_long_url() {
    assert_wrapped(
        wrap_left_padded(OT_LINE, 58, 4),
        concat!(
            "    OT: there are alternatives to maintainer-/user-set\n",
            "    priority, e.g. \"[user pain](http://www.lostgarden.com/\n",
            "    2008/05/improving-bug-triage-with-user-pain.html)\".",
        ),
    );
}

#[test]
fn hanging_indent_lorem() {
    assert_wrapped(
        wrap_with_indent(LOREM, 59, "  ", "      "),
        concat!(
            "  The Lorem ipsum text is typically composed of\n",
            "      pseudo-Latin words. It is commonly used as\n",
            "      placeholder text to examine or demonstrate the visual\n",
            "      effects of various graphic design.",
        ),
    );
}

#[test]
fn hanging_indent_cjk() {
    assert_wrapped(
        wrap_with_indent(CJK_LOREM, 59, "  ", "      "),
        concat!(
            "  婞一枳郲逴靲屮蜧曀殳，掫乇峔掮傎溒兀緉冘仜。郼牪艽螗媷錵\n",
            "      朸一詅掜豗怙刉笀丌，楀棶乇矹迡搦囷圣亍昄漚粁仈祂。覂\n",
            "      一洳袶揙楱亍滻瘯毌，掗屮柅軡菵腩乜榵毌夯。勼哻怌婇怤\n",
            "      灟葠雺奷朾恦扰衪岨坋誁乇芚誙腞。冇笉妺悆浂鱦賌廌灱灱\n",
            "      觓坋佫呬耴跣兀枔蓔輈。嵅咍犴膰痭瘰机一靬涽捊矷尒玶乇\n",
            "      ，煚塈丌岰陊鉖怞戉兀甿跾觓夬侄。棩岧汌橩僁螗玎一逭舴\n",
            "      圂衪扐衲兀，嵲媕亍衩衿溽昃夯丌侄蒰扂丱呤。毰侘妅錣廇\n",
            "      螉仴一暀淖蚗佶庂咺丌，輀鈁乇彽洢溦洰氶乇构碨洐巿阹。",
        ),
    );
}

#[test]
fn hanging_indent_long_url() {
    assert_wrapped(
        wrap_with_indent(OT_LINE, 58, "  ", "      "),
        concat!(
            "  OT: there are alternatives to maintainer-/user-set\n",
            "      priority, e.g. \"[user pain](http://www.lostgarden.co\n",
            "      m/2008/05/improving-bug-triage-with-user-pain.html)\"\n",
            "      .",
        ),
    );
}

// ---------------------------------------------------------------------------
// Alignment within the decoration's room
// ---------------------------------------------------------------------------

#[test]
fn centered_lorem() {
    assert_wrapped(
        wrap_with_indent_align(
            LOREM,
            63,
            "<indent>",
            "<pad>",
            Alignment::Center,
        ),
        concat!(
            "<indent>     The Lorem ipsum text is typically composed of\n",
            "<pad>  pseudo-Latin words. It is commonly used as placeholder\n",
            "<pad>   text to examine or demonstrate the visual effects of\n",
            "<pad>                 various graphic design.",
        ),
    );
}

#[test]
fn right_aligned_cjk() {
    assert_wrapped(
        wrap_with_indent_align(
            CJK_LOREM,
            59,
            "<indent>",
            "<pad>",
            Alignment::Right,
        ),
        concat!(
            "<indent> 婞一枳郲逴靲屮蜧曀殳，掫乇峔掮傎溒兀緉冘仜。郼牪艽\n",
            "<pad>螗媷錵朸一詅掜豗怙刉笀丌，楀棶乇矹迡搦囷圣亍昄漚粁仈祂\n",
            "<pad>。覂一洳袶揙楱亍滻瘯毌，掗屮柅軡菵腩乜榵毌夯。勼哻怌婇\n",
            "<pad>怤灟葠雺奷朾恦扰衪岨坋誁乇芚誙腞。冇笉妺悆浂鱦賌廌灱灱\n",
            "<pad>觓坋佫呬耴跣兀枔蓔輈。嵅咍犴膰痭瘰机一靬涽捊矷尒玶乇，\n",
            "<pad>煚塈丌岰陊鉖怞戉兀甿跾觓夬侄。棩岧汌橩僁螗玎一逭舴圂衪\n",
            "<pad>扐衲兀，嵲媕亍衩衿溽昃夯丌侄蒰扂丱呤。毰侘妅錣廇螉仴一\n",
            "<pad>        暀淖蚗佶庂咺丌，輀鈁乇彽洢溦洰氶乇构碨洐巿阹。",
        ),
    );
}

#[test]
fn centered_long_url() {
    assert_wrapped(
        wrap_with_indent_align(
            OT_LINE,
            54,
            "<indent>",
            "<pad>",
            Alignment::Center,
        ),
        concat!(
            "<indent>        OT: there are alternatives to\n",
            "<pad>maintainer-/user-set priority, e.g. \"[user pain](\n",
            "<pad>http://www.lostgarden.com/2008/05/improving-bug-t\n",
            "<pad>          riage-with-user-pain.html)\".",
        ),
    );
}

#[test]
fn centered_with_escaped_wide_decorations() {
    assert_wrapped(
        wrap_with_indent_align(
            LOREM,
            63,
            "\x1b[31m狐狸跳过\x1b[0m",
            "\x1b[31m狐\x1b[0m",
            Alignment::Center,
        ),
        concat!(
            "\x1b[31m狐狸跳过\x1b[0m     The Lorem ipsum text is typically composed of\n",
            "\x1b[31m狐\x1b[0m pseudo-Latin words. It is commonly used as placeholder text\n",
            "\x1b[31m狐\x1b[0m   to examine or demonstrate the visual effects of various\n",
            "\x1b[31m狐\x1b[0m                       graphic design.",
        ),
    );
}

#[test]
fn too_wide_indent_stands_alone() {
    assert_wrapped(
        wrap_with_indent_align(
            LOREM,
            20,
            "<indentindentindent>",
            "<pad>",
            Alignment::Left,
        ),
        concat!(
            "<indentindentindent>\n",
            "<pad>The Lorem ipsum\n",
            "<pad>text is\n",
            "<pad>typically\n",
            "<pad>composed of\n",
            "<pad>pseudo-Latin\n",
            "<pad>words. It is\n",
            "<pad>commonly used\n",
            "<pad>as placeholder\n",
            "<pad>text to examine\n",
            "<pad>or demonstrate\n",
            "<pad>the visual\n",
            "<pad>effects of\n",
            "<pad>various graphic\n",
            "<pad>design.",
        ),
    );
}

#[test]
fn too_wide_pad_leaves_content_bare() {
    let (out, lines) = wrap_with_indent_align(
        LOREM,
        20,
        "<indentindentindent>",
        "<padpadpadpadpadpad>",
        Alignment::Left,
    );
    let rows: Vec<&str> = out.split('\n').collect();
    assert_eq!(lines, rows.len());
    assert_eq!(rows[0], "<indentindentindent>");
    assert_eq!(rows[1], "<padpadpadpadpadpad>");
    assert!(rows[2..].iter().all(|row| display_width(row) <= 1));
    let content: String = rows[2..].concat();
    assert_eq!(content, LOREM.replace(' ', ""));
}

// ---------------------------------------------------------------------------
// Properties of the output
// ---------------------------------------------------------------------------

#[test]
fn every_line_fits_the_width() {
    for width in [12, 20, 33, 59, 80] {
        for text in [LOREM, CJK_LOREM] {
            let (out, _) = wrap_with_indent(text, width, "  ", "    ");
            for line in out.split('\n') {
                assert!(display_width(line) <= width, "{line:?} wider than {width}");
            }
        }
    }
}

#[test]
fn wrapping_only_moves_whitespace() {
    let text = "敏捷 A \x1b[31mquick 的狐狸 fox 跳\x1b[0m过 jumps over a lazy 了一只懒狗 dog。";
    for width in 2..30 {
        let (out, _) = wrap(text, width);
        let squeeze = |s: &str| s.split_whitespace().collect::<String>();
        assert_eq!(squeeze(&out), squeeze(text), "at width {width}");
    }
}
