use taper_core::text::strip_markup;

#[test]
fn plain_text_passes_through() {
    assert_eq!(strip_markup("Moderate sweating"), "Moderate sweating");
}

#[test]
fn tags_are_removed() {
    assert_eq!(
        strip_markup("<b>7</b> — constant nausea and <i>frequent</i> dry heaves"),
        "7 — constant nausea and frequent dry heaves"
    );
}

#[test]
fn unclosed_tag_swallows_remainder() {
    assert_eq!(strip_markup("severe <b tremor"), "severe ");
}

#[test]
fn empty_label_stays_empty() {
    assert_eq!(strip_markup(""), "");
}

#[test]
fn adjacent_tags_leave_no_residue() {
    assert_eq!(strip_markup("<b></b><i></i>0"), "0");
}
