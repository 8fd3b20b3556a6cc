/// Strip HTML-ish markup from a label before it enters generated summary
/// text. Scale option labels may carry simple presentation tags; clinical
/// summaries must be plain text. An unclosed `<` swallows the remainder of
/// the string rather than leaking raw markup.
pub fn strip_markup(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut in_tag = false;
    for ch in label.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
