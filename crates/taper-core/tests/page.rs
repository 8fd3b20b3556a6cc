use taper_core::page::Page;

#[test]
fn slugs_round_trip() {
    for page in Page::ALL {
        assert_eq!(
            Page::from_slug(page.slug()),
            Some(page),
            "slug {} should resolve back to {page:?}",
            page.slug()
        );
    }
}

#[test]
fn unknown_slug_resolves_to_none() {
    assert_eq!(Page::from_slug("settings-page"), None);
    assert_eq!(Page::from_slug(""), None);
}

#[test]
fn serialized_form_is_the_slug() {
    for page in Page::ALL {
        let json = serde_json::to_string(&page).expect("page serializes");
        assert_eq!(json, format!("\"{}\"", page.slug()));
    }
}

#[test]
fn guideline_pages_exist_for_outcome_links() {
    // Outcome nodes in the flowchart link to exactly these two pages.
    assert_eq!(Page::InpatientGuidelines.slug(), "inpatient-guidelines-page");
    assert_eq!(Page::AmbulatoryGuidelines.slug(), "ambulatory-guidelines-page");
}
