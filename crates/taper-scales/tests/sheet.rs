use taper_scales::error::ScaleError;
use taper_scales::scales::{aws::Aws, cows::Cows, saws::Saws};
use taper_scales::sheet::ScoreSheet;
use taper_scales::Scale;

#[test]
fn fresh_sheet_selects_the_first_option_of_every_item() {
    let sheet = ScoreSheet::new(&Saws);
    assert_eq!(sheet.len(), 10);
    for index in 0..sheet.len() {
        assert_eq!(sheet.selection(index), Some(0));
    }
    assert_eq!(sheet.total(&Saws), 0);
}

#[test]
fn total_is_the_sum_of_selected_values() {
    let mut sheet = ScoreSheet::new(&Saws);
    sheet.select(&Saws, 0, 3).unwrap();
    sheet.select(&Saws, 4, 2).unwrap();
    sheet.select(&Saws, 9, 1).unwrap();
    assert_eq!(sheet.total(&Saws), 6);
}

#[test]
fn total_uses_option_values_not_indices() {
    // COWS pulse options are worth 0, 1, 2, 4: the last option (index 3)
    // scores 4.
    let mut sheet = ScoreSheet::new(&Cows);
    sheet.select(&Cows, 0, 3).unwrap();
    assert_eq!(sheet.total(&Cows), 4);

    // Gooseflesh options are worth 0, 3, 5.
    sheet.select(&Cows, 10, 1).unwrap();
    assert_eq!(sheet.total(&Cows), 7);
}

#[test]
fn select_replaces_the_previous_selection() {
    let mut sheet = ScoreSheet::new(&Saws);
    sheet.select(&Saws, 2, 3).unwrap();
    sheet.select(&Saws, 2, 1).unwrap();
    assert_eq!(sheet.selection(2), Some(1));
    assert_eq!(sheet.total(&Saws), 1);
}

#[test]
fn cleared_item_contributes_zero() {
    let mut sheet = ScoreSheet::new(&Saws);
    sheet.select(&Saws, 0, 3).unwrap();
    sheet.select(&Saws, 1, 2).unwrap();
    sheet.clear(0);
    assert_eq!(sheet.selection(0), None);
    assert_eq!(sheet.total(&Saws), 2);
}

#[test]
fn clear_out_of_range_is_a_no_op() {
    let mut sheet = ScoreSheet::new(&Saws);
    sheet.clear(100);
    assert_eq!(sheet.len(), 10);
    assert_eq!(sheet.total(&Saws), 0);
}

#[test]
fn reset_returns_every_item_to_its_first_option() {
    let mut sheet = ScoreSheet::new(&Saws);
    sheet.select(&Saws, 0, 3).unwrap();
    sheet.select(&Saws, 5, 2).unwrap();
    sheet.clear(7);
    sheet.reset(&Saws);
    for index in 0..sheet.len() {
        assert_eq!(sheet.selection(index), Some(0));
    }
    assert_eq!(sheet.total(&Saws), 0);
}

#[test]
fn select_rejects_unknown_item() {
    let mut sheet = ScoreSheet::new(&Aws);
    let err = sheet.select(&Aws, 7, 0).unwrap_err();
    match err {
        ScaleError::NoSuchItem { scale_id, index } => {
            assert_eq!(scale_id, "aws");
            assert_eq!(index, 7);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn select_rejects_unknown_option() {
    let mut sheet = ScoreSheet::new(&Aws);
    // Tremor is the only AWS item graded 0-3, so index 4 is out of range.
    let err = sheet.select(&Aws, 1, 4).unwrap_err();
    match err {
        ScaleError::NoSuchOption { item_key, index } => {
            assert_eq!(item_key, "aws-tremor");
            assert_eq!(index, 4);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn failed_select_leaves_the_sheet_untouched() {
    let mut sheet = ScoreSheet::new(&Aws);
    sheet.select(&Aws, 1, 2).unwrap();
    assert!(sheet.select(&Aws, 1, 9).is_err());
    assert_eq!(sheet.selection(1), Some(2));
}

#[test]
fn maximal_sheet_reaches_the_scale_maximum() {
    let mut sheet = ScoreSheet::new(&Cows);
    for (index, item) in Cows.items().iter().enumerate() {
        sheet.select(&Cows, index, item.options.len() - 1).unwrap();
    }
    assert_eq!(sheet.total(&Cows), Cows.max_score());
}
