use taper_cli::app::{App, Flow};
use taper_core::page::Page;
use taper_core::route::{PageRouter, TabRouter};
use taper_flowchart::alcohol::alcohol_withdrawal;
use taper_flowchart::render::StepBody;

fn app() -> App {
    App::new(alcohol_withdrawal().unwrap())
}

#[test]
fn starts_on_the_home_page_with_a_fresh_session() {
    let app = app();
    assert_eq!(app.page(), Page::Home);
    assert_eq!(app.step().unwrap().breadcrumbs.len(), 1);
}

#[test]
fn showing_the_flowchart_page_restarts_the_session() {
    let mut app = app();
    app.dispatch("open alcohol-withdrawal-page").unwrap();
    app.dispatch("choose 1").unwrap();
    app.dispatch("choose 1").unwrap();
    assert_eq!(app.step().unwrap().breadcrumbs.len(), 3);

    app.dispatch("open home-page").unwrap();
    app.dispatch("open alcohol-withdrawal-page").unwrap();
    assert_eq!(app.step().unwrap().breadcrumbs.len(), 1);
}

#[test]
fn showing_other_pages_preserves_the_session() {
    let mut app = app();
    app.dispatch("open alcohol-withdrawal-page").unwrap();
    app.dispatch("choose 1").unwrap();
    app.show_page(Page::Scales);
    app.show_page(Page::StandardDrinks);
    assert_eq!(app.step().unwrap().breadcrumbs.len(), 2);
}

#[test]
fn back_and_restart_drive_the_history() {
    let mut app = app();
    app.dispatch("open alcohol-withdrawal-page").unwrap();
    app.dispatch("choose 1").unwrap();
    app.dispatch("back").unwrap();
    assert_eq!(app.step().unwrap().breadcrumbs.len(), 1);

    app.dispatch("choose 1").unwrap();
    app.dispatch("choose 1").unwrap();
    app.dispatch("restart").unwrap();
    assert_eq!(app.step().unwrap().breadcrumbs.len(), 1);
}

#[test]
fn following_an_outcome_action_opens_the_guideline_page() {
    let mut app = app();
    app.dispatch("open alcohol-withdrawal-page").unwrap();
    // Referral, withdrawal required, 8-14 drinks, history of seizures.
    for command in ["choose 1", "choose 1", "choose 2", "choose 2"] {
        app.dispatch(command).unwrap();
    }
    match app.step().unwrap().body {
        StepBody::Outcome { ref actions, .. } => {
            assert_eq!(actions.len(), 1);
            assert_eq!(actions[0].label, "View Inpatient Guidelines");
        }
        _ => panic!("expected an outcome step"),
    }

    app.dispatch("choose 1").unwrap();
    assert_eq!(app.page(), Page::InpatientGuidelines);
}

#[test]
fn scale_command_switches_page_and_tab() {
    let mut app = app();
    app.dispatch("scale cows").unwrap();
    assert_eq!(app.page(), Page::Scales);
    assert_eq!(app.active_form().id, "cows");
}

#[test]
fn unknown_scale_is_rejected() {
    let mut app = app();
    let err = app.dispatch("scale ciwa").unwrap_err();
    assert!(err.to_string().contains("unknown scale"));
    assert_eq!(app.page(), Page::Home);
}

#[test]
fn show_tab_ignores_unknown_keys() {
    let mut app = app();
    app.show_tab("cows");
    assert_eq!(app.active_form().id, "cows");
    app.show_tab("nope");
    assert_eq!(app.active_form().id, "cows");
}

#[test]
fn rating_flows_into_the_form_view() {
    let mut app = app();
    app.dispatch("scale saws").unwrap();
    app.dispatch("rate 1 4").unwrap();

    let form = app.active_form();
    assert_eq!(form.total, 3);
    assert_eq!(form.severity, "Mild");
    assert!(form.summary.contains("- Anxious: Severe"));

    app.dispatch("reset").unwrap();
    assert_eq!(app.active_form().total, 0);
}

#[test]
fn sheets_are_independent_per_scale() {
    let mut app = app();
    app.dispatch("scale saws").unwrap();
    app.dispatch("rate 1 2").unwrap();

    app.dispatch("scale cows").unwrap();
    assert_eq!(app.active_form().total, 0);

    app.dispatch("scale saws").unwrap();
    assert_eq!(app.active_form().total, 1);
}

#[test]
fn out_of_range_rating_reports_and_preserves_state() {
    let mut app = app();
    app.dispatch("scale saws").unwrap();
    assert!(app.dispatch("rate 1 9").is_err());
    assert!(app.dispatch("rate 99 1").is_err());
    assert_eq!(app.active_form().total, 0);
}

#[test]
fn one_based_numbering_is_enforced() {
    let mut app = app();
    app.dispatch("scale saws").unwrap();
    assert!(app.dispatch("rate 0 1").is_err());
    assert!(app.dispatch("rate one 1").is_err());
}

#[test]
fn drug_and_tier_commands_update_the_regimen() {
    let mut app = app();
    app.dispatch("drug oxazepam").unwrap();
    app.dispatch("tier severe").unwrap();
    assert_eq!(app.page(), Page::InpatientGuidelines);

    let view = app.regimen_view();
    assert_eq!(view.title, "Severe (CIWA > 20)");
    assert!(view.schedule[0].contains("Oxazepam 60mg"));
}

#[test]
fn tally_accepts_presets_and_rejects_unknown_beverages() {
    let mut app = app();
    app.dispatch("tally 2 full-beer 1 spirits").unwrap();
    assert!(app.dispatch("tally 2 beer-ish").is_err());
    assert!(app.dispatch("tally 2").is_err());
}

#[test]
fn copy_depends_on_what_the_page_shows() {
    let mut app = app();
    assert!(app.dispatch("copy").is_err());

    app.dispatch("open alcohol-withdrawal-page").unwrap();
    assert!(app.dispatch("copy").is_err());

    app.dispatch("scale aws").unwrap();
    app.dispatch("copy").unwrap();
}

#[test]
fn json_dumps_structured_pages_only() {
    let mut app = app();
    assert!(app.dispatch("json").is_err());

    app.dispatch("drug diazepam").unwrap();
    app.dispatch("json").unwrap();

    app.dispatch("scale ciwa-ar").unwrap();
    app.dispatch("json").unwrap();
}

#[test]
fn quit_ends_the_loop_and_blank_lines_do_not() {
    let mut app = app();
    assert!(matches!(app.dispatch("quit").unwrap(), Flow::Quit));
    assert!(matches!(app.dispatch("exit").unwrap(), Flow::Quit));
    assert!(matches!(app.dispatch("").unwrap(), Flow::Continue));
    assert!(matches!(app.dispatch("   ").unwrap(), Flow::Continue));
}

#[test]
fn unknown_commands_are_errors() {
    let mut app = app();
    assert!(app.dispatch("frobnicate").is_err());
    assert_eq!(app.page(), Page::Home);
}
