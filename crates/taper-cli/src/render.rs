use taper_core::clipboard::{Clipboard, ClipboardError};
use taper_core::page::Page;
use taper_core::text::strip_markup;
use taper_flowchart::error::FlowchartError;
use taper_flowchart::render::{StepBody, StepView};
use taper_regimen::benzo::RegimenSelection;
use taper_regimen::drinks::beverage_presets;
use taper_regimen::view::RegimenView;
use taper_scales::view::ScaleForm;

use crate::app::App;

/// Clipboard host for a terminal session: there is no system clipboard to
/// reach, so the block is printed for copying from the scrollback.
pub struct TerminalClipboard;

impl Clipboard for TerminalClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        println!("----- copy -----");
        println!("{text}");
        println!("----------------");
        Ok(())
    }
}

/// Draw the current page.
pub fn page(app: &App) -> Result<(), FlowchartError> {
    println!();
    match app.page() {
        Page::Home => home(),
        Page::AlcoholWithdrawal => step(&app.step()?),
        Page::Scales => scales(app),
        Page::StandardDrinks => drinks(),
        Page::OtherSyndromes => other_syndromes(),
        Page::InpatientGuidelines => regimen(&app.regimen_view(), app.regimen_selection()),
        Page::AmbulatoryGuidelines => ambulatory(),
    }
    Ok(())
}

pub fn help() {
    println!("commands:");
    println!("  pages                         list pages");
    println!("  open <page>, home             navigate");
    println!("  choose <n>                    answer the current question / follow action n");
    println!("  back, restart, jump <n>       flowchart history");
    println!("  scale <id>                    open a scoring scale");
    println!("  rate <item> <option>          select a grade on the active scale");
    println!("  clear <item>, reset           clear one item / the whole form");
    println!("  drug diazepam|oxazepam        regimen drug");
    println!("  tier mild|moderate|severe     regimen severity tier");
    println!("  volume <mL> <ABV%>            standard drinks from volume and strength");
    println!("  tally <qty> <beverage> ...    standard drinks from preset serves");
    println!("  copy                          copy the current EMR summary");
    println!("  json                          dump the current view as JSON");
    println!("  quit");
}

pub fn pages() {
    for page in Page::ALL {
        println!("  {:<28} {}", page.slug(), page.title());
    }
}

fn home() {
    println!("== Withdrawal Assistant ==");
    println!();
    for page in Page::ALL.into_iter().filter(|p| *p != Page::Home) {
        println!("  {:<28} {}", page.slug(), page.title());
    }
    println!();
    println!("(open <page>, help)");
}

fn step(view: &StepView) {
    let trail: Vec<&str> = view.breadcrumbs.iter().map(|b| b.title.as_str()).collect();
    println!("{}", trail.join(" > "));
    println!();
    println!("{}", view.prompt);
    println!();

    match &view.body {
        StepBody::Question { options } => {
            for (index, label) in options.iter().enumerate() {
                println!("  [{}] {}", index + 1, label);
            }
            let mut hints = vec!["choose <n>"];
            if view.can_go_back {
                hints.push("back");
            }
            hints.push("restart");
            hints.push("jump <n>");
            println!();
            println!("({})", hints.join(", "));
        }
        StepBody::Outcome {
            emr_summary,
            actions,
        } => {
            if let Some(summary) = emr_summary {
                println!("EMR Summary");
                println!("{summary}");
                println!();
            }
            for (index, action) in actions.iter().enumerate() {
                println!("  [{}] {}", index + 1, action.label);
            }
            println!();
            println!("(copy, choose <n>, back, restart, jump <n>)");
        }
    }
}

fn scales(app: &App) {
    let tabs: Vec<String> = app
        .scale_tabs()
        .iter()
        .enumerate()
        .map(|(index, tab)| {
            if index == app.active_tab_index() {
                format!("[{}]", tab.scale.id())
            } else {
                tab.scale.id().to_string()
            }
        })
        .collect();
    println!("tabs: {}", tabs.join("  "));
    form(&app.active_form());
}

fn form(form: &ScaleForm) {
    println!();
    println!("== {} ==", form.name);
    if let Some(note) = &form.note {
        println!("{note}");
    }
    println!();

    for (index, field) in form.fields.iter().enumerate() {
        println!("{:>2}. {}", index + 1, field.name);
        for (option_index, option) in field.options.iter().enumerate() {
            let mark = if option.selected { "(x)" } else { "( )" };
            println!(
                "    {mark} [{}] {} ({})",
                option_index + 1,
                strip_markup(&option.label),
                option.value
            );
        }
    }

    println!();
    println!("total: {}    severity: {}", form.total, form.severity);
    println!();
    println!("{}", form.summary);
    println!();
    println!("(rate <item> <option>, clear <item>, reset, copy, scale <id>)");
}

fn regimen(view: &RegimenView, selection: RegimenSelection) {
    println!("== Inpatient Guidelines ==");
    println!("benzodiazepine: {}", selection.drug.name());
    println!();
    println!("{}", view.title);
    println!("Scheduled Dosing:");
    for line in &view.schedule {
        println!("  - {line}");
    }
    println!("PRN Dosing:");
    for line in &view.prn {
        println!("  - {line}");
    }
    println!();
    println!("(drug diazepam|oxazepam, tier mild|moderate|severe, json)");
}

fn drinks() {
    println!("== Standard Drink Calculator ==");
    println!();
    println!("By serve (tally <qty> <beverage> ...):");
    for preset in beverage_presets() {
        println!(
            "  {:<12} {:<40} {:.1} std drinks",
            preset.key, preset.label, preset.standard_drinks
        );
    }
    println!();
    println!("By volume: volume <mL> <ABV%>");
}

fn other_syndromes() {
    println!("== Other Withdrawal Syndromes ==");
    println!();
    println!("  Opioid withdrawal             scale cows");
    println!("  Benzodiazepine withdrawal     scale ciwa-b");
    println!("  Cannabis withdrawal           scale nsw-cws");
    println!("  Cannabis withdrawal (27-item) scale cwas");
}

fn ambulatory() {
    println!("== Ambulatory Detox Guidelines ==");
    println!();
    println!("Refer to the local ambulatory withdrawal protocol for eligibility,");
    println!("daily review arrangements and take-home dosing limits.");
}
