use eyre::{bail, eyre, Result, WrapErr};

use taper_core::clipboard::copy_text;
use taper_core::page::Page;
use taper_core::route::{PageRouter, TabRouter};
use taper_flowchart::error::FlowchartError;
use taper_flowchart::graph::Flowchart;
use taper_flowchart::nav::Navigation;
use taper_flowchart::render::{render as render_step, StepBody, StepView};
use taper_regimen::benzo::{Benzodiazepine, RegimenSelection, SeverityTier};
use taper_regimen::drinks;
use taper_regimen::view::RegimenView;
use taper_scales::error::ScaleError;
use taper_scales::sheet::ScoreSheet;
use taper_scales::view::{form_view, ScaleForm};
use taper_scales::Scale;

use crate::render;

/// Whether the event loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One scoring tab: a scale definition plus its live sheet.
pub struct ScaleTab {
    pub scale: Box<dyn Scale>,
    pub sheet: ScoreSheet,
}

/// Client state. One page is visible at a time; the flowchart session, the
/// per-scale sheets, and the regimen selection all live for the whole run.
pub struct App {
    page: Page,
    flowchart: Flowchart,
    nav: Navigation,
    tabs: Vec<ScaleTab>,
    active_tab: usize,
    regimen: RegimenSelection,
    clipboard: render::TerminalClipboard,
}

impl App {
    pub fn new(flowchart: Flowchart) -> Self {
        let nav = Navigation::start(&flowchart);
        let tabs = taper_scales::all_scales()
            .into_iter()
            .map(|scale| {
                let sheet = ScoreSheet::new(scale.as_ref());
                ScaleTab { scale, sheet }
            })
            .collect();

        Self {
            page: Page::Home,
            flowchart,
            nav,
            tabs,
            active_tab: 0,
            regimen: RegimenSelection::default(),
            clipboard: render::TerminalClipboard,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// View of the current flowchart step.
    pub fn step(&self) -> Result<StepView, FlowchartError> {
        render_step(&self.flowchart, &self.nav)
    }

    pub fn scale_tabs(&self) -> &[ScaleTab] {
        &self.tabs
    }

    pub fn active_tab_index(&self) -> usize {
        self.active_tab
    }

    /// Form view of the active scoring tab.
    pub fn active_form(&self) -> ScaleForm {
        let tab = &self.tabs[self.active_tab];
        form_view(tab.scale.as_ref(), &tab.sheet)
    }

    pub fn regimen_selection(&self) -> RegimenSelection {
        self.regimen
    }

    pub fn regimen_view(&self) -> RegimenView {
        self.regimen.view()
    }

    /// Run one command line. Errors are reported to the caller; state is
    /// left as the failed command found it.
    pub fn dispatch(&mut self, line: &str) -> Result<Flow> {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Ok(Flow::Continue);
        };
        let args: Vec<&str> = parts.collect();

        match command {
            "help" => render::help(),
            "quit" | "exit" => return Ok(Flow::Quit),
            "pages" => render::pages(),
            "home" => {
                self.show_page(Page::Home);
                self.render_page()?;
            }
            "open" => self.open(&args)?,
            "choose" => self.choose(&args)?,
            "back" => {
                self.nav.go_back();
                self.page = Page::AlcoholWithdrawal;
                self.render_page()?;
            }
            "restart" => {
                self.nav.restart(&self.flowchart);
                self.page = Page::AlcoholWithdrawal;
                self.render_page()?;
            }
            "jump" => self.jump(&args)?,
            "tab" | "scale" => self.goto_scale(&args)?,
            "rate" => self.rate(&args)?,
            "clear" => self.clear(&args)?,
            "reset" => self.reset()?,
            "drug" => self.drug(&args)?,
            "tier" => self.tier(&args)?,
            "volume" => self.volume(&args)?,
            "tally" => self.tally(&args)?,
            "copy" => self.copy()?,
            "json" => self.json()?,
            _ => bail!("unknown command: {command} (try 'help')"),
        }
        Ok(Flow::Continue)
    }

    fn render_page(&self) -> Result<()> {
        render::page(self)?;
        Ok(())
    }

    fn open(&mut self, args: &[&str]) -> Result<()> {
        let slug = args.first().ok_or_else(|| eyre!("expected: open <page>"))?;
        let page =
            Page::from_slug(slug).ok_or_else(|| eyre!("unknown page: {slug} (try 'pages')"))?;
        self.show_page(page);
        self.render_page()
    }

    /// Answer option `n` on a question, or follow guideline action `n` on
    /// an outcome.
    fn choose(&mut self, args: &[&str]) -> Result<()> {
        let index = parse_index(args.first())?;
        match self.step()?.body {
            StepBody::Question { .. } => {
                self.nav.advance(&self.flowchart, index)?;
                self.page = Page::AlcoholWithdrawal;
            }
            StepBody::Outcome { actions, .. } => {
                let action = actions
                    .get(index)
                    .ok_or_else(|| eyre!("no action {}", index + 1))?;
                self.show_page(action.page);
            }
        }
        self.render_page()
    }

    fn jump(&mut self, args: &[&str]) -> Result<()> {
        let index = parse_index(args.first())?;
        self.nav.jump_to(index);
        self.page = Page::AlcoholWithdrawal;
        self.render_page()
    }

    fn goto_scale(&mut self, args: &[&str]) -> Result<()> {
        let id = args.first().ok_or_else(|| eyre!("expected: scale <id>"))?;
        if !self.tabs.iter().any(|t| t.scale.id() == *id) {
            return Err(ScaleError::UnknownScale((*id).to_string()).into());
        }
        self.show_page(Page::Scales);
        self.show_tab(id);
        self.render_page()
    }

    fn rate(&mut self, args: &[&str]) -> Result<()> {
        let item = parse_index(args.first())?;
        let option = parse_index(args.get(1))?;
        let tab = &mut self.tabs[self.active_tab];
        tab.sheet.select(tab.scale.as_ref(), item, option)?;
        self.page = Page::Scales;
        self.render_page()
    }

    fn clear(&mut self, args: &[&str]) -> Result<()> {
        let item = parse_index(args.first())?;
        let tab = &mut self.tabs[self.active_tab];
        tab.sheet.clear(item);
        self.page = Page::Scales;
        self.render_page()
    }

    fn reset(&mut self) -> Result<()> {
        let tab = &mut self.tabs[self.active_tab];
        tab.sheet.reset(tab.scale.as_ref());
        self.page = Page::Scales;
        self.render_page()
    }

    fn drug(&mut self, args: &[&str]) -> Result<()> {
        let drug = match args.first().copied() {
            Some("diazepam") => Benzodiazepine::Diazepam,
            Some("oxazepam") => Benzodiazepine::Oxazepam,
            _ => bail!("expected: drug diazepam|oxazepam"),
        };
        self.regimen.select_drug(drug);
        self.show_page(Page::InpatientGuidelines);
        self.render_page()
    }

    fn tier(&mut self, args: &[&str]) -> Result<()> {
        let tier = match args.first().copied() {
            Some("mild") => SeverityTier::Mild,
            Some("moderate") => SeverityTier::Moderate,
            Some("severe") => SeverityTier::Severe,
            _ => bail!("expected: tier mild|moderate|severe"),
        };
        self.regimen.select_tier(tier);
        self.show_page(Page::InpatientGuidelines);
        self.render_page()
    }

    fn volume(&self, args: &[&str]) -> Result<()> {
        let [volume, abv] = args else {
            bail!("expected: volume <mL> <ABV%>");
        };
        let block =
            drinks::format_volume_result(drinks::parse_quantity(volume), drinks::parse_quantity(abv));
        println!("{block}");
        Ok(())
    }

    fn tally(&self, args: &[&str]) -> Result<()> {
        if args.is_empty() || args.len() % 2 != 0 {
            bail!("expected: tally <qty> <beverage> [<qty> <beverage> ...]");
        }
        let presets = drinks::beverage_presets();
        let mut entries = Vec::new();
        for pair in args.chunks(2) {
            let preset = presets
                .iter()
                .find(|p| p.key == pair[1])
                .ok_or_else(|| eyre!("unknown beverage: {}", pair[1]))?;
            entries.push((drinks::parse_quantity(pair[0]), preset.standard_drinks));
        }
        println!("{}", drinks::format_total(drinks::total_standard_drinks(&entries)));
        Ok(())
    }

    /// Copy the EMR block for the current page. Clipboard trouble is logged
    /// and swallowed; the session continues either way.
    fn copy(&mut self) -> Result<()> {
        let text = match self.page {
            Page::AlcoholWithdrawal => match self.step()?.body {
                StepBody::Outcome {
                    emr_summary: Some(summary),
                    ..
                } => summary,
                _ => bail!("the current step has no EMR summary"),
            },
            Page::Scales => {
                let tab = &self.tabs[self.active_tab];
                tab.sheet.summary(tab.scale.as_ref())
            }
            _ => bail!("nothing to copy on this page"),
        };
        if !copy_text(&self.clipboard, &text) {
            println!("clipboard unavailable.");
        }
        Ok(())
    }

    /// Dump the current page's view model as JSON.
    fn json(&self) -> Result<()> {
        let dump = match self.page {
            Page::AlcoholWithdrawal => serde_json::to_string_pretty(&self.step()?),
            Page::Scales => serde_json::to_string_pretty(&self.active_form()),
            Page::InpatientGuidelines => serde_json::to_string_pretty(&self.regimen_view()),
            _ => bail!("no structured view for this page"),
        }
        .wrap_err("view serialization failed")?;
        println!("{dump}");
        Ok(())
    }
}

impl PageRouter for App {
    fn show_page(&mut self, page: Page) {
        // Opening the flowchart page always begins a fresh session.
        if page == Page::AlcoholWithdrawal {
            self.nav.restart(&self.flowchart);
        }
        self.page = page;
    }
}

impl TabRouter for App {
    fn show_tab(&mut self, tab_key: &str) {
        if let Some(index) = self.tabs.iter().position(|t| t.scale.id() == tab_key) {
            self.active_tab = index;
        }
    }
}

/// Parse a 1-based on-screen number into a 0-based index.
fn parse_index(arg: Option<&&str>) -> Result<usize> {
    let raw = arg.ok_or_else(|| eyre!("expected a number"))?;
    let n: usize = raw
        .parse()
        .wrap_err_with(|| format!("not a number: {raw}"))?;
    if n == 0 {
        bail!("numbering starts at 1");
    }
    Ok(n - 1)
}
