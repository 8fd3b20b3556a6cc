use crate::page::Page;

/// Trait implemented by the page-navigation collaborator.
///
/// The router owns page activation: showing a page deactivates every other
/// page. Implementations must re-enter the alcohol-withdrawal flowchart
/// (restart its navigation) whenever [`Page::AlcoholWithdrawal`] is shown —
/// the flowchart's session state does not survive leaving the page.
pub trait PageRouter {
    fn show_page(&mut self, page: Page);
}

/// Trait implemented by the tab-navigation collaborator.
///
/// Activates one scoring scale's panel within the scales page by its tab
/// key (the scale id). Scoring state is indifferent to which tab is visible.
pub trait TabRouter {
    fn show_tab(&mut self, tab_key: &str);
}
