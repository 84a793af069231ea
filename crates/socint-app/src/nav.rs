//! Tab navigation state.
//!
//! One pane per entity domain, each remembering its own sub-tab and
//! selection. Switching domains never touches another pane's state, and the
//! analysis sub-tab is reachable only while its domain has a selection.

use serde::Serialize;

use socint_core::EntityKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubTab {
    Management,
    Analysis,
}

/// Per-domain navigation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pane {
    pub sub_tab: SubTab,
    pub selection: Option<String>,
}

impl Default for Pane {
    fn default() -> Self {
        Self {
            sub_tab: SubTab::Management,
            selection: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Navigator {
    active: EntityKind,
    campaign: Pane,
    brand: Pane,
    content: Pane,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Initial state: campaign domain, every pane at management with no
    /// selection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: EntityKind::Campaign,
            campaign: Pane::default(),
            brand: Pane::default(),
            content: Pane::default(),
        }
    }

    #[must_use]
    pub fn active_domain(&self) -> EntityKind {
        self.active
    }

    #[must_use]
    pub fn pane(&self, domain: EntityKind) -> &Pane {
        match domain {
            EntityKind::Campaign => &self.campaign,
            EntityKind::Brand => &self.brand,
            EntityKind::Content => &self.content,
        }
    }

    #[must_use]
    pub fn active_pane(&self) -> &Pane {
        self.pane(self.active)
    }

    fn pane_mut(&mut self, domain: EntityKind) -> &mut Pane {
        match domain {
            EntityKind::Campaign => &mut self.campaign,
            EntityKind::Brand => &mut self.brand,
            EntityKind::Content => &mut self.content,
        }
    }

    /// Make `domain` the active tab. Other panes keep their sub-tab and
    /// selection untouched.
    pub fn switch_domain(&mut self, domain: EntityKind) {
        self.active = domain;
    }

    /// Store a selection for the active domain and move its pane to the
    /// analysis sub-tab.
    pub fn select(&mut self, entity_id: String) {
        let pane = self.pane_mut(self.active);
        pane.selection = Some(entity_id);
        pane.sub_tab = SubTab::Analysis;
    }

    /// Leave the active domain's analysis view: clear the selection, back to
    /// management.
    pub fn back(&mut self) {
        let pane = self.pane_mut(self.active);
        pane.selection = None;
        pane.sub_tab = SubTab::Management;
    }

    /// Try to activate a sub-tab on the active pane. Analysis is a disabled
    /// transition without a selection; returns whether the transition
    /// applied.
    pub fn activate(&mut self, sub_tab: SubTab) -> bool {
        let pane = self.pane_mut(self.active);
        match sub_tab {
            SubTab::Management => {
                pane.sub_tab = SubTab::Management;
                true
            }
            SubTab::Analysis => {
                if pane.selection.is_some() {
                    pane.sub_tab = SubTab::Analysis;
                    true
                } else {
                    false
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_campaign_management() {
        let nav = Navigator::new();
        assert_eq!(nav.active_domain(), EntityKind::Campaign);
        for domain in [EntityKind::Campaign, EntityKind::Brand, EntityKind::Content] {
            assert_eq!(nav.pane(domain).sub_tab, SubTab::Management);
            assert_eq!(nav.pane(domain).selection, None);
        }
    }

    #[test]
    fn select_moves_the_active_pane_to_analysis() {
        let mut nav = Navigator::new();
        nav.select("camp_001".to_string());
        assert_eq!(nav.active_pane().sub_tab, SubTab::Analysis);
        assert_eq!(nav.active_pane().selection.as_deref(), Some("camp_001"));
    }

    #[test]
    fn back_clears_selection_and_returns_to_management() {
        let mut nav = Navigator::new();
        nav.select("camp_001".to_string());
        nav.back();
        assert_eq!(nav.active_pane().sub_tab, SubTab::Management);
        assert_eq!(nav.active_pane().selection, None);
    }

    #[test]
    fn domains_keep_independent_pane_state() {
        let mut nav = Navigator::new();
        nav.select("camp_001".to_string());

        nav.switch_domain(EntityKind::Brand);
        // The brand pane must not inherit the campaign pane's analysis tab.
        assert_eq!(nav.active_pane().sub_tab, SubTab::Management);
        assert_eq!(nav.active_pane().selection, None);

        nav.select("brand_001".to_string());
        nav.switch_domain(EntityKind::Campaign);
        // And the campaign pane still remembers its own state.
        assert_eq!(nav.active_pane().sub_tab, SubTab::Analysis);
        assert_eq!(nav.active_pane().selection.as_deref(), Some("camp_001"));
        assert_eq!(
            nav.pane(EntityKind::Brand).selection.as_deref(),
            Some("brand_001")
        );
    }

    #[test]
    fn analysis_tab_is_disabled_without_a_selection() {
        let mut nav = Navigator::new();
        assert!(!nav.activate(SubTab::Analysis));
        assert_eq!(nav.active_pane().sub_tab, SubTab::Management);

        nav.select("camp_001".to_string());
        nav.activate(SubTab::Management);
        assert!(nav.activate(SubTab::Analysis));
        assert_eq!(nav.active_pane().sub_tab, SubTab::Analysis);
    }
}
