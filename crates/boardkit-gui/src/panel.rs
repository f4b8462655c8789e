//! Settings panel navigation state.
//!
//! Tabs and their sub-views are plain data; every transition is an
//! explicit method call. Switching tabs discards the sub-state of the tab
//! being left, like an unmounted section would.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Top-level tabs of the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsTab {
    #[default]
    General,
    Credentials,
    Integrations,
    Danger,
}

impl SettingsTab {
    pub const ALL: [Self; 4] = [
        Self::General,
        Self::Credentials,
        Self::Integrations,
        Self::Danger,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Credentials => "credentials",
            Self::Integrations => "integrations",
            Self::Danger => "danger",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Credentials => "Credentials",
            Self::Integrations => "Integrations",
            Self::Danger => "Danger Zone",
        }
    }

    /// Tab to show when the panel opens. Unknown ids fall back to
    /// [`SettingsTab::General`].
    pub fn from_initial(initial: Option<&str>) -> Self {
        initial.and_then(|id| id.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for SettingsTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SettingsTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.id() == s)
            .ok_or_else(|| format!("Unknown settings tab: {s}"))
    }
}

/// Sub-view of the integrations tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum IntegrationsView {
    /// Installed servers
    #[default]
    List,
    /// Catalog of addable integrations, optionally with the custom form open
    #[serde(rename_all = "camelCase")]
    Add { custom_form: bool },
}

/// Rename form of the general tab.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralForm {
    /// Edited name; `None` while untouched
    pub draft: Option<String>,
    pub saving: bool,
}

impl GeneralForm {
    /// Whether the draft differs from `current`.
    pub fn has_changes(&self, current: &str) -> bool {
        self.draft.as_deref().is_some_and(|draft| draft != current)
    }

    /// The name the form shows.
    pub fn value<'a>(&'a self, current: &'a str) -> &'a str {
        self.draft.as_deref().unwrap_or(current)
    }
}

/// Two-step delete confirmation of the danger tab.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DangerForm {
    pub confirming: bool,
    pub typed: String,
}

/// Navigation and form state of an open panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelState {
    pub open: bool,
    pub tab: SettingsTab,
    pub integrations: IntegrationsView,
    pub general: GeneralForm,
    pub danger: DangerForm,
}

impl PanelState {
    /// State of a freshly opened panel.
    pub fn opened(initial_tab: Option<&str>) -> Self {
        Self {
            open: true,
            tab: SettingsTab::from_initial(initial_tab),
            ..Self::default()
        }
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Switch tabs, resetting all tab sub-state.
    pub fn select_tab(&mut self, tab: SettingsTab) {
        *self = Self {
            open: self.open,
            tab,
            ..Self::default()
        };
    }

    /// Show the add-integration catalog.
    pub fn open_add_view(&mut self) {
        if self.tab != SettingsTab::Integrations {
            self.select_tab(SettingsTab::Integrations);
        }
        self.integrations = IntegrationsView::Add { custom_form: false };
    }

    /// Show the custom server form inside the add view.
    pub fn open_custom_form(&mut self) {
        self.open_add_view();
        self.integrations = IntegrationsView::Add { custom_form: true };
    }

    /// Step back one level inside the integrations tab.
    ///
    /// Returns `false` when already at the top.
    pub fn back(&mut self) -> bool {
        match self.integrations {
            IntegrationsView::Add { custom_form: true } => {
                self.integrations = IntegrationsView::Add { custom_form: false };
                true
            }
            IntegrationsView::Add { custom_form: false } => {
                self.integrations = IntegrationsView::List;
                true
            }
            IntegrationsView::List => false,
        }
    }

    /// Return to the server list after an integration was added.
    pub fn show_list(&mut self) {
        self.integrations = IntegrationsView::List;
    }

    pub fn set_name_draft(&mut self, draft: impl Into<String>) {
        self.general.draft = Some(draft.into());
    }

    pub fn cancel_rename(&mut self) {
        self.general = GeneralForm::default();
    }

    pub fn show_delete_confirm(&mut self) {
        self.danger.confirming = true;
    }

    pub fn set_delete_text(&mut self, typed: impl Into<String>) {
        self.danger.typed = typed.into();
    }

    pub fn cancel_delete(&mut self) {
        self.danger = DangerForm::default();
    }
}
