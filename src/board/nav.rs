//! Section navigation state.
//!
//! The board's top-level panels form a one-of-N selector: activating a
//! navigation item hides every section, clears every highlight, highlights
//! exactly the activated item, and shows the section whose id matches the
//! item's declared target. Highlight and visibility can diverge when an
//! item declares a target no section carries.

/// A navigation item and the section id it reveals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    pub target: String,
}

impl NavItem {
    pub fn new(label: &str, target: &str) -> Self {
        Self {
            label: label.to_string(),
            target: target.to_string(),
        }
    }
}

/// A content section addressable by navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub title: String,
}

impl Section {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
        }
    }
}

/// Which item is highlighted and which section is visible.
///
/// Nothing is selected until the first activation.
#[derive(Debug, Clone, Default)]
pub struct SectionNav {
    items: Vec<NavItem>,
    sections: Vec<Section>,
    highlighted: Option<usize>,
    visible: Option<usize>,
}

impl SectionNav {
    pub fn new(items: Vec<NavItem>, sections: Vec<Section>) -> Self {
        Self {
            items,
            sections,
            highlighted: None,
            visible: None,
        }
    }

    /// Activate the item at `index`.
    ///
    /// The highlight always lands on the activated item. Visibility lands
    /// on the section matching the item's target; with no match, no
    /// section is visible. Activating an already-selected item leaves the
    /// state unchanged. An out-of-range index is ignored.
    pub fn activate(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }

        self.highlighted = Some(index);

        let target = &self.items[index].target;
        self.visible = self.sections.iter().position(|s| &s.id == target);
    }

    /// Activate the item whose label matches `label`, case-insensitively.
    ///
    /// Returns `false` when no item carries that label.
    pub fn activate_by_label(&mut self, label: &str) -> bool {
        let wanted = label.trim().to_lowercase();
        match self
            .items
            .iter()
            .position(|item| item.label.to_lowercase() == wanted)
        {
            Some(index) => {
                self.activate(index);
                true
            }
            None => false,
        }
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Index of the highlighted item, if any.
    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn highlighted(&self) -> Option<&NavItem> {
        self.highlighted.map(|i| &self.items[i])
    }

    /// The single visible section, if any.
    pub fn visible_section(&self) -> Option<&Section> {
        self.visible.map(|i| &self.sections[i])
    }
}
