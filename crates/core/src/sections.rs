//! Form section state: capability flags and disclosure focus.
//!
//! Two independent concerns live here:
//!
//! - [`SectionVisibility`]: whether the optional hospital-stay and surgery
//!   sections participate in validation and progress. Toggling a flag off
//!   never touches the underlying sub-record data.
//! - [`SectionFocus`]: which disclosure group is currently expanded in the
//!   accordion. Pure UI-focus state, independent of enablement and of
//!   validity.

use serde::{Deserialize, Serialize};

/// Capability flags for the two optional sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionVisibility {
    /// Hospital-stay section enabled: admission and discharge dates join
    /// the required set
    pub include_hospital_stay: bool,

    /// Surgery section enabled: surgery type and date join the required set
    pub include_surgery: bool,
}

/// Identifier of a disclosure group in the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionId {
    Basic,
    Diagnostic,
    HospitalStay,
    Surgery,
}

/// Accordion focus: at most one section is expanded at a time.
///
/// Selecting a section makes it the sole expanded one; selecting the
/// currently expanded section collapses it, leaving nothing expanded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionFocus {
    expanded: Option<SectionId>,
}

impl SectionFocus {
    /// Starts with the basic-information section expanded, as the form does
    /// on mount.
    pub fn new() -> Self {
        Self {
            expanded: Some(SectionId::Basic),
        }
    }

    /// Selects a section: expand it, or collapse it if already expanded.
    pub fn toggle(&mut self, section: SectionId) {
        self.expanded = if self.expanded == Some(section) {
            None
        } else {
            Some(section)
        };
    }

    /// Whether the given section is the expanded one.
    pub fn is_expanded(&self, section: SectionId) -> bool {
        self.expanded == Some(section)
    }

    /// The currently expanded section, if any.
    pub fn expanded(&self) -> Option<SectionId> {
        self.expanded
    }
}

impl Default for SectionFocus {
    fn default() -> Self {
        Self::new()
    }
}
