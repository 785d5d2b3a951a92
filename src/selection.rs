//! Feature selection and detail-panel dispatch.
//!
//! `SelectionState` is owned by the top-level app. The map is its only
//! writer: each click constructs a fresh `SelectedFeature` and replaces the
//! previous one wholesale. `detail_view` projects (selection, tab) into the
//! content the sidebar renders.

use crate::data::{BoundaryFeature, EarthquakeEvent, VolcanoSite};

pub const PLACEHOLDER_TEXT: &str =
    "Click on a plate boundary, volcano, or earthquake to see details here.";
pub const NO_INFORMATION_TEXT: &str = "No information available for the selected feature.";

/// The map element the user clicked last.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SelectedFeature {
    #[default]
    None,
    Plate {
        name: String,
        plate_a: String,
        plate_b: String,
        boundary_type: Option<String>,
    },
    Volcano {
        name: String,
        kind: String,
    },
    Earthquake {
        magnitude: f64,
        depth_km: f64,
    },
}

impl SelectedFeature {
    pub fn from_boundary(b: &BoundaryFeature) -> Self {
        Self::Plate {
            name: b.name.clone(),
            plate_a: b.plate_a.clone(),
            plate_b: b.plate_b.clone(),
            boundary_type: b.raw_type.clone(),
        }
    }

    pub fn from_volcano(v: &VolcanoSite) -> Self {
        Self::Volcano {
            name: v.name.clone(),
            kind: v.kind.clone(),
        }
    }

    pub fn from_earthquake(q: &EarthquakeEvent) -> Self {
        Self::Earthquake {
            magnitude: q.magnitude,
            depth_km: q.depth_km,
        }
    }

    /// Short name for logging.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Plate { .. } => "plate",
            Self::Volcano { .. } => "volcano",
            Self::Earthquake { .. } => "earthquake",
        }
    }
}

/// Top-level sidebar toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Details,
    Education,
}

impl DetailTab {
    pub const ALL: [DetailTab; 2] = [DetailTab::Details, DetailTab::Education];

    pub fn label(self) -> &'static str {
        match self {
            Self::Details => "Feature Details",
            Self::Education => "Educational Content",
        }
    }
}

/// Visual family of a detail card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTone {
    Plate,
    Volcano,
    Earthquake,
}

/// A titled list of `label: value` rows.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailCard {
    pub title: &'static str,
    pub tone: CardTone,
    pub rows: Vec<(&'static str, String)>,
}

/// What the sidebar shows.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Placeholder,
    Plate {
        card: DetailCard,
        /// Input for the cross-section canvas
        cross_section_type: String,
    },
    Volcano(DetailCard),
    Earthquake(DetailCard),
    NoInformation,
    Education,
}

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Total projection from state to sidebar content. Never fails.
pub fn detail_view(selected: &SelectedFeature, tab: DetailTab) -> DetailView {
    if tab == DetailTab::Education {
        return DetailView::Education;
    }

    match selected {
        SelectedFeature::None => DetailView::Placeholder,
        SelectedFeature::Plate {
            name,
            plate_a,
            plate_b,
            boundary_type,
        } => {
            let shown_type = boundary_type
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or("Unknown");
            if blank(name) && blank(plate_a) && blank(plate_b) && boundary_type.is_none() {
                return DetailView::NoInformation;
            }
            DetailView::Plate {
                card: DetailCard {
                    title: "Plate Information",
                    tone: CardTone::Plate,
                    rows: vec![
                        ("Name", name.clone()),
                        ("Plate A", plate_a.clone()),
                        ("Plate B", plate_b.clone()),
                        ("Type", shown_type.to_string()),
                    ],
                },
                cross_section_type: shown_type.to_string(),
            }
        }
        SelectedFeature::Volcano { name, kind } => {
            if blank(name) && blank(kind) {
                return DetailView::NoInformation;
            }
            DetailView::Volcano(DetailCard {
                title: "Volcano Information",
                tone: CardTone::Volcano,
                rows: vec![("Name", name.clone()), ("Type", kind.clone())],
            })
        }
        SelectedFeature::Earthquake {
            magnitude,
            depth_km,
        } => {
            if !magnitude.is_finite() || !depth_km.is_finite() {
                return DetailView::NoInformation;
            }
            DetailView::Earthquake(DetailCard {
                title: "Earthquake Information",
                tone: CardTone::Earthquake,
                rows: vec![
                    ("Magnitude", magnitude.to_string()),
                    ("Depth", format!("{} km", depth_km)),
                ],
            })
        }
    }
}

/// Selection plus the sidebar tab. Single writer per field.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected: SelectedFeature,
    tab: DetailTab,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &SelectedFeature {
        &self.selected
    }

    pub fn tab(&self) -> DetailTab {
        self.tab
    }

    /// Replace the current selection. The last call wins.
    pub fn select(&mut self, feature: SelectedFeature) {
        log::debug!(
            "selection {} -> {}",
            self.selected.kind_name(),
            feature.kind_name()
        );
        self.selected = feature;
    }

    pub fn set_tab(&mut self, tab: DetailTab) {
        self.tab = tab;
    }

    pub fn view(&self) -> DetailView {
        detail_view(&self.selected, self.tab)
    }
}
