use uuid::Uuid;

use crate::{
    geofile::{
        coordinate::Coordinate,
        feature::{feature_id, string_property},
    },
    style::layers::FEATURE_NAME_PROPERTY,
};

use super::waypoint::Waypoint;

/// Result of a tap or close interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionOutcome {
    Selected(Waypoint),
    Clear,
}

impl SelectionOutcome {
    pub fn is_selected(&self) -> bool {
        matches!(self, SelectionOutcome::Selected(_))
    }
}

/// The selection slot. Holds at most one waypoint.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SelectionState {
    #[default]
    NoSelection,
    Selected(Waypoint),
}

impl SelectionState {
    /// Replace the slot with the outcome, the last interaction wins.
    pub fn apply(&mut self, outcome: SelectionOutcome) {
        *self = match outcome {
            SelectionOutcome::Selected(waypoint) => SelectionState::Selected(waypoint),
            SelectionOutcome::Clear => SelectionState::NoSelection,
        };
    }

    pub fn close_overlay(&mut self) {
        self.apply(SelectionOutcome::Clear);
    }

    pub fn waypoint(&self) -> Option<&Waypoint> {
        match self {
            SelectionState::Selected(waypoint) => Some(waypoint),
            SelectionState::NoSelection => None,
        }
    }
}

/// Derive the selection for a tapped feature. A feature needs a string `name` property and a
/// Point geometry to be selectable; anything else clears the selection.
pub fn on_tap(feature: &geojson::Feature) -> SelectionOutcome {
    let name = match string_property(feature, FEATURE_NAME_PROPERTY) {
        Some(name) => name,
        None => {
            log::debug!("Tapped feature has no string name property");
            return SelectionOutcome::Clear;
        }
    };
    let coordinate = match feature
        .geometry
        .as_ref()
        .and_then(Coordinate::from_point_geometry)
    {
        Some(coordinate) => coordinate,
        None => {
            log::debug!("Tapped feature {} is not a point", name);
            return SelectionOutcome::Clear;
        }
    };
    let id = feature_id(feature).unwrap_or_else(|| Uuid::new_v4().to_string());
    SelectionOutcome::Selected(Waypoint::new(id, name, coordinate))
}
