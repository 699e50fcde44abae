//! egui-based user interface.
//!
//! The panel is drawn from a plain [`PanelState`] resource; selection logic
//! mutating that resource stays pure so it can be tested without an egui
//! context.

mod info_panel;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::catalog::PlanetCatalog;
use crate::types::BodyId;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PanelState>()
            .add_systems(EguiPrimaryContextPass, info_panel::info_panel);
    }
}

/// State of the information side panel.
#[derive(Resource, Default, Clone, Debug, PartialEq, Eq)]
pub struct PanelState {
    /// Whether the panel is shown.
    pub open: bool,
    /// Capitalized body name shown as the panel title.
    pub title: String,
    /// Descriptive text from the catalog.
    pub info: String,
}

/// Resolve a click target against the catalog and update the panel.
///
/// A target absent from the catalog (or no target at all) leaves the panel
/// untouched, including its visibility.
pub fn apply_selection(panel: &mut PanelState, catalog: &PlanetCatalog, target: Option<BodyId>) {
    let Some(id) = target else {
        return;
    };
    let Some(entry) = catalog.get(id) else {
        return;
    };

    panel.title = entry.name.to_string();
    panel.info = entry.info.to_string();
    panel.open = true;
}

/// Close the panel unconditionally, independent of hover or selection state.
pub fn dismiss_panel(panel: &mut PanelState) {
    panel.open = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cataloged_click_opens_panel_with_catalog_text() {
        let catalog = PlanetCatalog::default();
        let mut panel = PanelState::default();
        assert!(!panel.open);

        apply_selection(&mut panel, &catalog, Some(BodyId::Earth));

        assert!(panel.open);
        assert_eq!(panel.title, "Earth");
        assert_eq!(
            panel.info,
            catalog.get(BodyId::Earth).expect("earth cataloged").info
        );
    }

    #[test]
    fn uncataloged_click_leaves_panel_unchanged() {
        let catalog = PlanetCatalog::default();
        let mut panel = PanelState {
            open: true,
            title: "Mars".into(),
            info: "red".into(),
        };
        let before = panel.clone();

        // The Sun has no catalog entry.
        apply_selection(&mut panel, &catalog, Some(BodyId::Sun));
        assert_eq!(panel, before);

        // A missed click changes nothing either.
        apply_selection(&mut panel, &catalog, None);
        assert_eq!(panel, before);
    }

    #[test]
    fn dismiss_closes_regardless_of_state() {
        let mut panel = PanelState {
            open: true,
            title: "Venus".into(),
            info: "hot".into(),
        };
        dismiss_panel(&mut panel);
        assert!(!panel.open);

        // Already closed: still closed.
        dismiss_panel(&mut panel);
        assert!(!panel.open);
    }

    #[test]
    fn selection_replaces_previous_contents() {
        let catalog = PlanetCatalog::default();
        let mut panel = PanelState::default();

        apply_selection(&mut panel, &catalog, Some(BodyId::Mars));
        apply_selection(&mut panel, &catalog, Some(BodyId::Jupiter));

        assert_eq!(panel.title, "Jupiter");
        assert!(panel.info.contains("Great Red Spot"));
    }
}
