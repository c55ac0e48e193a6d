//! Lookup systems: lattice construction and hover description.

use bevy::prelude::*;

use super::HexIndexConfig;
use super::entities::{HexLattice, Hovered, Selection};

/// Builds the [`HexLattice`] from [`HexIndexConfig`] and inserts it.
pub fn build_lattice(mut commands: Commands, config: Res<HexIndexConfig>) {
    let lattice = HexLattice::build(&config);
    info!(
        hexes = lattice.hexes.len(),
        corners = lattice.corners.len(),
        edges = lattice.edges.len(),
        "hex lattice ready"
    );
    commands.insert_resource(lattice);
}

/// Rewrites [`Selection`] whenever [`Hovered`] changes.
pub fn describe_hovered(
    hovered: Res<Hovered>,
    lattice: Option<Res<HexLattice>>,
    mut selection: ResMut<Selection>,
) {
    if !hovered.is_changed() {
        return;
    }
    let Some(lattice) = lattice else { return };

    selection.0 = hovered.0.map(|(kind, index)| lattice.describe(kind, &index));
    let Some(info) = &selection.0 else { return };

    match info.data {
        Some(height) => info!("{} {}: height {height:.2}", info.kind, info.index),
        None => warn!("{} {} is outside the lattice", info.kind, info.index),
    }
    info!(
        "  at ({:.2}, {:.2}), hexes {:?}, corners {:?}, edges {:?}",
        info.position.x,
        info.position.y,
        info.adjacency.hexes,
        info.adjacency.corners,
        info.adjacency.edges
    );
}
