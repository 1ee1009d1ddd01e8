use bevy::prelude::*;

use crate::sets::TrackGridSet;

use super::events::{
    CellRoutedEvent, EnterCellEvent, ResizeGridEvent, RotateCellEvent, RoutingFailedEvent,
    SetCellStateEvent,
};
use super::grid::CellGrid;
use super::systems::{
    handle_enter_cell, handle_resize_grid, handle_rotate_cell, handle_set_cell_state,
};

pub struct TrackGridPlugin;

impl Plugin for TrackGridPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CellGrid>()
            .add_event::<EnterCellEvent>()
            .add_event::<CellRoutedEvent>()
            .add_event::<RoutingFailedEvent>()
            .add_event::<SetCellStateEvent>()
            .add_event::<RotateCellEvent>()
            .add_event::<ResizeGridEvent>()
            .configure_sets(Update, (TrackGridSet::Edit, TrackGridSet::Route).chain())
            .add_systems(
                Update,
                (
                    handle_resize_grid,
                    handle_set_cell_state,
                    handle_rotate_cell,
                )
                    .chain()
                    .in_set(TrackGridSet::Edit),
            )
            .add_systems(Update, handle_enter_cell.in_set(TrackGridSet::Route));
    }
}
