//! # TestLayout: headless harness for track grid integration tests
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` and `TrackGridPlugin` so
//! tests can lay out cells, send events and inspect what the systems emitted.

use bevy::app::App;
use bevy::prelude::*;

use crate::cell::Cell;
use crate::cell_grid::{
    CellGrid, CellRoutedEvent, EnterCellEvent, RoutingFailedEvent, TrackGridPlugin,
};
use crate::direction::Direction;

pub struct TestLayout {
    app: App,
}

impl TestLayout {
    /// A `width` x `height` grid of empty cells.
    pub fn new(width: usize, height: usize) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);

        // Insert the grid BEFORE the plugin so init_resource keeps it.
        app.insert_resource(CellGrid::new(width, height).expect("test grid too large"));
        app.add_plugins(TrackGridPlugin);

        app.update();
        Self { app }
    }

    pub fn with_cell(mut self, x: usize, y: usize, cell: Cell) -> Self {
        self.grid_mut()
            .set(x, y, cell)
            .expect("with_cell coordinate must be inside the grid");
        self
    }

    pub fn grid(&self) -> &CellGrid {
        self.app.world().resource::<CellGrid>()
    }

    pub fn grid_mut(&mut self) -> Mut<'_, CellGrid> {
        self.app.world_mut().resource_mut::<CellGrid>()
    }

    pub fn cell(&self, x: usize, y: usize) -> Cell {
        *self.grid().get(x, y).expect("cell coordinate must be inside the grid")
    }

    pub fn world(&self) -> &World {
        self.app.world()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn send<E: Event>(&mut self, event: E) {
        self.app.world_mut().send_event(event);
    }

    /// Run one frame.
    pub fn tick(&mut self) {
        self.app.update();
    }

    pub fn drain_routed(&mut self) -> Vec<CellRoutedEvent> {
        self.app
            .world_mut()
            .resource_mut::<Events<CellRoutedEvent>>()
            .drain()
            .collect()
    }

    pub fn drain_failed(&mut self) -> Vec<RoutingFailedEvent> {
        self.app
            .world_mut()
            .resource_mut::<Events<RoutingFailedEvent>>()
            .drain()
            .collect()
    }

    /// Send one train into `(x, y)` through `from`, run a frame and return
    /// the single outcome.
    pub fn enter(
        &mut self,
        x: usize,
        y: usize,
        from: Direction,
    ) -> Result<CellRoutedEvent, RoutingFailedEvent> {
        self.send(EnterCellEvent { x, y, from });
        self.tick();
        let routed = self.drain_routed();
        let failed = self.drain_failed();
        assert_eq!(
            routed.len() + failed.len(),
            1,
            "expected exactly one routing outcome, got {routed:?} / {failed:?}"
        );
        match (routed.first(), failed.first()) {
            (Some(r), _) => Ok(*r),
            (None, Some(f)) => Err(*f),
            (None, None) => unreachable!(),
        }
    }

    /// Drive a train from cell to cell, one frame per cell, until it leaves
    /// the grid, fails to route, or `max_steps` cells were visited.
    /// Returns the visited coordinates in order.
    pub fn follow(
        &mut self,
        mut x: usize,
        mut y: usize,
        mut from: Direction,
        max_steps: usize,
    ) -> Vec<(usize, usize)> {
        let mut visited = Vec::new();
        for _ in 0..max_steps {
            visited.push((x, y));
            let Ok(routed) = self.enter(x, y, from) else {
                break;
            };
            let Some((nx, ny)) = routed.next else {
                break;
            };
            x = nx;
            y = ny;
            from = routed.exit.opposite();
        }
        visited
    }
}
