//! Starting worlds for each game mode.

use grove_system::{GameConfig, GameMode};
use grove_world::{
    Bullet, DamageIndicator, Enemy, Explosion, Player, Position, Registry, Renderable, Ship,
    ShipKind, TreeSize, TreeSpecies, TreeType, Velocity,
};
use tracing::info;

/// Populate `registry` with the demo world for `config.mode`.
pub fn populate(registry: &mut Registry, config: &GameConfig) {
    match config.mode {
        GameMode::Trample => trample_demo(registry),
        GameMode::Scroller => scroller_demo(registry, config),
    }
    info!(mode = ?config.mode, entities = registry.entity_count(), "scenario loaded");
}

/// Three players walking diagonally through a small grove.
pub fn trample_demo(registry: &mut Registry) {
    let players = [
        ("El Donaldo", "Trumpet", (0.0, 0.0), (1.0, 2.0)),
        ("Vancy", "The Village Idiot", (0.0, 1.0), (1.0, 1.0)),
        ("Slette", "Mette", (1.0, 3.0), (2.0, 1.0)),
    ];
    for (first, last, (x, y), (dx, dy)) in players {
        registry.spawn_with([
            Player::new(first, last).into(),
            Position::new(x, y).into(),
            Velocity::new(dx, dy).into(),
        ]);
    }

    let trees = [
        (TreeSpecies::Oak, TreeSize::Mature, (15.0, 30.0)),
        (TreeSpecies::Birch, TreeSize::Sapling, (8.0, 16.0)),
        (TreeSpecies::Pine, TreeSize::Sapling, (12.0, 13.0)),
        (TreeSpecies::Pine, TreeSize::Ancient, (3.0, 8.0)),
    ];
    for (species, size, (x, y)) in trees {
        registry.spawn_with([
            TreeType::new(species, size).into(),
            Position::new(x, y).into(),
        ]);
    }
}

/// A player ship near the bottom of the canvas, enemies along the top,
/// and one each of the short-lived effects.
pub fn scroller_demo(registry: &mut Registry, config: &GameConfig) {
    let w = config.canvas_width;
    let h = config.canvas_height;

    registry.spawn_with([
        Ship::new(ShipKind::Player).into(),
        Position::new(w * 0.5, h - 60.0).into(),
        Velocity::ZERO.into(),
        Renderable::new(20.0, 0x33ccffff).into(),
    ]);

    for i in 0..3u8 {
        let x = w * (f32::from(i) + 1.0) / 4.0;
        registry.spawn_with([
            Enemy.into(),
            Ship::new(ShipKind::Enemy).into(),
            Position::new(x, 60.0).into(),
            Velocity::ZERO.into(),
            Renderable::new(18.0, 0xff4444ff).into(),
        ]);
    }

    registry.spawn_with([
        Bullet::new(10.0).into(),
        Position::new(w * 0.5, h - 90.0).into(),
        Velocity::new(0.0, -400.0).into(),
        Renderable::new(3.0, 0xffffffff).into(),
    ]);

    registry.spawn_with([
        DamageIndicator::new(10.0, 800.0).into(),
        Position::new(w * 0.25, 80.0).into(),
        Velocity::new(0.0, -30.0).into(),
    ]);

    registry.spawn_with([
        Explosion::new(40.0, 500.0).into(),
        Position::new(w * 0.75, 120.0).into(),
        Renderable::new(0.0, 0xffaa00ff).into(),
    ]);
}
