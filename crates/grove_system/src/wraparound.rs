//! Canvas boundary handling.
//!
//! Entities are classified once per pass by entity id:
//!
//! - ships are clamped to `[margin, height - margin]` vertically and wrap
//!   horizontally;
//! - bullets are skipped (they leave the screen and get cleaned up
//!   elsewhere);
//! - everything else with a [`Position`] wraps on both axes.
//!
//! An entity that is both a ship and a bullet is handled as a ship.

use std::collections::HashSet;

use grove_math::{Bounds, clamp_axis, wrap_axis};
use grove_world::{Bullet, Entity, Position, Registry, Ship};

/// Apply the boundary rules to every positioned entity.
pub fn wraparound_system(registry: &mut Registry, bounds: Bounds, padding: f32, ship_margin: f32) {
    let bullets: HashSet<Entity> = registry.query_ids::<(Bullet, Position)>().into_iter().collect();
    let ships: HashSet<Entity> = registry.query_ids::<(Ship, Position)>().into_iter().collect();

    registry.for_each_mut::<Position>(|entity, position| {
        if ships.contains(&entity) {
            position.y = clamp_axis(position.y, bounds.height, ship_margin);
        } else if bullets.contains(&entity) {
            return;
        } else {
            position.y = wrap_axis(position.y, bounds.height, padding);
        }
        position.x = wrap_axis(position.x, bounds.width, padding);
    });
}

#[cfg(test)]
mod tests {
    use grove_world::ShipKind;

    use super::*;

    const BOUNDS: Bounds = Bounds::new(800.0, 600.0);
    const PADDING: f32 = 100.0;
    const MARGIN: f32 = 15.0;

    fn run(r: &mut Registry) {
        wraparound_system(r, BOUNDS, PADDING, MARGIN);
    }

    #[test]
    fn test_ship_wraps_horizontally() {
        let mut r = Registry::new();
        let ship = r.spawn_with([
            Ship::new(ShipKind::Player).into(),
            Position::new(BOUNDS.width + PADDING + 1.0, 300.0).into(),
        ]);
        run(&mut r);
        assert_eq!(r.get::<Position>(ship).unwrap().x, -PADDING);

        r.get_mut::<Position>(ship).unwrap().x = -PADDING - 1.0;
        run(&mut r);
        assert_eq!(r.get::<Position>(ship).unwrap().x, BOUNDS.width + PADDING);
    }

    #[test]
    fn test_ship_clamped_vertically() {
        let mut r = Registry::new();
        let high = r.spawn_with([
            Ship::new(ShipKind::Enemy).into(),
            Position::new(10.0, -500.0).into(),
        ]);
        let low = r.spawn_with([
            Ship::new(ShipKind::Enemy).into(),
            Position::new(10.0, 2000.0).into(),
        ]);
        run(&mut r);
        assert_eq!(r.get::<Position>(high).unwrap().y, MARGIN);
        assert_eq!(r.get::<Position>(low).unwrap().y, BOUNDS.height - MARGIN);
    }

    #[test]
    fn test_other_entities_wrap_both_axes() {
        let mut r = Registry::new();
        let e = r.spawn_with([Position::new(-PADDING - 1.0, -PADDING - 1.0).into()]);
        run(&mut r);
        assert_eq!(
            r.get::<Position>(e),
            Some(&Position::new(BOUNDS.width + PADDING, BOUNDS.height + PADDING))
        );
    }

    #[test]
    fn test_bullets_are_left_alone() {
        let mut r = Registry::new();
        let far = Position::new(5000.0, -5000.0);
        let bullet = r.spawn_with([Bullet::new(1.0).into(), far.into()]);
        run(&mut r);
        assert_eq!(r.get::<Position>(bullet), Some(&far));
    }

    #[test]
    fn test_ship_that_is_also_a_bullet_is_handled_as_ship() {
        let mut r = Registry::new();
        let armed_ship = r.spawn_with([
            Bullet::new(1.0).into(),
            Ship::new(ShipKind::Enemy).into(),
            Position::new(1000.0, -50.0).into(),
        ]);
        run(&mut r);
        assert_eq!(
            r.get::<Position>(armed_ship),
            Some(&Position::new(-PADDING, MARGIN))
        );
    }

    #[test]
    fn test_inside_canvas_untouched() {
        let mut r = Registry::new();
        let p = Position::new(400.0, 300.0);
        let ship = r.spawn_with([Ship::new(ShipKind::Player).into(), p.into()]);
        let other = r.spawn_with([p.into()]);
        run(&mut r);
        assert_eq!(r.get::<Position>(ship), Some(&p));
        assert_eq!(r.get::<Position>(other), Some(&p));
    }
}
