//! Frame output.
//!
//! After every tick the loop hands a read-only [`FrameSnapshot`] to a
//! [`Renderer`]. A failing renderer is reported and skipped; it never stops
//! the simulation.

use std::io::Write;

use grove_world::{Entity, Position, Registry, Renderable, Ship};
use serde::Serialize;

/// Errors a renderer can report for a single frame.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The output target is gone (closed window, detached display).
    #[error("renderer unavailable: {0}")]
    Unavailable(String),

    #[error("frame write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("frame encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// One positioned entity as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityView {
    pub entity: Entity,
    pub x: f32,
    pub y: f32,
    /// Ship rotation in radians; 0 for everything else.
    pub rotation: f32,
    /// Render radius, if the entity is renderable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f32>,
}

/// Everything drawn for one tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub entities: Vec<EntityView>,
}

impl FrameSnapshot {
    /// Capture every entity that has a position, in position insertion
    /// order.
    #[must_use]
    pub fn capture(tick: u64, registry: &Registry) -> Self {
        let entities = registry
            .query_with_ids::<(Position,)>()
            .into_iter()
            .map(|(entity, (position,))| EntityView {
                entity,
                x: position.x,
                y: position.y,
                rotation: registry.get::<Ship>(entity).map_or(0.0, |ship| ship.rotation),
                radius: registry.get::<Renderable>(entity).map(|r| r.radius),
            })
            .collect();

        Self { tick, entities }
    }
}

/// Draws frames.
pub trait Renderer {
    /// Present one frame.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] if the frame could not be presented. The
    /// caller logs it and carries on with the next tick.
    fn render(&mut self, frame: &FrameSnapshot) -> Result<(), RenderError>;
}

/// Discards every frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _frame: &FrameSnapshot) -> Result<(), RenderError> {
        Ok(())
    }
}

/// Writes each frame as one line of JSON.
#[derive(Debug)]
pub struct JsonLinesRenderer<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> Renderer for JsonLinesRenderer<W> {
    fn render(&mut self, frame: &FrameSnapshot) -> Result<(), RenderError> {
        serde_json::to_writer(&mut self.writer, frame)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use grove_world::{Bullet, ShipKind};

    use super::*;

    #[test]
    fn test_capture_reads_optional_components() {
        let mut r = Registry::new();
        let mut ship = Ship::new(ShipKind::Enemy);
        ship.rotation = 1.5;
        let a = r.spawn_with([
            Position::new(1.0, 2.0).into(),
            ship.into(),
            Renderable::new(12.0, 0xff0000ff).into(),
        ]);
        let b = r.spawn_with([Position::new(3.0, 4.0).into(), Bullet::new(1.0).into()]);
        r.spawn_with([Bullet::new(2.0).into()]);

        let frame = FrameSnapshot::capture(7, &r);

        assert_eq!(frame.tick, 7);
        assert_eq!(
            frame.entities,
            vec![
                EntityView { entity: a, x: 1.0, y: 2.0, rotation: 1.5, radius: Some(12.0) },
                EntityView { entity: b, x: 3.0, y: 4.0, rotation: 0.0, radius: None },
            ]
        );
    }

    #[test]
    fn test_json_lines_one_frame_per_line() {
        let mut r = Registry::new();
        r.spawn_with([Position::new(5.0, 6.0).into()]);
        let mut buf: Vec<u8> = Vec::new();
        let mut renderer = JsonLinesRenderer::new(&mut buf);

        renderer.render(&FrameSnapshot::capture(1, &r)).unwrap();
        renderer.render(&FrameSnapshot::capture(2, &r)).unwrap();
        drop(renderer);

        let out = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["tick"], 1);
        assert_eq!(first["entities"][0]["x"], 5.0);
        assert!(first["entities"][0].get("radius").is_none());
    }

    #[test]
    fn test_null_renderer_accepts_anything() {
        let frame = FrameSnapshot { tick: 0, entities: Vec::new() };
        assert!(NullRenderer.render(&frame).is_ok());
    }
}
