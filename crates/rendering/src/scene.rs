//! Frame drawing.
//!
//! [`SceneBuilder`] is the `Renderer` the simulation draws into. It converts canvas
//! coordinates to world space and records flat shapes; the gizmo system then replays
//! those shapes every frame. Recording first keeps the mapping testable without a GPU.

use bevy::prelude::*;
use seesaw_core::CanvasFrame;
use seesaw_sim::{Ball, Plank, Renderer};

use crate::palette::{ball_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Oriented rectangle; `angle` is counter-clockwise in world space.
    Rect {
        center: Vec2,
        size: Vec2,
        angle: f32,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
    },
    Triangle {
        points: [Vec2; 3],
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
}

#[derive(Debug, Clone)]
pub struct SceneBuilder {
    frame: CanvasFrame,
    pub shapes: Vec<Shape>,
}

impl SceneBuilder {
    pub fn new(frame: CanvasFrame) -> Self {
        Self {
            frame,
            shapes: Vec::new(),
        }
    }
}

impl Renderer for SceneBuilder {
    fn clear(&mut self, canvas: Vec2) {
        self.shapes.clear();
        self.shapes.push(Shape::Rect {
            center: self.frame.to_world(canvas * 0.5),
            size: canvas,
            angle: 0.0,
            color: Palette::CANVAS_BORDER,
        });
    }

    fn draw_plank(&mut self, plank: &Plank, fulcrum: Vec2) {
        let f = &self.frame;
        // support triangle, apex under the plank's centre
        let apex = plank.pivot + Vec2::new(0.0, plank.height * 0.5);
        let base_y = apex.y + fulcrum.y;
        let points = [
            f.to_world(apex),
            f.to_world(Vec2::new(apex.x - fulcrum.x * 0.5, base_y)),
            f.to_world(Vec2::new(apex.x + fulcrum.x * 0.5, base_y)),
        ];
        self.shapes.push(Shape::Triangle {
            points,
            color: Palette::FULCRUM,
        });

        let angle = f.world_angle(plank.rotation);
        self.shapes.push(Shape::Rect {
            center: f.to_world(plank.pivot),
            size: Vec2::new(plank.width, plank.height),
            angle,
            color: Palette::PLANK,
        });
        let half = plank.direction() * (plank.half_width() - 10.0).max(0.0);
        self.shapes.push(Shape::Line {
            from: f.to_world(plank.pivot - half),
            to: f.to_world(plank.pivot + half),
            color: Palette::PLANK_GRAIN,
        });
        self.shapes.push(Shape::Circle {
            center: f.to_world(plank.pivot),
            radius: 3.0,
            color: Palette::PIVOT,
        });
    }

    fn draw_ball(&mut self, ball: &Ball) {
        self.shapes.push(Shape::Circle {
            center: self.frame.to_world(ball.pos),
            radius: ball.radius,
            color: ball_color(ball.color),
        });
    }
}

/// Replay recorded shapes as immediate-mode gizmos.
#[cfg(not(any(test, feature = "headless")))]
pub(crate) fn draw_shapes(gizmos: &mut Gizmos, shapes: &[Shape]) {
    for shape in shapes {
        match *shape {
            Shape::Rect {
                center,
                size,
                angle,
                color,
            } => {
                gizmos.rect_2d(Isometry2d::new(center, Rot2::radians(angle)), size, color);
            }
            Shape::Line { from, to, color } => {
                gizmos.line_2d(from, to, color);
            }
            Shape::Triangle { points, color } => {
                gizmos.linestrip_2d([points[0], points[1], points[2], points[0]], color);
            }
            Shape::Circle {
                center,
                radius,
                color,
            } => {
                gizmos.circle_2d(Isometry2d::from_translation(center), radius, color);
                if radius > 6.0 {
                    gizmos.circle_2d(Isometry2d::from_translation(center), radius * 0.6, color);
                }
            }
        }
    }
}
