use std::collections::VecDeque;

use glam::Vec2;

use crate::ball::Ball;
use crate::plank::Plank;
use crate::state::SimState;

/// Drawing surface. Called once per frame with the full scene, back to front.
pub trait Renderer {
    fn clear(&mut self, canvas: Vec2);
    /// `fulcrum` is the (width, height) of the support triangle under the pivot.
    fn draw_plank(&mut self, plank: &Plank, fulcrum: Vec2);
    fn draw_ball(&mut self, ball: &Ball);
}

/// Source of pointer clicks already translated to canvas coordinates.
pub trait InputSource {
    fn next_click(&mut self) -> Option<Vec2>;
}

impl InputSource for VecDeque<Vec2> {
    fn next_click(&mut self) -> Option<Vec2> {
        self.pop_front()
    }
}

/// Redraw the whole scene from scratch.
pub fn render_frame<R: Renderer + ?Sized>(state: &SimState, fulcrum: Vec2, renderer: &mut R) {
    renderer.clear(state.canvas);
    renderer.draw_plank(&state.plank, fulcrum);
    for ball in &state.balls {
        renderer.draw_ball(ball);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ball::BallColor;
    use seesaw_config::GameConfig;

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl Renderer for Recorder {
        fn clear(&mut self, canvas: Vec2) {
            self.0.push(format!("clear {}x{}", canvas.x, canvas.y));
        }
        fn draw_plank(&mut self, _plank: &Plank, _fulcrum: Vec2) {
            self.0.push("plank".into());
        }
        fn draw_ball(&mut self, ball: &Ball) {
            self.0.push(format!("ball {}", ball.id.0));
        }
    }

    #[test]
    fn draws_plank_then_balls_in_spawn_order() {
        let mut state = SimState::new(&GameConfig::default());
        state.push_falling(Vec2::new(300.0, 10.0), 12.0, 1, BallColor::Red);
        state.push_falling(Vec2::new(310.0, 10.0), 12.0, 1, BallColor::Green);
        let mut rec = Recorder::default();
        render_frame(&state, Vec2::new(60.0, 40.0), &mut rec);
        assert_eq!(rec.0, vec!["clear 800x600", "plank", "ball 1", "ball 2"]);
    }

    #[test]
    fn queue_yields_clicks_in_order() {
        let mut q: VecDeque<Vec2> = [Vec2::ONE, Vec2::ZERO].into_iter().collect();
        assert_eq!(q.next_click(), Some(Vec2::ONE));
        assert_eq!(q.next_click(), Some(Vec2::ZERO));
        assert_eq!(q.next_click(), None);
    }
}
