use glam::{Mat4, Vec2, Vec3};

/// Orthographic 2D camera. World space is y-up; `position` is the point at
/// the centre of the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera2d {
    pub position: Vec2,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl Camera2d {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            viewport_width,
            viewport_height,
        }
    }

    /// Camera covering `0..width` by `0..height` with the origin bottom-left.
    pub fn screen(width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(width / 2.0, height / 2.0),
            viewport_width: width,
            viewport_height: height,
        }
    }

    /// World camera one unit wide, as tall as the window aspect requires.
    pub fn for_window(width: u32, height: u32) -> Self {
        Self::new(1.0, aspect(width, height))
    }

    pub fn projection(&self) -> Mat4 {
        let hw = self.viewport_width / 2.0;
        let hh = self.viewport_height / 2.0;
        Mat4::orthographic_rh(
            self.position.x - hw,
            self.position.x + hw,
            self.position.y - hh,
            self.position.y + hh,
            -1.0,
            1.0,
        )
    }

    /// Map a window pixel (origin top-left, y down) into world space.
    pub fn unproject(&self, screen: Vec2, screen_size: Vec2) -> Vec2 {
        if screen_size.x <= 0.0 || screen_size.y <= 0.0 {
            return self.position;
        }
        let ndc = Vec3::new(
            2.0 * screen.x / screen_size.x - 1.0,
            1.0 - 2.0 * screen.y / screen_size.y,
            0.0,
        );
        self.projection().inverse().project_point3(ndc).truncate()
    }
}

/// Height over width, 1 for a degenerate window.
pub fn aspect(width: u32, height: u32) -> f32 {
    if width == 0 || height == 0 {
        1.0
    } else {
        height as f32 / width as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn unproject_corners_of_portrait_window() {
        let camera = Camera2d::for_window(400, 800);
        assert_eq!(camera.viewport_height, 2.0);
        let size = Vec2::new(400.0, 800.0);

        assert!(close(camera.unproject(Vec2::new(200.0, 400.0), size), Vec2::ZERO));
        assert!(close(camera.unproject(Vec2::ZERO, size), Vec2::new(-0.5, 1.0)));
        assert!(close(camera.unproject(size, size), Vec2::new(0.5, -1.0)));
    }

    #[test]
    fn moving_finger_down_the_screen_moves_down_in_world() {
        let camera = Camera2d::for_window(100, 100);
        let size = Vec2::new(100.0, 100.0);
        let top = camera.unproject(Vec2::new(50.0, 10.0), size);
        let bottom = camera.unproject(Vec2::new(50.0, 90.0), size);
        assert!(bottom.y < top.y);
    }

    #[test]
    fn screen_camera_maps_origin_bottom_left() {
        let camera = Camera2d::screen(1.0, 1.0);
        let p = camera.projection().project_point3(Vec3::ZERO);
        assert!((p.x + 1.0).abs() < 1e-6);
        assert!((p.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn zero_sized_window_is_safe() {
        let camera = Camera2d::for_window(0, 0);
        assert_eq!(camera.viewport_height, 1.0);
        assert_eq!(camera.unproject(Vec2::ONE, Vec2::ZERO), Vec2::ZERO);
    }
}
