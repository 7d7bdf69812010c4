//! Screen / World Transforms
//!
//! An orthographic projection plus a camera transform, the pair that both
//! the game renderer and the tile editor use to move between pixels and
//! world units. "Screen" coordinates here have their origin at the
//! bottom-left of the window with y pointing up; macroquad's top-left
//! pixel space is only reached through [`flip_y`].

use macroquad::math::{vec2, vec3, vec4, Mat4, Vec2};

/// Smallest zoom accepted by [`camera_transform`]
const MIN_ZOOM: f32 = 0.01;

/// Orthographic projection centred on the camera, one world unit per pixel
/// at zoom 1.
pub fn orthographic(window: Vec2) -> Mat4 {
    Mat4::orthographic_rh_gl(
        window.x * -0.5,
        window.x * 0.5,
        window.y * -0.5,
        window.y * 0.5,
        -1.0,
        10.0,
    )
}

/// Camera-to-world transform: the camera sits at `position`, and a zoom
/// above 1 shows less of the world.
pub fn camera_transform(position: Vec2, zoom: f32) -> Mat4 {
    let inv_zoom = 1.0 / zoom.max(MIN_ZOOM);
    Mat4::from_translation(vec3(position.x, position.y, 0.0))
        * Mat4::from_scale(vec3(inv_zoom, inv_zoom, 1.0))
}

/// Convert a screen pixel to world space.
///
/// The pixel is first normalised to NDC (`s / (dim / 2) - 1` per axis),
/// then taken through the inverse projection and finally the camera
/// transform.
pub fn screen_to_world(screen: Vec2, window: Vec2, projection: Mat4, view: Mat4) -> Vec2 {
    let ndc_x = screen.x / (window.x * 0.5) - 1.0;
    let ndc_y = screen.y / (window.y * 0.5) - 1.0;

    let world = view * (projection.inverse() * vec4(ndc_x, ndc_y, 0.0, 1.0));
    vec2(world.x, world.y)
}

/// Convert a world position to a screen pixel (inverse of [`screen_to_world`])
pub fn world_to_screen(world: Vec2, window: Vec2, projection: Mat4, view: Mat4) -> Vec2 {
    let clip = projection * (view.inverse() * vec4(world.x, world.y, 0.0, 1.0));
    vec2(
        (clip.x + 1.0) * window.x * 0.5,
        (clip.y + 1.0) * window.y * 0.5,
    )
}

/// Flip between macroquad's top-left pixel space and bottom-left screen
/// space. The flip is its own inverse.
pub fn flip_y(p: Vec2, window: Vec2) -> Vec2 {
    vec2(p.x, window.y - p.y)
}

/// Screen-space rectangle in macroquad draw coordinates (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Projection, camera transform and window size for one frame
#[derive(Debug, Clone, Copy)]
pub struct ViewTransform {
    pub window: Vec2,
    pub projection: Mat4,
    pub view: Mat4,
}

impl ViewTransform {
    /// Build the transform for a camera at `position` with the given zoom
    pub fn new(window: Vec2, position: Vec2, zoom: f32) -> Self {
        Self {
            window,
            projection: orthographic(window),
            view: camera_transform(position, zoom),
        }
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen_to_world(screen, self.window, self.projection, self.view)
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world_to_screen(world, self.window, self.projection, self.view)
    }

    /// Flip a bottom-left screen point into macroquad's top-left pixel space
    pub fn to_draw(&self, screen: Vec2) -> Vec2 {
        flip_y(screen, self.window)
    }

    /// Project a world-space rectangle (bottom-left corner + size) into a
    /// draw rectangle
    pub fn world_rect(&self, min: Vec2, size: Vec2) -> DrawRect {
        let top_left = self.to_draw(self.world_to_screen(vec2(min.x, min.y + size.y)));
        let bottom_right = self.to_draw(self.world_to_screen(vec2(min.x + size.x, min.y)));
        DrawRect {
            x: top_left.x,
            y: top_left.y,
            w: bottom_right.x - top_left.x,
            h: bottom_right.y - top_left.y,
        }
    }
}
