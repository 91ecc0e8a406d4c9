//! Built-in scenes.

use lumen_math::Vec3;

use crate::{Light, Rgb, Scene, Surface};

/// Four spheres, a triangle and the three kinds of light.
///
/// The classic layout: red, blue and green spheres resting on a huge yellow
/// sphere that acts as the floor, with a purple triangle behind them.
pub fn basic() -> Scene {
    let mut scene = Scene::new("basic");

    scene.add_sphere(
        Vec3::new(0.0, -1.0, 3.0),
        1.0,
        Surface::new(Rgb::new(255, 0, 0))
            .with_specular(500.0)
            .with_reflective(0.2),
    );
    scene.add_sphere(
        Vec3::new(2.0, 0.0, 4.0),
        1.0,
        Surface::new(Rgb::new(0, 0, 255))
            .with_specular(500.0)
            .with_reflective(0.3),
    );
    scene.add_sphere(
        Vec3::new(-2.0, 0.0, 4.0),
        1.0,
        Surface::new(Rgb::new(0, 255, 0))
            .with_specular(10.0)
            .with_reflective(0.4),
    );
    scene.add_sphere(
        Vec3::new(0.0, -5001.0, 0.0),
        5000.0,
        Surface::new(Rgb::new(255, 255, 0))
            .with_specular(1000.0)
            .with_reflective(0.5),
    );
    scene.add_triangle(
        Vec3::new(-3.0, -1.0, 7.0),
        Vec3::new(0.0, 3.0, 7.5),
        Vec3::new(3.0, -1.0, 7.0),
        Surface::new(Rgb::new(160, 32, 240))
            .with_specular(50.0)
            .with_reflective(0.1),
    );

    scene.add_light(Light::ambient(0.2));
    scene.add_light(Light::point(0.6, Vec3::new(2.0, 1.0, 0.0)));
    scene.add_light(Light::directional(0.2, Vec3::new(1.0, 4.0, 4.0)));

    scene
}

/// Two fully reflective walls facing each other with a sphere between them.
///
/// Every ray that reaches a wall keeps bouncing until the recursion depth
/// runs out.
pub fn mirrors() -> Scene {
    let mut scene = Scene::new("mirrors").with_background(Rgb::new(20, 20, 40));

    let mirror = Surface::new(Rgb::new(200, 200, 200))
        .with_specular(1000.0)
        .with_reflective(1.0);

    // Left wall, facing +X
    scene.add_triangle(
        Vec3::new(-2.0, -3.0, 0.0),
        Vec3::new(-2.0, 3.0, 0.0),
        Vec3::new(-2.0, 0.0, 12.0),
        mirror,
    );
    // Right wall, facing -X
    scene.add_triangle(
        Vec3::new(2.0, -3.0, 0.0),
        Vec3::new(2.0, 0.0, 12.0),
        Vec3::new(2.0, 3.0, 0.0),
        mirror,
    );

    scene.add_sphere(
        Vec3::new(0.0, 0.0, 5.0),
        0.75,
        Surface::new(Rgb::new(255, 80, 0)).with_specular(100.0),
    );

    scene.add_light(Light::ambient(0.25));
    scene.add_light(Light::point(0.75, Vec3::new(0.0, 2.0, 2.0)));

    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_scene() {
        let scene = basic();
        assert_eq!(scene.spheres().count(), 4);
        assert_eq!(scene.triangles().count(), 1);
        assert_eq!(scene.light_count(), 3);
        assert!(scene.validate().is_ok());
    }

    #[test]
    fn test_mirror_walls_face_each_other() {
        let scene = mirrors();
        assert!(scene.validate().is_ok());

        let normals: Vec<Vec3> = scene
            .triangles()
            .map(|(t, _)| t.face_normal().normalize())
            .collect();
        assert_eq!(normals.len(), 2);
        assert!(normals[0].x > 0.99);
        assert!(normals[1].x < -0.99);
    }
}
