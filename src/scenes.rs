use lumen::aliases::Vec3;
use lumen::camera::Camera;
use lumen::hitable::rectangle::Rectangle;
use lumen::hitable::sphere::Sphere;
use lumen::material::Material;
use lumen::scene::Scene;
use std::sync::Arc;

/// The classic box: colored diffuse walls, one area light in the
/// ceiling, two rough-metal spheres.
pub fn cornell_box(aspect: f32) -> (Scene, Camera) {
    let red = Arc::new(Material::diffuse(&Vec3::new(0.63, 0.065, 0.05)));
    let green = Arc::new(Material::diffuse(&Vec3::new(0.14, 0.45, 0.091)));
    let white = Arc::new(Material::diffuse(&Vec3::new(0.725, 0.71, 0.68)));
    let light = Arc::new(Material::emissive(&Vec3::new(47.8, 38.6, 31.1)));
    let gold = Arc::new(Material::microfacet(
        &Vec3::new(0.725, 0.71, 0.68),
        &Vec3::new(1.0, 0.86, 0.57),
        0.1,
        0.8,
    ));
    let iron = Arc::new(Material::microfacet(
        &Vec3::new(0.725, 0.71, 0.68),
        &Vec3::new(0.77, 0.78, 0.78),
        0.1,
        0.8,
    ));

    let mut scene = Scene::new();
    scene.background = Vec3::new(0.235294, 0.67451, 0.843137);
    // every wall normal points into the box
    scene.add(Arc::new(Rectangle::new(
        &Vec3::new(0.0, 0.0, 555.0),
        &Vec3::new(0.0, 555.0, 0.0),
        &Vec3::new(555.0, 0.0, 0.0),
        white.clone(),
    ))); // far
    scene.add(Arc::new(Rectangle::new(
        &Vec3::new(0.0, 0.0, 0.0),
        &Vec3::new(0.0, 555.0, 0.0),
        &Vec3::new(0.0, 0.0, 555.0),
        red,
    ))); // right
    scene.add(Arc::new(Rectangle::new(
        &Vec3::new(555.0, 0.0, 0.0),
        &Vec3::new(0.0, 0.0, 555.0),
        &Vec3::new(0.0, 555.0, 0.0),
        green,
    ))); // left
    scene.add(Arc::new(Rectangle::new(
        &Vec3::new(0.0, 555.0, 0.0),
        &Vec3::new(555.0, 0.0, 0.0),
        &Vec3::new(0.0, 0.0, 555.0),
        white.clone(),
    ))); // ceiling
    scene.add(Arc::new(Rectangle::new(
        &Vec3::new(0.0, 0.0, 0.0),
        &Vec3::new(0.0, 0.0, 555.0),
        &Vec3::new(555.0, 0.0, 0.0),
        white,
    ))); // floor
    scene.add(Arc::new(Rectangle::new(
        &Vec3::new(185.0, 554.0, 185.0),
        &Vec3::new(185.0, 0.0, 0.0),
        &Vec3::new(0.0, 0.0, 185.0),
        light,
    ))); // light, facing down

    scene.add(Arc::new(Sphere::new(
        &Vec3::new(160.0, 90.0, 200.0),
        90.0,
        iron,
    )));
    scene.add(Arc::new(Sphere::new(
        &Vec3::new(400.0, 100.0, 320.0),
        100.0,
        gold,
    )));
    scene.build();

    let camera = Camera::new(
        &Vec3::new(278.0, 278.0, -800.0),
        &Vec3::new(278.0, 278.0, 0.0),
        &Vec3::new(0.0, 1.0, 0.0),
        40.0,
        aspect,
    );
    (scene, camera)
}
