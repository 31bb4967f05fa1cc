//! Built-in demo scenes, assembled through the public scene API.

use clap::ValueEnum;
use luma_renderer::{colors, Camera, Color, CullMode, Material, Scene, SceneError, Vec3};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DemoScene {
    /// Solid-colour room with two large spheres lit from above
    Room,
    /// Six solid-colour spheres under one point light
    Spheres,
    /// Cook-Torrance metals and plastics at three roughness levels
    #[default]
    Materials,
    /// A rotated quad mesh in a Lambert box
    Mesh,
}

impl DemoScene {
    pub fn build(self) -> Result<Scene, SceneError> {
        let mut scene = Scene::new();
        match self {
            DemoScene::Room => room(&mut scene)?,
            DemoScene::Spheres => spheres(&mut scene)?,
            DemoScene::Materials => materials(&mut scene)?,
            DemoScene::Mesh => mesh(&mut scene)?,
        }

        log::info!(
            "Built {:?} demo: {} spheres, {} planes, {} meshes, {} lights",
            self,
            scene.spheres().len(),
            scene.planes().len(),
            scene.meshes().len(),
            scene.lights().len()
        );
        Ok(scene)
    }
}

fn room(scene: &mut Scene) -> Result<(), SceneError> {
    let red = 0;
    let blue = scene.add_material(Material::solid_color(colors::BLUE));
    let yellow = scene.add_material(Material::solid_color(colors::YELLOW));
    let green = scene.add_material(Material::solid_color(colors::GREEN));
    let magenta = scene.add_material(Material::solid_color(colors::MAGENTA));

    scene.add_sphere(Vec3::new(-25.0, 0.0, 100.0), 50.0, red)?;
    scene.add_sphere(Vec3::new(25.0, 0.0, 100.0), 50.0, blue)?;

    scene.add_plane(Vec3::new(-75.0, 0.0, 0.0), Vec3::X, green)?;
    scene.add_plane(Vec3::new(75.0, 0.0, 0.0), Vec3::NEG_X, green)?;
    scene.add_plane(Vec3::new(0.0, -75.0, 0.0), Vec3::Y, yellow)?;
    scene.add_plane(Vec3::new(0.0, 75.0, 0.0), Vec3::NEG_Y, yellow)?;
    scene.add_plane(Vec3::new(0.0, 0.0, 125.0), Vec3::NEG_Z, magenta)?;

    scene.add_point_light(Vec3::new(0.0, 60.0, 10.0), 6000.0, colors::WHITE);
    Ok(())
}

fn spheres(scene: &mut Scene) -> Result<(), SceneError> {
    *scene.camera_mut() = Camera::new(Vec3::new(0.0, 3.0, -9.0), 45.0);

    let red = 0;
    let blue = scene.add_material(Material::solid_color(colors::BLUE));
    let yellow = scene.add_material(Material::solid_color(colors::YELLOW));
    let green = scene.add_material(Material::solid_color(colors::GREEN));
    let magenta = scene.add_material(Material::solid_color(colors::MAGENTA));

    add_box(scene, green, yellow, magenta)?;

    for (i, x) in [-1.75, 0.0, 1.75].into_iter().enumerate() {
        let (bottom, top) = if i % 2 == 0 { (red, blue) } else { (blue, red) };
        scene.add_sphere(Vec3::new(x, 1.0, 0.0), 0.75, bottom)?;
        scene.add_sphere(Vec3::new(x, 3.0, 0.0), 0.75, top)?;
    }

    scene.add_point_light(Vec3::new(0.0, 5.0, -5.0), 70.0, colors::WHITE);
    Ok(())
}

fn materials(scene: &mut Scene) -> Result<(), SceneError> {
    *scene.camera_mut() = Camera::new(Vec3::new(0.0, 3.0, -9.0), 45.0);

    let silver = Color::new(0.972, 0.960, 0.915);
    let gray = Color::splat(0.75);
    let walls = scene.add_material(Material::lambert(Color::new(0.49, 0.57, 0.57), 1.0));

    add_box(scene, walls, walls, walls)?;

    for (x, roughness) in [(-1.75, 1.0), (0.0, 0.6), (1.75, 0.1)] {
        let metal = scene.add_material(Material::cook_torrance(silver, 1.0, roughness));
        let plastic = scene.add_material(Material::cook_torrance(gray, 0.0, roughness));
        scene.add_sphere(Vec3::new(x, 1.0, 0.0), 0.75, metal)?;
        scene.add_sphere(Vec3::new(x, 3.0, 0.0), 0.75, plastic)?;
    }

    add_three_lights(scene);
    Ok(())
}

fn mesh(scene: &mut Scene) -> Result<(), SceneError> {
    *scene.camera_mut() = Camera::new(Vec3::new(0.0, 1.0, -5.0), 45.0);

    let walls = scene.add_material(Material::lambert(Color::new(0.49, 0.57, 0.57), 1.0));
    let white = scene.add_material(Material::lambert(colors::WHITE, 1.0));

    add_box(scene, walls, walls, walls)?;

    let quad = scene.add_triangle_mesh(CullMode::NoCulling, white)?;
    quad.positions = vec![
        Vec3::new(-0.75, -1.0, 0.0),
        Vec3::new(-0.75, 1.0, 0.0),
        Vec3::new(0.75, 1.0, 1.0),
        Vec3::new(0.75, -1.0, 0.0),
    ];
    quad.indices = vec![0, 1, 2, 0, 2, 3];
    quad.calculate_normals();
    quad.translate(Vec3::new(0.0, 1.5, 0.0));
    quad.rotate_y(45.0);
    quad.update_transforms();

    add_three_lights(scene);
    Ok(())
}

/// Five walls of a 10 x 10 box open toward the camera.
fn add_box(scene: &mut Scene, sides: usize, floors: usize, back: usize) -> Result<(), SceneError> {
    scene.add_plane(Vec3::new(-5.0, 0.0, 0.0), Vec3::X, sides)?;
    scene.add_plane(Vec3::new(5.0, 0.0, 0.0), Vec3::NEG_X, sides)?;
    scene.add_plane(Vec3::new(0.0, 0.0, 0.0), Vec3::Y, floors)?;
    scene.add_plane(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y, floors)?;
    scene.add_plane(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z, back)?;
    Ok(())
}

fn add_three_lights(scene: &mut Scene) {
    scene.add_point_light(Vec3::new(0.0, 5.0, 5.0), 50.0, Color::new(1.0, 0.61, 0.45));
    scene.add_point_light(Vec3::new(-2.5, 5.0, -5.0), 70.0, Color::new(1.0, 0.8, 0.45));
    scene.add_point_light(Vec3::new(2.5, 2.5, -5.0), 50.0, Color::new(0.34, 0.47, 0.68));
}
