pub mod examples;
pub mod file;

use crate::{
    aggregate::ShapeList,
    light::Light,
    material::{Material, MaterialDescriptor, MaterialId},
    shape::Shape,
};

/// Everything the integrators need to know about the world.
///
/// A scene is built once, then only read while rendering.
#[derive(Default)]
pub struct Scene {
    pub objects: ShapeList,
    pub materials: Vec<MaterialDescriptor>,
    pub lights: Vec<Light>,
}

impl Scene {
    /// Insert an object in the scene.
    ///
    /// Its `MaterialId` must come from `insert_material` on this same scene.
    pub fn insert_object<T: Shape + 'static>(&mut self, object: T) {
        self.objects.0.push(Box::new(object))
    }

    /// Insert a light in the scene
    pub fn insert_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Insert a material and returns the Material ID associated with this material
    pub fn insert_material(&mut self, material: MaterialDescriptor) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    /// Panics if `id` was not returned by `insert_material` on this scene
    pub fn material(&self, id: MaterialId) -> &Material {
        &self.materials[id.0].material
    }
}

#[cfg(test)]
mod tests {
    use super::Scene;
    use crate::material::{Material, MaterialDescriptor, MaterialId};

    #[test]
    fn material_ids_index_the_arena() {
        let mut scene = Scene::default();
        let ivory = scene.insert_material(MaterialDescriptor {
            label: None,
            material: Material::ivory(),
        });
        let glass = scene.insert_material(MaterialDescriptor {
            label: None,
            material: Material::glass(),
        });
        assert_eq!(ivory, MaterialId(0));
        assert_eq!(glass, MaterialId(1));
        assert_eq!(*scene.material(glass), Material::glass());
    }

    #[test]
    #[should_panic]
    fn foreign_material_id_panics() {
        let mut other = Scene::default();
        other.insert_material(MaterialDescriptor {
            label: None,
            material: Material::ivory(),
        });
        Scene::default().material(MaterialId(0));
    }
}
