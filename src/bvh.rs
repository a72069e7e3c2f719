use crate::aabb::Aabb;
use crate::aliases::RandGen;
use crate::hit_record::{HitRecord, LightSample};
use crate::hitable::empty::Empty;
use crate::hitable::list::HitableList;
use crate::hitable::Hitable;
use crate::ray::Ray;
use rand::Rng;
use std::sync::Arc;

/// Binary BVH over the scene's objects, built once before rendering.
pub struct BvhNode {
    left: Arc<dyn Hitable>,
    right: Arc<dyn Hitable>,
    // index of the splitting axis, used to order traversal
    axis: usize,
    aabb: Aabb,
}

impl BvhNode {
    pub fn new(mut list: Vec<Arc<dyn Hitable>>) -> Self {
        if list.is_empty() {
            return BvhNode {
                left: Arc::new(Empty),
                right: Arc::new(Empty),
                axis: 0,
                aabb: Aabb::empty(),
            };
        }
        if list.len() == 1 {
            let head = list.pop().unwrap();
            let aabb = head.bounding_box();
            return BvhNode {
                left: head,
                right: Arc::new(Empty),
                axis: 0,
                aabb,
            };
        }
        let mut bboxes: Vec<Aabb> = list.iter().map(|h| h.bounding_box()).collect();
        let (axis, idx) = Self::search_splitting_axis_index(&mut bboxes);
        let (left, right): (Arc<dyn Hitable>, Arc<dyn Hitable>) = if idx == 0 {
            // no split beats keeping the whole group together
            (Arc::new(HitableList::new(list)), Arc::new(Empty))
        } else {
            Self::sort_by_center(&mut list, axis);
            let right_list = list.split_off(idx);
            (
                Arc::new(BvhNode::new(list)),
                Arc::new(BvhNode::new(right_list)),
            )
        };
        let aabb = Aabb::unite(&left.bounding_box(), &right.bounding_box());
        BvhNode {
            left,
            right,
            axis,
            aabb,
        }
    }

    /// Returns (axis, index) of the cheapest split by surface-area
    /// heuristic; index 0 means no split pays off.
    fn search_splitting_axis_index(bboxes: &mut Vec<Aabb>) -> (usize, usize) {
        let mut min_axis = 0;
        let mut min_idx = 0;
        let mut min_cost = f32::MAX;
        for axis in 0..3 {
            bboxes.sort_unstable_by(|a, b| a.compare_center(b, axis));
            let areas = Self::prefix_suffix_areas(bboxes);
            for i in 0..bboxes.len() {
                let cost =
                    Self::cost_sah(areas[i].0, i) + Self::cost_sah(areas[i].1, bboxes.len() - i);
                if cost < min_cost {
                    min_axis = axis;
                    min_idx = i;
                    min_cost = cost;
                }
            }
        }
        (min_axis, min_idx)
    }

    /// For [a, b, c] returns
    /// [(|0|, |a+b+c|), (|a|, |b+c|), (|a+b|, |c|), (|a+b+c|, |0|)]
    /// where + unites boxes and |x| is surface area.
    fn prefix_suffix_areas(list: &[Aabb]) -> Vec<(f32, f32)> {
        let mut areas = vec![(0.0, 0.0); list.len() + 1];
        let mut front = Aabb::empty();
        let mut back = Aabb::empty();
        for i in 0..list.len() {
            front = Aabb::unite(&front, &list[i]);
            back = Aabb::unite(&back, &list[list.len() - i - 1]);
            areas[i + 1].0 = front.area();
            areas[list.len() - (i + 1)].1 = back.area();
        }
        areas
    }

    fn sort_by_center(list: &mut [Arc<dyn Hitable>], axis: usize) {
        list.sort_unstable_by(|a, b| a.bounding_box().compare_center(&b.bounding_box(), axis));
    }

    fn cost_sah(box_surface_area: f32, primitives: usize) -> f32 {
        box_surface_area * primitives as f32
    }
}

impl Hitable for BvhNode {
    fn hit<'s>(&'s self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord<'s>> {
        if !self.aabb.hit(ray, t_min, t_max) {
            return None;
        }
        // visit the child nearer along the split axis first
        let (first, second) = if ray.direction[self.axis] >= 0.0 {
            (&self.left, &self.right)
        } else {
            (&self.right, &self.left)
        };
        if let Some(hit_first) = first.hit(ray, t_min, t_max) {
            if let Some(hit_second) = second.hit(ray, t_min, hit_first.t) {
                Some(hit_second)
            } else {
                Some(hit_first)
            }
        } else {
            second.hit(ray, t_min, t_max)
        }
    }
    fn bounding_box(&self) -> Aabb {
        self.aabb
    }
    fn area(&self) -> f32 {
        self.left.area() + self.right.area()
    }
    fn has_emission(&self) -> bool {
        self.left.has_emission() || self.right.has_emission()
    }
    fn sample_surface(&self, rng: &mut RandGen) -> (LightSample, f32) {
        let total = self.area();
        if total <= 0.0 {
            return (LightSample::invalid(), 0.0);
        }
        let (sample, _) = if rng.gen::<f32>() * total < self.left.area() {
            self.left.sample_surface(rng)
        } else {
            self.right.sample_surface(rng)
        };
        (sample, 1.0 / total)
    }
}
