//! Movement domain: box probes backed by avian's spatial query.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{CollisionProbe, GameLayer};

pub(crate) struct SpatialProbe<'a, 'w, 's> {
    pub spatial_query: &'a SpatialQuery<'w, 's>,
}

impl CollisionProbe for SpatialProbe<'_, '_, '_> {
    fn query_overlap(
        &self,
        center: Vec2,
        half_extents: Vec2,
        rotation: f32,
        layer: GameLayer,
    ) -> bool {
        // Filter to a single layer so the player's own collider never matches
        let filter = SpatialQueryFilter::from_mask(layer);
        let shape = Collider::rectangle(half_extents.x * 2.0, half_extents.y * 2.0);

        !self
            .spatial_query
            .shape_intersections(&shape, center, rotation, &filter)
            .is_empty()
    }
}
