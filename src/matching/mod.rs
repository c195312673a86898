use serde::{Serialize, Deserialize};

use crate::descriptor::BinaryDescriptor;
use crate::training::TrainedMarker;

/// A screen corner matched to a trained corner, identified by trained level
/// and index within that level.
#[derive(Debug,Clone,Copy,Serialize,Deserialize)]
pub struct CornerMatch {
    pub pattern_level: usize,
    pub pattern_idx: usize,
    pub screen_idx: usize,
    pub distance: u64
}

/// Best Hamming match per screen descriptor across every trained level.
/// Matches above `max_distance` are dropped.
pub fn match_against_marker(marker: &TrainedMarker, screen_descriptors: &[BinaryDescriptor], max_distance: u64) -> Vec<CornerMatch> {
    let mut matches = Vec::<CornerMatch>::new();

    for (screen_idx, screen_descriptor) in screen_descriptors.iter().enumerate() {
        let mut best: Option<CornerMatch> = None;

        for (pattern_level, level) in marker.levels.iter().enumerate() {
            for (pattern_idx, trained_descriptor) in level.descriptors.iter().enumerate() {
                let distance = screen_descriptor.hamming_distance(trained_descriptor);

                let better = match &best {
                    Some(current) => distance < current.distance,
                    None => true
                };
                if better {
                    best = Some(CornerMatch{pattern_level, pattern_idx, screen_idx, distance});
                }
            }
        }

        match best {
            Some(found) if found.distance <= max_distance => matches.push(found),
            _ => ()
        }
    }

    matches
}

/// Two-image variant: best match in `b` for every descriptor in `a`,
/// returned as (index in a, index in b) pairs.
pub fn match_descriptor_sets(descriptors_a: &[BinaryDescriptor], descriptors_b: &[BinaryDescriptor], max_distance: u64) -> Vec<(usize,usize)> {
    let mut pairs = Vec::<(usize,usize)>::new();

    for (a_idx, descriptor_a) in descriptors_a.iter().enumerate() {
        let best = descriptors_b.iter()
            .enumerate()
            .map(|(b_idx, descriptor_b)| (b_idx, descriptor_a.hamming_distance(descriptor_b)))
            .min_by_key(|&(_, distance)| distance);

        match best {
            Some((b_idx, distance)) if distance <= max_distance => pairs.push((a_idx, b_idx)),
            _ => ()
        }
    }

    pairs
}
