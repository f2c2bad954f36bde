
use std::mem;

use itertools::Itertools;

use crate::definition::Definition;

/// Equalize the number of cubic segments of a batch of definitions meant to morph into one another.
/// Every definition is padded up to the largest segment count of the batch.
///
/// # Example
/// ```
/// use pathmorph::prelude::*;
///
/// let triangle: Definition = "M0 0L1 1L2 0z".parse().unwrap();
/// let square: Definition = "M0 0H1V1H0z".parse().unwrap();
/// let equalized = equalize(vec![triangle, square]);
/// assert_eq!(equalized[0].len(), equalized[1].len());
/// assert_eq!(equalized[0].segment_count(), 4);
/// ```
pub fn equalize(definitions: Vec<Definition>) -> Vec<Definition> {
    let target = definitions
        .iter()
        .map(|definition| definition.segment_count())
        .max()
        .unwrap_or(0);

    #[cfg(feature = "log")]
    log::debug!(
        "equalizing {} definitions to {} segments",
        definitions.len(),
        target
    );

    definitions
        .into_iter()
        .map(|mut definition| {
            equalize_to(&mut definition, target);
            definition
        })
        .collect_vec()
}

/// Pad a definition with clone segments until it has `segments` cubic segments.
///
/// Clones are spread evenly among the existing segments:
/// each pass inserts a zero motion segment `(P, P, P)` after every `delta`-th segment,
/// where `P` is the end point of that segment and `delta = round(count / missing)`.
/// Existing points are never removed, and a definition which already has enough segments is left untouched.
pub fn equalize_to(definition: &mut Definition, segments: usize) {
    if definition.is_empty() && segments > 0 {
        // nothing to spread clones among, the outline collapses on its anchor
        let clone = definition.anchor().to_clone();
        *definition.points_mut() = vec![clone; segments * 3];
        return;
    }

    while definition.segment_count() < segments {
        let count = definition.segment_count();
        let mut clones = segments - count;
        let delta = ((count as f64 / clones as f64).round() as usize).max(1);

        let points = mem::take(definition.points_mut());
        let mut equalized = Vec::with_capacity(points.len() + clones * 3);
        for (index, triple) in points.chunks_exact(3).enumerate() {
            equalized.extend_from_slice(triple);
            if clones > 0 && index % delta == 0 {
                let clone = triple[2].to_clone();
                equalized.extend([clone.clone(), clone.clone(), clone]);
                clones -= 1;
            }
        }
        *definition.points_mut() = equalized;
    }
}
