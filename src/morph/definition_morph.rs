use itertools::Itertools;

use crate::{
    definition::Definition,
    error::PathError,
    morph::{Interpolation, Morph},
};

impl Morph for Definition {
    type Output = (Definition, bool);

    /// Morphs every point of a definition toward the point at the same index of the target.
    /// The transition is completed once every point is.
    ///
    /// # Failures
    /// - if both definitions do not have the same number of cubic points
    fn morph(&self, target: &Self, step: &Interpolation<'_>) -> Result<Self::Output, PathError> {
        if self.len() != target.len() {
            return Err(PathError::ShapeMismatch {
                from: self.len(),
                to: target.len(),
            });
        }

        let (anchor, anchor_completed) = self.anchor().morph(target.anchor(), step)?;
        let morphed: Vec<_> = self
            .points()
            .iter()
            .zip(target.points())
            .map(|(from, to)| from.morph(to, step))
            .try_collect()?;

        let completed = anchor_completed && morphed.iter().all(|(_, completed)| *completed);
        let points = morphed.into_iter().map(|(point, _)| point).collect_vec();

        Ok((Definition::new_unchecked(anchor, points), completed))
    }
}
