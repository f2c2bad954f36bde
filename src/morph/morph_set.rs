use anyhow::Context;
use itertools::Itertools;
use rand::Rng;

use crate::{
    definition::Definition,
    equalize::equalize,
    morph::{Interpolation, Morph},
    normalize::Normalizer,
    parse::parse,
    schedule::{MorphOptions, Scheduler},
    timing::TimingFunction,
};

/// Result of advancing a transition by one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// Intermediate path data, the transition goes on
    InProgress(String),
    /// Path data of the target, the transition is over
    Completed(String),
}

impl Frame {
    pub fn definition(&self) -> &str {
        match self {
            Frame::InProgress(d) | Frame::Completed(d) => d,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Frame::Completed(_))
    }

    pub fn into_definition(self) -> String {
        match self {
            Frame::InProgress(d) | Frame::Completed(d) => d,
        }
    }
}

/// A transition toward the definition at `target`
#[derive(Debug)]
struct Transition {
    target: usize,
    timing: TimingFunction,
}

/// A batch of definitions prepared to morph into one another.
///
/// The batch is parsed, normalized, equalized and scheduled once on creation.
/// Transitions are advanced by calling `tick` with the time elapsed since their start,
/// the frame loop itself being driven by the caller.
///
/// # Example
/// ```
/// use pathmorph::prelude::*;
///
/// let options = MorphOptions::default().with_delay(0.).with_duration(1000.);
/// let mut set = MorphSet::try_new(&["M0 0L1 1L2 0z", "M0 0H2V2H0z"], options).unwrap();
/// // the triangle is padded with a clone segment to match the square
/// assert_eq!(
///     set.definition(),
///     "M0 0C0 0 1 1 1 1 1 1 1 1 1 1 1 1 2 0 2 0 2 0 0 0 0 0z"
/// );
///
/// set.transition_to(1, TimingFunction::default()).unwrap();
/// assert!(!set.tick(500.).unwrap().is_completed());
///
/// let frame = set.tick(1000.).unwrap();
/// assert_eq!(
///     frame.definition(),
///     "M0 0C0 0 2 0 2 0 2 0 2 2 2 2 2 2 0 2 0 2 0 2 0 0 0 0z"
/// );
/// assert!(frame.is_completed());
/// assert_eq!(set.current_index(), 1);
/// ```
#[derive(Debug)]
pub struct MorphSet {
    definitions: Vec<Definition>,
    options: MorphOptions,
    current: usize,
    /// Path data of the last emitted frame
    frame: String,
    transition: Option<Transition>,
}

impl MorphSet {
    /// Prepare a batch of path data, scheduling points with a thread local random generator
    /// # Failures
    /// - if the batch is empty
    /// - if the options are invalid
    /// - if a path data cannot be parsed or normalized
    pub fn try_new<S: AsRef<str>>(sources: &[S], options: MorphOptions) -> anyhow::Result<Self> {
        Self::try_with_scheduler(sources, Scheduler::new(options))
    }

    /// Prepare a batch of path data with the given scheduler
    pub fn try_with_scheduler<S: AsRef<str>, R: Rng>(
        sources: &[S],
        mut scheduler: Scheduler<R>,
    ) -> anyhow::Result<Self> {
        anyhow::ensure!(!sources.is_empty(), "No path definition to morph");
        let options = scheduler.options().clone();
        options.validate().context("Invalid morph options")?;

        let normalizer = Normalizer::new(options.precision());
        let definitions = sources
            .iter()
            .enumerate()
            .map(|(index, source)| {
                parse(source.as_ref())
                    .and_then(|commands| normalizer.normalize(&commands))
                    .with_context(|| format!("Invalid path definition at index {index}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let mut definitions = equalize(definitions);
        definitions
            .iter_mut()
            .for_each(|definition| scheduler.schedule(definition));

        #[cfg(feature = "log")]
        log::debug!(
            "prepared {} definitions of {} points, {} scheduled positions",
            definitions.len(),
            definitions[0].len(),
            scheduler.len()
        );

        let frame = definitions[0].to_string();
        Ok(Self {
            definitions,
            options,
            current: 0,
            frame,
            transition: None,
        })
    }

    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    pub fn options(&self) -> &MorphOptions {
        &self.options
    }

    /// Number of definitions in the batch
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Index of the definition the set rests on, or morphs from during a transition
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Index of the definition the set morphs to
    pub fn target_index(&self) -> Option<usize> {
        self.transition.as_ref().map(|t| t.target)
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Path data of the last emitted frame
    pub fn definition(&self) -> &str {
        &self.frame
    }

    /// Start a transition from the current definition to the definition at `index`,
    /// replacing any active transition.
    pub fn transition_to(&mut self, index: usize, timing: TimingFunction) -> anyhow::Result<()> {
        anyhow::ensure!(
            index < self.definitions.len(),
            "Definition index {} is out of range, the set has {} definitions",
            index,
            self.definitions.len()
        );

        #[cfg(feature = "log")]
        log::trace!("transition from {} to {}", self.current, index);

        self.transition = Some(Transition {
            target: index,
            timing,
        });
        Ok(())
    }

    /// Start a transition to the index computed from the current one
    pub fn transition_with<F>(&mut self, next: F, timing: TimingFunction) -> anyhow::Result<()>
    where
        F: FnOnce(usize) -> usize,
    {
        let index = next(self.current);
        self.transition_to(index, timing)
    }

    /// Advance the active transition to `elapsed` milliseconds since its start.
    /// The target becomes the current definition once the transition is completed.
    /// Without an active transition, the current definition is returned as completed.
    pub fn tick(&mut self, elapsed: f64) -> anyhow::Result<Frame> {
        let Some(transition) = &self.transition else {
            return Ok(Frame::Completed(self.frame.clone()));
        };

        let target = transition.target;
        let step = Interpolation::new(
            elapsed,
            &transition.timing,
            self.options.default_schedule(),
        )
        .with_precision(self.options.precision());
        let (definition, completed) = self.definitions[self.current]
            .morph(&self.definitions[target], &step)
            .with_context(|| format!("Failed to morph from {} to {}", self.current, target))?;
        self.frame = definition.to_string();

        if completed {
            #[cfg(feature = "log")]
            log::trace!("transition to {} completed at {}ms", target, elapsed);

            self.current = target;
            self.transition = None;
            Ok(Frame::Completed(self.frame.clone()))
        } else {
            Ok(Frame::InProgress(self.frame.clone()))
        }
    }

    /// Drop the active transition, restoring the current definition.
    /// Returns whether a transition was active.
    pub fn cancel(&mut self) -> bool {
        let cancelled = self.transition.take().is_some();
        if cancelled {
            self.frame = self.definitions[self.current].to_string();
        }
        cancelled
    }

    /// Serialized definitions of the batch, in order
    pub fn serialize(&self) -> Vec<String> {
        self.definitions.iter().map(|d| d.to_string()).collect_vec()
    }
}
