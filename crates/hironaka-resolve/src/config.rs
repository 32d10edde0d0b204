//! Engine configuration.

/// Order in which pending charts are expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Traversal {
    /// Most recently created chart first (a stack).
    #[default]
    DepthFirst,
    /// Oldest pending chart first (a queue).
    BreadthFirst,
}

/// Which charts have their map checked against their expression on
/// creation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verification {
    /// No check on creation; `verify_chart` can still be called.
    Off,
    /// Only charts created in normal crossing form.
    Leaves,
    /// Every chart.
    #[default]
    EveryChart,
}

/// What to do with an exceptional factor of the pullback that has no
/// matching factor in the Jacobian determinant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnmatchedFactor {
    /// The coordinate does not divide the determinant, so its multiplicity
    /// there is zero.
    #[default]
    CountAsZero,
    /// Omit the factor from the RLCT pairs.
    Skip,
}

/// Configuration of a [`crate::ResolutionTree`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolveConfig {
    /// Expansion order of the worklist.
    pub traversal: Traversal,
    /// Consistency checks on chart creation.
    pub verification: Verification,
    /// Maximum number of blow-ups performed by one `resolve` call.
    pub max_auto_steps: usize,
    /// Treatment of unmatched exceptional factors.
    pub unmatched_factor: UnmatchedFactor,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            traversal: Traversal::default(),
            verification: Verification::default(),
            max_auto_steps: 10_000,
            unmatched_factor: UnmatchedFactor::default(),
        }
    }
}

impl ResolveConfig {
    /// Sets the traversal policy.
    #[must_use]
    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    /// Sets the verification level.
    #[must_use]
    pub fn with_verification(mut self, verification: Verification) -> Self {
        self.verification = verification;
        self
    }

    /// Sets the step limit of automatic resolution.
    #[must_use]
    pub fn with_max_auto_steps(mut self, max_auto_steps: usize) -> Self {
        self.max_auto_steps = max_auto_steps;
        self
    }

    /// Sets the unmatched factor policy.
    #[must_use]
    pub fn with_unmatched_factor(mut self, unmatched_factor: UnmatchedFactor) -> Self {
        self.unmatched_factor = unmatched_factor;
        self
    }
}
