//! Problem-class identity.
//!
//! A problem class names a family of comparable scenarios (same generator,
//! same units, same scoring rules).  Analysis tooling groups results by it.
//! Identity is the family key: two `ProblemClass` values are the same class
//! exactly when their keys are equal.

use std::fmt;

/// A problem family, identified by a static key.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ProblemClass(&'static str);

impl ProblemClass {
    /// Fabri & Recht dynamic PDPTW instances.
    pub const FABRI_RECHT: ProblemClass = ProblemClass("fabrirecht");
    /// Gendreau et al. (2006) dynamic PDPTW instances.
    pub const GENDREAU06: ProblemClass = ProblemClass("gendreau06");
    /// Instances produced by [`generate`][crate::generate].
    pub const GENERATED: ProblemClass = ProblemClass("generated");

    /// Every family known to this crate.
    pub const KNOWN: [ProblemClass; 3] =
        [ProblemClass::FABRI_RECHT, ProblemClass::GENDREAU06, ProblemClass::GENERATED];

    /// Declare a family outside the built-in registry.
    pub const fn new(id: &'static str) -> Self {
        ProblemClass(id)
    }

    /// Look up a built-in family by key.
    pub fn from_id(id: &str) -> Option<ProblemClass> {
        Self::KNOWN.into_iter().find(|c| c.0 == id)
    }

    #[inline]
    pub fn id(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ProblemClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
