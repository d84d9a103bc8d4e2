//! The configuration of blocklist-core.
//!
//! The list historically accepted a handful of questionable boundary conditions:
//!
//! -   Reading the node at `index == size`, one past the end.
//! -   Inserting at `index > size`, which was silently dropped.
//!
//! The Configuration instance selects whether those conditions are preserved, or rejected as `OutOfRange`.

/// Configuration
///
/// The Configuration instance allows adjusting the boundary policies of an `OrderedList`.
pub trait Configuration {
    /// Whether `index == size` is accepted by the indexed accessors.
    ///
    /// There is no node one past the end, hence when accepted the access fails with `NullReference`, rather than
    /// `OutOfRange`.
    const INCLUSIVE_UPPER_BOUND: bool;

    /// Whether an insertion at `index > size` is rejected with `OutOfRange`.
    ///
    /// When not rejected, the insertion is silently dropped.
    const REJECT_OUT_OF_RANGE_INSERT: bool;
}

/// StrictConfiguration
///
/// The default configuration: every index outside of the list is rejected as `OutOfRange`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StrictConfiguration;

impl Configuration for StrictConfiguration {
    const INCLUSIVE_UPPER_BOUND: bool = false;
    const REJECT_OUT_OF_RANGE_INSERT: bool = true;
}

/// CompatibleConfiguration
///
/// The historical configuration, for callers relying on the boundary quirks of earlier versions of the list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CompatibleConfiguration;

impl Configuration for CompatibleConfiguration {
    const INCLUSIVE_UPPER_BOUND: bool = true;
    const REJECT_OUT_OF_RANGE_INSERT: bool = false;
}
