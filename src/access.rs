//! Storage-access seam.
//!
//! Permission negotiation belongs to the embedding host; the scanner only
//! needs a yes/no answer before it starts. Access revoked mid-walk shows up
//! as per-directory read failures, which the walk absorbs on its own.

pub trait PermissionGate {
    fn has_access(&self) -> bool;
}

/// Gate for hosts where access is established out of band.
pub struct AlwaysGranted;

impl PermissionGate for AlwaysGranted {
    fn has_access(&self) -> bool {
        true
    }
}
