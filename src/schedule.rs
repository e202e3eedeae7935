use bevy::prelude::*;

/// Per-frame ordering of the rig systems
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum RigSet {
    /// Read the cursor into a `PointerSample`
    SamplePointer,
    /// Advance camera and scene group toward the current view profile
    Advance,
    /// Anything that reads the advanced transforms (labels, settle tracking)
    Present,
}

pub struct SchedulePlugin;

impl Plugin for SchedulePlugin {
    fn build(&self, app: &mut App) {
        // rigs must see this frame's pointer sample, and labels must project
        // from this frame's camera transform
        app.configure_sets(
            Update,
            (RigSet::SamplePointer, RigSet::Advance, RigSet::Present).chain(),
        );
    }
}
