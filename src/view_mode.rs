use bevy::prelude::*;

pub struct ViewModePlugin;

impl Plugin for ViewModePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ViewMode>()
            .register_type::<ViewModeStore>()
            .init_resource::<ViewModeStore>()
            .add_observer(log_view_mode_toggled);
    }
}

/// Named camera/scene configurations the rigs can transition between
#[derive(Reflect, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    #[default]
    Center,
    RightSide,
}

impl ViewMode {
    /// Every mode, in the order `next` cycles through them
    pub const ALL: [Self; 2] = [Self::Center, Self::RightSide];

    /// The mode a toggle moves to. Cycles through `ALL`, so with two modes
    /// `Center` goes to `RightSide` and everything else goes back to `Center`.
    pub fn next(self) -> Self {
        let index = Self::ALL
            .iter()
            .position(|mode| *mode == self)
            .unwrap_or_default();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

/// Single source of truth for the current view mode.
///
/// Written only by the marker click observer, read by the rigs once per frame.
#[derive(Resource, Reflect, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Resource)]
pub struct ViewModeStore {
    current: ViewMode,
}

impl Default for ViewModeStore {
    fn default() -> Self { Self::new(ViewMode::default()) }
}

impl ViewModeStore {
    pub const fn new(initial: ViewMode) -> Self { Self { current: initial } }

    pub const fn current(&self) -> ViewMode { self.current }

    /// Advances to the next mode and returns it
    pub fn toggle(&mut self) -> ViewMode {
        self.current = self.current.next();
        self.current
    }
}

/// Triggered every time the store is toggled
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewModeToggled {
    pub from: ViewMode,
    pub to:   ViewMode,
}

/// Toggles the store and notifies observers in the same command flush
pub fn toggle_view_mode(commands: &mut Commands, store: &mut ViewModeStore) -> ViewMode {
    let from = store.current();
    let to = store.toggle();
    commands.trigger(ViewModeToggled { from, to });
    to
}

fn log_view_mode_toggled(toggled: On<ViewModeToggled>) {
    info!("view mode {:?} -> {:?}", toggled.from, toggled.to);
}
