/// Frame-to-frame state of the scaler.
///
/// Transitions follow the host engine's tracked flags directly, with no
/// hysteresis or debounce: both markers visible means `Tracking`, anything
/// else means `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScalerState {
    /// One or both markers untracked; the transform is left untouched.
    #[default]
    Idle,
    /// Both markers tracked; scale and position are recomputed every frame.
    Tracking,
}
