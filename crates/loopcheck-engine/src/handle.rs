/// Numeric output controls readable from the engine.
///
/// Port numbers match the engine's control surface; the tester only reads
/// `State`, the others exist so a handle can expose the full surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum OutputControl {
    State = 16,
    LoopLength,
    LoopPosition,
    CycleLength,
    LoopFreeMemory,
    LoopMemory,
    Waiting,
    TrueRate,
}

/// The live connection to the engine under test.
///
/// Exactly three operations; everything else the tester does is built on
/// top of these. The engine processes commands asynchronously relative to
/// this control surface; `request_pending` stays true until the most
/// recent request has been fully applied. At most one request may be in
/// flight at a time; that invariant is enforced by the protocol adapter,
/// not by implementations of this trait.
pub trait LooperHandle {
    /// Enqueue a command for processing. Non-blocking.
    fn request_command(&mut self, index: usize);

    /// True while the most recent request has not yet been applied.
    fn request_pending(&mut self) -> bool;

    /// Read a numeric output control.
    fn read_control_value(&mut self, control: OutputControl) -> f32;
}
