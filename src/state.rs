#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RotatorState {
    Idle,     // No timer registered
    Rotating, // Repeating timer is advancing the slides
}
