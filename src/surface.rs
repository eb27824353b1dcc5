/// What a rotator reads from and writes to the page it is bound to.
///
/// Implemented by the raylib [`Stage`](crate::carousel::stage::Stage) and by
/// test doubles.
pub trait Surface {
    /// Rendered width of each slide, in order.
    fn slide_widths(&self) -> Vec<f32>;

    fn set_track_width(&mut self, width: f32);

    /// Space laid out after each slide. Follows the rotator's padding.
    fn set_gap(&mut self, gap: f32);

    /// Starts an animated move of the track's left margin. Fire and forget.
    fn animate_track(&mut self, margin_left: f32);

    /// Number of entries in the selector list next to the track.
    fn selector_len(&self) -> usize;

    /// Adds or removes the selected marker on one selector entry.
    fn set_selected(&mut self, index: usize, selected: bool);
}
