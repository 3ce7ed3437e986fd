//! Measure-overlay input machine.
//!
//! The measure tool never mutates its state from input; the machine only
//! maps events to lifecycle reactions.

use super::{OverlayEvent, OverlayReaction, VK_ESCAPE};

/// React to one input event on the measure overlay.
pub fn react(event: OverlayEvent) -> OverlayReaction {
    match event {
        OverlayEvent::SurfaceCreated => OverlayReaction::HideCursor,
        OverlayEvent::KeyUp(key) if key == VK_ESCAPE => OverlayReaction::RequestClose,
        OverlayEvent::RightButtonUp => OverlayReaction::RequestClose,
        OverlayEvent::LeftButtonUp(_) => OverlayReaction::CopyMeasurement,
        OverlayEvent::EraseBackground => OverlayReaction::Handled,
        _ => OverlayReaction::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    #[test]
    fn escape_requests_close() {
        assert_eq!(
            react(OverlayEvent::KeyUp(VK_ESCAPE)),
            OverlayReaction::RequestClose
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(react(OverlayEvent::KeyUp(0x41)), OverlayReaction::Ignored);
    }

    #[test]
    fn right_click_requests_close() {
        assert_eq!(
            react(OverlayEvent::RightButtonUp),
            OverlayReaction::RequestClose
        );
    }

    #[test]
    fn left_click_requests_measurement_copy() {
        assert_eq!(
            react(OverlayEvent::LeftButtonUp(Point::new(3, 4))),
            OverlayReaction::CopyMeasurement
        );
    }

    #[test]
    fn creation_hides_the_cursor() {
        assert_eq!(
            react(OverlayEvent::SurfaceCreated),
            OverlayReaction::HideCursor
        );
    }

    #[test]
    fn background_erase_is_swallowed() {
        assert_eq!(
            react(OverlayEvent::EraseBackground),
            OverlayReaction::Handled
        );
    }
}
