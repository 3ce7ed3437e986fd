//! Bounds-overlay input machine: Idle -> Selecting -> Idle.
//!
//! The tool state is mutated exclusively here, on the overlay's worker
//! thread; the draw callback only ever reads it.

use serde::Serialize;

use super::{OverlayEvent, OverlayReaction, VK_ESCAPE};
use crate::types::{Point, Rect};

/// Tool state for the bounds (drag-select) overlay.
///
/// `current_region_start` is present only while a drag is in progress;
/// the machine is in Selecting exactly when it is `Some`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundsToolState {
    pub current_region_start: Option<Point>,
}

impl BoundsToolState {
    /// True while a drag-selection is in progress.
    pub fn is_selecting(&self) -> bool {
        self.current_region_start.is_some()
    }
}

/// A completed drag-selection, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionSelection {
    pub start: Point,
    pub end: Point,
}

impl RegionSelection {
    /// The selected rectangle, normalized so an inverted drag still yields
    /// left < right and top < bottom.
    pub fn rect(&self) -> Rect {
        Rect::new(self.start.x, self.start.y, self.end.x, self.end.y).normalize()
    }
}

/// React to one input event on the bounds overlay, updating the drag state.
pub fn react(state: &mut BoundsToolState, event: OverlayEvent) -> OverlayReaction {
    match event {
        OverlayEvent::KeyUp(key) if key == VK_ESCAPE => OverlayReaction::RequestClose,
        OverlayEvent::RightButtonUp => OverlayReaction::RequestClose,
        OverlayEvent::LeftButtonDown(cursor) => {
            state.current_region_start = Some(cursor);
            OverlayReaction::Ignored
        }
        OverlayEvent::LeftButtonUp(cursor) => match state.current_region_start.take() {
            Some(start) => OverlayReaction::CommitRegion(RegionSelection { start, end: cursor }),
            // Button-up with no matching button-down (e.g. the press landed
            // on another window): nothing to commit.
            None => OverlayReaction::Ignored,
        },
        OverlayEvent::EraseBackground => OverlayReaction::Handled,
        _ => OverlayReaction::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_commits_region_and_returns_to_idle() {
        let mut state = BoundsToolState::default();

        let r = react(&mut state, OverlayEvent::LeftButtonDown(Point::new(10, 10)));
        assert_eq!(r, OverlayReaction::Ignored);
        assert!(state.is_selecting());
        assert_eq!(state.current_region_start, Some(Point::new(10, 10)));

        let r = react(&mut state, OverlayEvent::LeftButtonUp(Point::new(50, 60)));
        assert_eq!(
            r,
            OverlayReaction::CommitRegion(RegionSelection {
                start: Point::new(10, 10),
                end: Point::new(50, 60),
            })
        );
        assert!(!state.is_selecting());
    }

    #[test]
    fn lone_button_up_is_a_no_op() {
        let mut state = BoundsToolState::default();
        let r = react(&mut state, OverlayEvent::LeftButtonUp(Point::new(50, 60)));
        assert_eq!(r, OverlayReaction::Ignored);
        assert!(!state.is_selecting());
    }

    #[test]
    fn escape_closes_from_any_state() {
        let mut idle = BoundsToolState::default();
        assert_eq!(
            react(&mut idle, OverlayEvent::KeyUp(VK_ESCAPE)),
            OverlayReaction::RequestClose
        );

        let mut selecting = BoundsToolState {
            current_region_start: Some(Point::new(1, 2)),
        };
        assert_eq!(
            react(&mut selecting, OverlayEvent::KeyUp(VK_ESCAPE)),
            OverlayReaction::RequestClose
        );
    }

    #[test]
    fn right_click_closes_from_any_state() {
        let mut idle = BoundsToolState::default();
        assert_eq!(
            react(&mut idle, OverlayEvent::RightButtonUp),
            OverlayReaction::RequestClose
        );

        let mut selecting = BoundsToolState {
            current_region_start: Some(Point::new(1, 2)),
        };
        assert_eq!(
            react(&mut selecting, OverlayEvent::RightButtonUp),
            OverlayReaction::RequestClose
        );
    }

    #[test]
    fn background_erase_is_swallowed() {
        let mut state = BoundsToolState::default();
        assert_eq!(
            react(&mut state, OverlayEvent::EraseBackground),
            OverlayReaction::Handled
        );
    }

    #[test]
    fn inverted_drag_normalizes() {
        let sel = RegionSelection {
            start: Point::new(50, 60),
            end: Point::new(10, 10),
        };
        assert_eq!(sel.rect(), Rect::new(10, 10, 50, 60));
    }

    #[test]
    fn selection_serializes_as_start_end_payload() {
        let sel = RegionSelection {
            start: Point::new(1, 2),
            end: Point::new(3, 4),
        };
        let json = serde_json::to_value(sel).unwrap();
        assert_eq!(json["start"]["x"], 1);
        assert_eq!(json["end"]["y"], 4);
    }
}
