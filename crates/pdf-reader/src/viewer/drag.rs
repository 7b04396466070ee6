use egui::{Pos2, Vec2};

/// Pan gesture state. The anchor is the last pointer position seen while dragging.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        anchor: Pos2,
    },
}

impl DragState {
    /// Records `pos` as the anchor when the page overflows the viewport.
    /// A press over a page that fits is ignored.
    pub fn start(&mut self, pos: Pos2, overflowing: bool) {
        if overflowing {
            *self = Self::Dragging { anchor: pos };
        }
    }

    /// Returns the movement since the previous anchor and moves the anchor to `pos`.
    pub fn update(&mut self, pos: Pos2) -> Option<Vec2> {
        match self {
            Self::Idle => None,
            Self::Dragging { anchor } => {
                let delta = pos - *anchor;
                *anchor = pos;
                Some(delta)
            }
        }
    }

    pub fn end(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}
