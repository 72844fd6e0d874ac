/// Which gesture family drives column reordering.
///
/// The adapter picks `Pointer` or `Touch` from a runtime device check. `Hybrid` accepts both, for
/// devices with a touch screen and a pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputMode {
    #[default]
    Pointer,
    Touch,
    Hybrid,
}

impl InputMode {
    pub fn accepts_drag(self) -> bool {
        matches!(self, Self::Pointer | Self::Hybrid)
    }

    pub fn accepts_tap(self) -> bool {
        matches!(self, Self::Touch | Self::Hybrid)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReorderState {
    #[default]
    Idle,
    /// A header is being dragged (pointer).
    Dragging { from: usize, hover: Option<usize> },
    /// A header was tapped and waits for the second tap (touch).
    Selected { first: usize },
}

/// A column permutation produced by a completed gesture. Indexes are visible-column positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReorderOp {
    /// Remove the column at `from` and reinsert it at `to`.
    Move { from: usize, to: usize },
    /// Exchange the columns at `a` and `b`.
    Swap { a: usize, b: usize },
}

/// Gesture state machine for column reordering.
///
/// It only tracks gestures; applying the resulting [`ReorderOp`] to a column set is up to the
/// owner (see [`crate::Table`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColumnReorder {
    state: ReorderState,
    input_mode: InputMode,
}

impl ColumnReorder {
    pub fn new(input_mode: InputMode) -> Self {
        Self {
            state: ReorderState::Idle,
            input_mode,
        }
    }

    pub fn state(&self) -> ReorderState {
        self.state
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn set_input_mode(&mut self, input_mode: InputMode) {
        if self.input_mode != input_mode {
            self.input_mode = input_mode;
            self.reset();
        }
    }

    pub fn reset(&mut self) {
        self.state = ReorderState::Idle;
    }

    pub fn dragged_index(&self) -> Option<usize> {
        match self.state {
            ReorderState::Dragging { from, .. } => Some(from),
            _ => None,
        }
    }

    pub fn hover_index(&self) -> Option<usize> {
        match self.state {
            ReorderState::Dragging { hover, .. } => hover,
            _ => None,
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        match self.state {
            ReorderState::Selected { first } => Some(first),
            _ => None,
        }
    }

    /// Returns `false` when drag gestures are not accepted in the current input mode.
    pub fn drag_start(&mut self, index: usize) -> bool {
        if !self.input_mode.accepts_drag() {
            return false;
        }
        self.state = ReorderState::Dragging {
            from: index,
            hover: None,
        };
        true
    }

    pub fn drag_over(&mut self, index: usize) {
        if let ReorderState::Dragging { hover, .. } = &mut self.state {
            *hover = Some(index);
        }
    }

    /// Completes a drag. Any drop returns the machine to `Idle`.
    pub fn drop(&mut self, index: usize) -> Option<ReorderOp> {
        let state = core::mem::take(&mut self.state);
        match state {
            ReorderState::Dragging { from, .. } if from != index => Some(ReorderOp::Move {
                from,
                to: index,
            }),
            _ => None,
        }
    }

    /// The drag ended without a drop target.
    pub fn drag_end(&mut self) {
        if matches!(self.state, ReorderState::Dragging { .. }) {
            self.state = ReorderState::Idle;
        }
    }

    /// Tap-to-swap. The first tap selects, the second tap on another column swaps, a second tap on
    /// the same column deselects.
    pub fn tap(&mut self, index: usize) -> Option<ReorderOp> {
        if !self.input_mode.accepts_tap() {
            return None;
        }
        match self.state {
            ReorderState::Idle => {
                self.state = ReorderState::Selected { first: index };
                None
            }
            ReorderState::Selected { first } => {
                self.state = ReorderState::Idle;
                (first != index).then_some(ReorderOp::Swap { a: first, b: index })
            }
            ReorderState::Dragging { .. } => None,
        }
    }

    /// A tap landed outside the table: drop the pending selection.
    pub fn tap_outside(&mut self) {
        if matches!(self.state, ReorderState::Selected { .. }) {
            self.state = ReorderState::Idle;
        }
    }
}
