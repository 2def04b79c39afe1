use egui::Pos2;

/// Identifies one pointer (mouse, or one finger on a touch screen).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointerId(pub u64);

impl PointerId {
    /// The mouse pointer.
    pub const MOUSE: Self = Self(0);

    const TOUCH_BIT: u64 = 1 << 63;

    /// The pointer for finger `id` of a touch screen. Touch pointers never collide with
    /// [`Self::MOUSE`].
    pub const fn touch(id: u64) -> Self {
        Self(id | Self::TOUCH_BIT)
    }

    pub const fn is_touch(self) -> bool {
        self.0 & Self::TOUCH_BIT != 0
    }
}

/// Identifies a pointer button (0 = primary).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ButtonId(pub u8);

impl ButtonId {
    pub const PRIMARY: Self = Self(0);
    pub const SECONDARY: Self = Self(1);
    pub const MIDDLE: Self = Self(2);
}

/// A pointer notification in stage coordinates, as fed to [`super::Scene::handle_pointer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Press {
        pointer: PointerId,
        button: ButtonId,
        pos: Pos2,
    },
    Drag {
        pointer: PointerId,
        pos: Pos2,
    },
    Release {
        pointer: PointerId,
        button: ButtonId,
        pos: Pos2,
    },
}

impl PointerEvent {
    pub fn pointer(&self) -> PointerId {
        match *self {
            Self::Press { pointer, .. }
            | Self::Drag { pointer, .. }
            | Self::Release { pointer, .. } => pointer,
        }
    }

    pub fn pos(&self) -> Pos2 {
        match *self {
            Self::Press { pos, .. } | Self::Drag { pos, .. } | Self::Release { pos, .. } => pos,
        }
    }
}

/// Where a draggable is in its press → drag → release sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        pointer: PointerId,
    },
}

impl DragPhase {
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}
