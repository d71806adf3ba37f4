use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

use super::wall::WallId;

slotmap::new_key_type! {
    /// Unique identifier for an opening within its layer.
    pub struct OpeningId;
}

/// The fixture type cut into a wall, with its open/flipped state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpeningKind {
    /// A two-sash casement window.
    Window { open: bool, flipped: bool },
    /// A single hinged door.
    Door { open: bool, flipped: bool },
}

impl OpeningKind {
    /// A closed, unflipped window.
    #[must_use]
    pub fn window() -> Self {
        Self::Window {
            open: false,
            flipped: false,
        }
    }

    /// A closed, unflipped door.
    #[must_use]
    pub fn door() -> Self {
        Self::Door {
            open: false,
            flipped: false,
        }
    }

    /// Swing angle (radians about the vertical axis) of the moving part.
    ///
    /// Doors swing a quarter turn, window sashes a sixth of a turn; `flipped`
    /// swings to the other side. Window sashes mirror this angle.
    #[must_use]
    pub fn swing(&self) -> f64 {
        match *self {
            Self::Window { open, flipped } => swing_angle(open, flipped, FRAC_PI_3),
            Self::Door { open, flipped } => swing_angle(open, flipped, FRAC_PI_2),
        }
    }

    /// Toggles the open state.
    pub fn toggle_open(&mut self) {
        match self {
            Self::Window { open, .. } | Self::Door { open, .. } => *open = !*open,
        }
    }

    /// Toggles the swing side.
    pub fn toggle_flipped(&mut self) {
        match self {
            Self::Window { flipped, .. } | Self::Door { flipped, .. } => *flipped = !*flipped,
        }
    }
}

fn swing_angle(open: bool, flipped: bool, angle: f64) -> f64 {
    match (open, flipped) {
        (false, _) => 0.0,
        (true, false) => angle,
        (true, true) => -angle,
    }
}

/// A door or window cut into a wall.
#[derive(Debug, Clone, PartialEq)]
pub struct Opening {
    pub wall: WallId,
    pub kind: OpeningKind,
    /// Normalized center position along the wall's start→end axis, in `[0, 1]`.
    pub dist: f64,
    pub width: f64,
    pub height: f64,
    /// Elevation of the bottom edge above the wall base.
    pub sill: f64,
    /// Fixture model used by the renderer.
    pub asset: String,
}

impl Opening {
    /// A standard centred door (1.0 × 2.2, on the floor).
    #[must_use]
    pub fn door(wall: WallId) -> Self {
        Self {
            wall,
            kind: OpeningKind::door(),
            dist: 0.5,
            width: 1.0,
            height: 2.2,
            sill: 0.0,
            asset: "standard".to_owned(),
        }
    }

    /// A standard centred window (1.5 × 1.2, sill at 0.9).
    #[must_use]
    pub fn window(wall: WallId) -> Self {
        Self {
            wall,
            kind: OpeningKind::window(),
            dist: 0.5,
            width: 1.5,
            height: 1.2,
            sill: 0.9,
            asset: "standard".to_owned(),
        }
    }

    /// Sets the normalized position along the wall.
    #[must_use]
    pub fn at(mut self, dist: f64) -> Self {
        self.dist = dist;
        self
    }

    /// Sets width and height.
    #[must_use]
    pub fn sized(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the sill elevation.
    #[must_use]
    pub fn with_sill(mut self, sill: f64) -> Self {
        self.sill = sill;
        self
    }

    /// Position along the wall clamped into `[0, 1]`.
    #[must_use]
    pub fn clamped_dist(&self) -> f64 {
        self.dist.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::KeyData;

    fn wall() -> WallId {
        WallId::from(KeyData::from_ffi(1))
    }

    #[test]
    fn closed_openings_do_not_swing() {
        assert!(OpeningKind::door().swing().abs() < f64::EPSILON);
        assert!(OpeningKind::window().swing().abs() < f64::EPSILON);
    }

    #[test]
    fn door_swings_further_than_window() {
        let mut door = OpeningKind::door();
        let mut window = OpeningKind::window();
        door.toggle_open();
        window.toggle_open();
        assert!((door.swing() - FRAC_PI_2).abs() < 1e-12);
        assert!((window.swing() - FRAC_PI_3).abs() < 1e-12);

        door.toggle_flipped();
        assert!((door.swing() + FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn default_sizes_by_kind() {
        let d = Opening::door(wall());
        assert!((d.width - 1.0).abs() < f64::EPSILON);
        assert!((d.height - 2.2).abs() < f64::EPSILON);
        assert!(d.sill.abs() < f64::EPSILON);

        let w = Opening::window(wall()).at(1.4);
        assert!((w.sill - 0.9).abs() < f64::EPSILON);
        assert!((w.clamped_dist() - 1.0).abs() < f64::EPSILON);
    }
}
