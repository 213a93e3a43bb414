#![forbid(unsafe_code)]

//! Circular pane arrangement and horizontal placement.
//!
//! The carousel shows the selected pane in the middle of the container and
//! spreads the remaining panes to either side so that the strip looks
//! continuous: when one side has more than `floor(N/2)` panes, the overflow
//! wraps around to the other side.
//!
//! # Example
//!
//! ```text
//! panes  = [0, 1, 2, 3, 4], select = 3, half = 2
//! left   = [0, 1, 2] -> overflow [0] moves to the end of right
//! right  = [4]       -> [4, 0]
//! order  = [1, 2, 3, 4, 0]
//! ```
//!
//! Every pane is then anchored to the container's 50% line and shifted by
//! `(arranged_position - center_position) * pane_width + delta_x` pixels.
//! Before the pane width is known, the same layout is expressed in
//! percentages with each pane assumed to be as wide as the container.

use std::fmt;

/// Result of arranging `len` panes around a selected index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Arrangement {
    order: Vec<usize>,
    positions: Vec<usize>,
    center: usize,
}

impl Arrangement {
    /// Arrange `len` panes around `select`.
    ///
    /// `select` is clamped into range; an empty sequence yields an empty
    /// arrangement.
    #[must_use]
    pub fn new(len: usize, select: usize) -> Self {
        if len == 0 {
            return Self::default();
        }
        let select = select.min(len - 1);
        let half = len / 2;

        let mut left: Vec<usize> = (0..select).collect();
        let mut right: Vec<usize> = (select + 1..len).collect();

        if left.len() > half {
            let overflow = left.len() - half;
            right.extend(left.drain(..overflow));
        } else if right.len() > half {
            let wrapped: Vec<usize> = right.drain(half..).collect();
            left.splice(0..0, wrapped);
        }

        let center = left.len();
        let mut order = left;
        order.push(select);
        order.append(&mut right);

        let mut positions = vec![0; len];
        for (pos, &index) in order.iter().enumerate() {
            positions[index] = pos;
        }

        Self {
            order,
            positions,
            center,
        }
    }

    /// Pane indices in left-to-right visual order.
    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Panes logically left of the selected one, left to right.
    #[must_use]
    pub fn left(&self) -> &[usize] {
        &self.order[..self.center]
    }

    /// Panes logically right of the selected one, left to right.
    #[must_use]
    pub fn right(&self) -> &[usize] {
        self.order.get(self.center + 1..).unwrap_or(&[])
    }

    /// Visual position of pane `index`.
    #[must_use]
    pub fn position_of(&self, index: usize) -> Option<usize> {
        self.positions.get(index).copied()
    }

    /// Visual position of the selected pane.
    #[inline]
    #[must_use]
    pub const fn center(&self) -> usize {
        self.center
    }

    /// Signed distance of pane `index` from the selected pane, in panes.
    #[must_use]
    pub fn distance_of(&self, index: usize) -> Option<isize> {
        self.position_of(index)
            .map(|pos| pos as isize - self.center as isize)
    }

    /// Whether pane `index` sits at either end of the strip.
    ///
    /// The selected pane is never considered an edge, so a one- or two-pane
    /// carousel keeps its current pane visible.
    #[must_use]
    pub fn is_edge(&self, index: usize) -> bool {
        let Some(pos) = self.position_of(index) else {
            return false;
        };
        pos != self.center && (pos == 0 || pos + 1 == self.order.len())
    }

    /// Number of arranged panes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether there is nothing to arrange.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// ---------------------------------------------------------------------------
// CSS-ish lengths
// ---------------------------------------------------------------------------

/// Writes `value` without a negative-zero sign.
fn write_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value == 0.0 {
        f.write_str("0")
    } else {
        write!(f, "{value}")
    }
}

/// A length in pixels or percent of the container width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    /// Absolute pixels.
    Px(f64),
    /// Percent of the container width.
    Percent(f64),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Px(v) => {
                write_number(f, v)?;
                f.write_str("px")
            }
            Self::Percent(v) => {
                write_number(f, v)?;
                f.write_str("%")
            }
        }
    }
}

/// Left edge of a pane: `percent% + pixels px` from the container's left.
///
/// Displays as a `calc()` expression, e.g. `calc(50% - 500px)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalOffset {
    /// Percentage anchor.
    pub percent: f64,
    /// Signed pixel shift from the anchor.
    pub pixels: f64,
}

impl HorizontalOffset {
    /// Resolve to pixels inside a container of the given width.
    #[must_use]
    pub fn resolve(&self, container_width: f64) -> f64 {
        container_width * self.percent / 100.0 + self.pixels
    }
}

impl fmt::Display for HorizontalOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("calc(")?;
        write_number(f, self.percent)?;
        f.write_str(if self.pixels < 0.0 { "% - " } else { "% + " })?;
        write_number(f, self.pixels.abs())?;
        f.write_str("px)")
    }
}

// ---------------------------------------------------------------------------
// Placement
// ---------------------------------------------------------------------------

/// Where and how one pane is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanePlacement {
    /// Pane index in the source sequence.
    pub index: usize,
    /// Signed distance from the selected pane, in panes.
    pub distance: isize,
    /// Left edge of the pane.
    pub left: HorizontalOffset,
    /// Negative half-width margin that centers the pane on `left`.
    pub margin_left: Length,
    /// 0 for the panes at either end of the strip, 1 otherwise.
    pub opacity: f64,
}

/// Compute the placement of every pane, in source order.
///
/// `pane_width` is `None` until the first measurement; the layout then falls
/// back to container-relative percentages. `delta_x` is the live drag delta.
#[must_use]
pub fn place(
    arrangement: &Arrangement,
    pane_width: Option<f64>,
    delta_x: f64,
) -> Vec<PanePlacement> {
    let len = arrangement.len();
    (0..len)
        .filter_map(|index| {
            let distance = arrangement.distance_of(index)?;
            let (left, margin_left) = match pane_width {
                Some(width) => (
                    HorizontalOffset {
                        percent: 50.0,
                        pixels: distance as f64 * width + delta_x,
                    },
                    Length::Px(-width / 2.0),
                ),
                None => (
                    HorizontalOffset {
                        percent: 50.0 + distance as f64 * 100.0,
                        pixels: delta_x,
                    },
                    Length::Percent(-50.0),
                ),
            };
            Some(PanePlacement {
                index,
                distance,
                left,
                margin_left,
                opacity: if arrangement.is_edge(index) { 0.0 } else { 1.0 },
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_panes_select_three_wraps_first_to_right() {
        let a = Arrangement::new(5, 3);
        assert_eq!(a.order(), &[1, 2, 3, 4, 0]);
        assert_eq!(a.left(), &[1, 2]);
        assert_eq!(a.right(), &[4, 0]);
        assert_eq!(a.center(), 2);
    }

    #[test]
    fn five_panes_select_zero_wraps_tail_to_left() {
        let a = Arrangement::new(5, 0);
        assert_eq!(a.order(), &[3, 4, 0, 1, 2]);
        assert_eq!(a.distance_of(3), Some(-2));
        assert_eq!(a.distance_of(2), Some(2));
    }

    #[test]
    fn balanced_selection_keeps_source_order() {
        let a = Arrangement::new(5, 2);
        assert_eq!(a.order(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn even_count_puts_extra_pane_on_one_side() {
        let a = Arrangement::new(4, 0);
        assert_eq!(a.order(), &[3, 0, 1, 2]);
        assert_eq!(a.left().len(), 1);
        assert_eq!(a.right().len(), 2);
        assert_eq!(a.distance_of(0), Some(0));
    }

    #[test]
    fn single_and_empty() {
        let one = Arrangement::new(1, 0);
        assert_eq!(one.order(), &[0]);
        assert!(!one.is_edge(0));
        let none = Arrangement::new(0, 3);
        assert!(none.is_empty());
        assert_eq!(none.position_of(0), None);
        assert!(none.right().is_empty());
    }

    #[test]
    fn out_of_range_select_is_clamped() {
        let a = Arrangement::new(3, 9);
        assert_eq!(a.order()[a.center()], 2);
    }

    #[test]
    fn edges_are_transparent() {
        let a = Arrangement::new(5, 3);
        let placed = place(&a, Some(100.0), 0.0);
        let opacity: Vec<f64> = placed.iter().map(|p| p.opacity).collect();
        // order [1, 2, 3, 4, 0]: panes 1 and 0 are at the ends.
        assert_eq!(opacity, vec![0.0, 0.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn two_panes_keep_selected_visible() {
        let a = Arrangement::new(2, 0);
        let placed = place(&a, Some(100.0), 0.0);
        assert_eq!(placed[0].opacity, 1.0);
        assert_eq!(placed[1].opacity, 0.0);
    }

    #[test]
    fn measured_placement_uses_pixels() {
        let a = Arrangement::new(5, 2);
        let placed = place(&a, Some(500.0), 0.0);
        assert_eq!(placed[0].left.to_string(), "calc(50% - 1000px)");
        assert_eq!(placed[1].left.to_string(), "calc(50% - 500px)");
        assert_eq!(placed[2].left.to_string(), "calc(50% + 0px)");
        assert_eq!(placed[4].left.to_string(), "calc(50% + 1000px)");
        assert_eq!(placed[2].margin_left.to_string(), "-250px");
    }

    #[test]
    fn drag_delta_shifts_every_pane() {
        let a = Arrangement::new(5, 2);
        let placed = place(&a, Some(500.0), 120.0);
        assert_eq!(placed[1].left.to_string(), "calc(50% - 380px)");
        assert_eq!(placed[2].left.to_string(), "calc(50% + 120px)");
        assert_eq!(placed[3].left.to_string(), "calc(50% + 620px)");
    }

    #[test]
    fn unmeasured_placement_falls_back_to_percent() {
        let a = Arrangement::new(3, 1);
        let placed = place(&a, None, -20.0);
        assert_eq!(placed[0].left.to_string(), "calc(-50% - 20px)");
        assert_eq!(placed[1].left.to_string(), "calc(50% - 20px)");
        assert_eq!(placed[2].left.to_string(), "calc(150% - 20px)");
        assert_eq!(placed[0].margin_left, Length::Percent(-50.0));
    }

    #[test]
    fn offsets_resolve_to_pixels() {
        let offset = HorizontalOffset {
            percent: 50.0,
            pixels: -500.0,
        };
        assert_eq!(offset.resolve(1200.0), 100.0);
    }

    #[test]
    fn zero_width_has_no_negative_zero() {
        assert_eq!(Length::Px(-0.0).to_string(), "0px");
        let a = Arrangement::new(1, 0);
        let placed = place(&a, Some(0.0), 0.0);
        assert_eq!(placed[0].margin_left.to_string(), "0px");
        assert_eq!(placed[0].left.to_string(), "calc(50% + 0px)");
    }
}
