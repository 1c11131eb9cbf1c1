//! Per-item presentation of the carousel track.

use snapdeck_ui_graphics::Color;

pub const CURRENT_OPACITY: f32 = 1.0;
pub const NEXT_OPACITY_DRAGGING: f32 = 1.0;
pub const NEXT_OPACITY_RESTING: f32 = 0.85;
pub const PREVIOUS_OPACITY: f32 = 0.6;
pub const DISTANT_OPACITY: f32 = 0.3;

/// Top corner radius of the peeking item.
pub const NEXT_CORNER_RADIUS: f32 = 20.0;
pub const TOP_SHADOW_HEIGHT: f32 = 24.0;
pub const TOP_SHADOW_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.15);

/// Background alpha of the peek fade overlay at (position, alpha) stops,
/// top to bottom.
pub const PEEK_FADE_STOPS: [(f32, f32); 3] = [(0.0, 0.7), (0.5, 0.3), (1.0, 0.0)];

/// Position of an item relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemRole {
    Previous,
    Current,
    Next,
    /// Two or more items away.
    Distant,
}

impl ItemRole {
    pub fn of(index: usize, current: usize) -> Self {
        if index == current {
            ItemRole::Current
        } else if index == current + 1 {
            ItemRole::Next
        } else if index + 1 == current {
            ItemRole::Previous
        } else {
            ItemRole::Distant
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopShadow {
    pub height: f32,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemAppearance {
    pub index: usize,
    pub role: ItemRole,
    /// Top edge within the track, before the track offset is applied.
    pub top: f32,
    pub extent: f32,
    pub opacity: f32,
    /// Radius of the two top corners.
    pub top_corner_radius: f32,
    pub top_shadow: Option<TopShadow>,
    pub peek_fade: bool,
}

pub fn item_appearance(
    index: usize,
    current: usize,
    is_dragging: bool,
    item_extent: f32,
) -> ItemAppearance {
    let role = ItemRole::of(index, current);
    let opacity = match role {
        ItemRole::Current => CURRENT_OPACITY,
        ItemRole::Next if is_dragging => NEXT_OPACITY_DRAGGING,
        ItemRole::Next => NEXT_OPACITY_RESTING,
        ItemRole::Previous => PREVIOUS_OPACITY,
        ItemRole::Distant => DISTANT_OPACITY,
    };
    let is_next = role == ItemRole::Next;
    ItemAppearance {
        index,
        role,
        top: index as f32 * item_extent,
        extent: item_extent,
        opacity,
        top_corner_radius: if is_next { NEXT_CORNER_RADIUS } else { 0.0 },
        top_shadow: is_next.then_some(TopShadow {
            height: TOP_SHADOW_HEIGHT,
            color: TOP_SHADOW_COLOR,
        }),
        peek_fade: is_next && !is_dragging,
    }
}
