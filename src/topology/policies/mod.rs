mod layout_preset;

pub use layout_preset::{
    module_radius, CollideForce, ForcePreset, LayoutPreset, LinkForce, Margins, Orientation,
    Point, TreePreset, Viewport, NODE_RADIUS, VIEWPORT_MARGIN,
};
