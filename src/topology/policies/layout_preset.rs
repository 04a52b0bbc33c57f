use serde::{Deserialize, Serialize};

/// Base node radius shared by the force views
pub const NODE_RADIUS: f64 = 48.0;

/// Margin kept between the drawing area and each viewport edge
pub const VIEWPORT_MARGIN: f64 = 5.0;

/// LayoutPreset policy: tuned layout parameters handed to the renderer
///
/// The simulation itself runs in the consumer. These presets encode the
/// parameters that make each view readable:
///
/// - `dependencies`: weak positional pull, strong repulsion, linked by element id
/// - `modules`: slow cooling, slight attraction, nodes sized by fan-out and kept apart by collision
/// - `tree`: vertical tidy tree with tighter spacing between cousins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LayoutPreset {
    Force(ForcePreset),
    Tree(TreePreset),
}

impl LayoutPreset {
    pub fn dependencies() -> Self {
        LayoutPreset::Force(ForcePreset {
            name: "dependencies".to_string(),
            alpha_target: None,
            velocity_decay: None,
            x_strength: 0.01,
            y_strength: 0.01,
            charge_strength: -1800.0,
            link: Some(LinkForce {
                id_field: "id".to_string(),
            }),
            center: true,
            collide: None,
            node_radius: NODE_RADIUS,
        })
    }

    pub fn modules() -> Self {
        LayoutPreset::Force(ForcePreset {
            name: "modules".to_string(),
            alpha_target: Some(0.3),
            velocity_decay: Some(0.1),
            x_strength: 0.01,
            y_strength: 0.01,
            charge_strength: 5.0,
            link: None,
            center: true,
            collide: Some(CollideForce {
                radius_padding: 0.5,
                iterations: 3,
            }),
            node_radius: NODE_RADIUS,
        })
    }

    pub fn tree() -> Self {
        LayoutPreset::Tree(TreePreset::default())
    }

    pub fn name(&self) -> &str {
        match self {
            LayoutPreset::Force(preset) => &preset.name,
            LayoutPreset::Tree(_) => "tree",
        }
    }
}

/// Parameters of a force-directed simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForcePreset {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha_target: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub velocity_decay: Option<f64>,
    pub x_strength: f64,
    pub y_strength: f64,
    /// Many-body strength; negative repels
    pub charge_strength: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkForce>,
    pub center: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collide: Option<CollideForce>,
    pub node_radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkForce {
    /// Node field that link endpoints refer to
    pub id_field: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollideForce {
    /// Added to each node's radius
    pub radius_padding: f64,
    pub iterations: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Parameters of the tidy-tree layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreePreset {
    pub margin: Margins,
    pub node_width: f64,
    pub node_height: f64,
    pub orientation: Orientation,
    pub sibling_separation: f64,
    pub cousin_separation: f64,
}

impl Default for TreePreset {
    fn default() -> Self {
        Self {
            margin: Margins {
                top: 64.0,
                right: 30.0,
                bottom: 70.0,
                left: 30.0,
            },
            node_width: 96.0,
            node_height: 72.0,
            orientation: Orientation::Vertical,
            sibling_separation: 1.0,
            cousin_separation: 0.5,
        }
    }
}

impl TreePreset {
    /// Horizontal separation between two neighbouring nodes at `depth`
    pub fn separation(&self, same_parent: bool, depth: usize) -> f64 {
        let base = if same_parent {
            self.sibling_separation
        } else {
            self.cousin_separation
        };
        base / depth.max(1) as f64
    }
}

/// Radius of an app node in the modules view
pub fn module_radius(outgoing_relationships: usize) -> f64 {
    outgoing_relationships.max(1) as f64 * NODE_RADIUS
}

/// Drawing surface reported by the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Centre of the drawing area inside the viewport margins
    pub fn center(&self) -> Point {
        Point {
            x: (self.width - 2.0 * VIEWPORT_MARGIN) / 2.0,
            y: (self.height - 2.0 * VIEWPORT_MARGIN) / 2.0,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}
