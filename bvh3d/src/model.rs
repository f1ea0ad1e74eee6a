use glam::Vec3;

/// One animatable degree of freedom declared by a joint.
///
/// The declared order is immutable after parsing and is the sole index
/// mapping into every keyframe row of that joint. The discriminant is the
/// slot into the evaluator's six-value array.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Channel {
    TranslateX = 0,
    TranslateY = 1,
    TranslateZ = 2,
    RotateX = 3,
    RotateY = 4,
    RotateZ = 5,
}

impl Channel {
    /// Maps a BVH channel name to its kind. Exactly six names are
    /// recognized, case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Xposition" => Some(Self::TranslateX),
            "Yposition" => Some(Self::TranslateY),
            "Zposition" => Some(Self::TranslateZ),
            "Xrotation" => Some(Self::RotateX),
            "Yrotation" => Some(Self::RotateY),
            "Zrotation" => Some(Self::RotateZ),
            _ => None,
        }
    }

    pub fn slot(self) -> usize {
        self as usize
    }

    pub fn is_translation(self) -> bool {
        self.slot() < 3
    }

    pub fn is_rotation(self) -> bool {
        self.slot() >= 3
    }
}

/// One sampled frame for one joint: a timestamp plus one raw value per
/// declared channel, in channel order.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframe {
    pub time: f32,
    pub values: Vec<f32>,
}

#[derive(Clone, Debug)]
pub struct JointData {
    pub name: String,
    /// Static rest-pose offset from the parent (or the origin for a root).
    pub offset: Vec3,
    pub channels: Vec<Channel>,
    pub parent: Option<usize>,
    /// Child indices in declaration order. The parent is the only owner;
    /// children are reachable only through it.
    pub children: Vec<usize>,
    /// Self-inclusive node count of the subtree rooted here, folded from the
    /// children at the moment this joint's `}` closed.
    pub subtree_nodes: usize,
    /// Parent→descendant edge count of the subtree rooted here.
    pub subtree_links: usize,
    /// Breadth-first ordinal across all hierarchies, assigned once by the
    /// placement pass.
    pub node_index: usize,
    /// Base index of this joint's marker block in the shared vertex buffer.
    pub vertex_slot: usize,
    /// One row per motion frame. Empty for end sites.
    pub keyframes: Vec<Keyframe>,
}

impl JointData {
    /// An end site: a leaf with a static offset and no channels.
    pub fn is_end_site(&self) -> bool {
        self.channels.is_empty()
    }

    pub(crate) fn has_translation_channels(&self) -> bool {
        self.channels.iter().any(|c| c.is_translation())
    }
}

/// A parsed BVH file: an arena of joints forming one or more hierarchies,
/// each joint carrying its own keyframe table.
///
/// Immutable after parsing. Transient evaluation state lives on
/// [`Skeleton`](crate::Skeleton) instead.
#[derive(Clone, Debug)]
pub struct SkeletonData {
    pub joints: Vec<JointData>,
    /// Arena indices of the hierarchy roots, in declaration order.
    pub roots: Vec<usize>,
    pub frame_count: usize,
    /// Seconds between consecutive frames.
    pub frame_time: f32,
    /// Joint count summed over all roots; sizes the marker vertex buffer.
    pub total_nodes: usize,
    /// Parent→child edge count summed over all roots.
    pub total_links: usize,
}

impl SkeletonData {
    pub fn joint(&self, index: usize) -> Option<&JointData> {
        self.joints.get(index)
    }

    /// Index of the first joint with the given name, in declaration order.
    /// Names are not required to be unique.
    pub fn joint_index(&self, name: &str) -> Option<usize> {
        self.joints.iter().position(|j| j.name == name)
    }

    /// Time of the last recorded frame.
    pub fn duration(&self) -> f32 {
        self.frame_count.saturating_sub(1) as f32 * self.frame_time
    }
}
