use crate::{SkeletonData, runtime::sample_channels};
use glam::{Mat3, Vec3};
use std::collections::VecDeque;
use std::sync::Arc;

/// Default uniform scale applied to every local translation.
pub const DEFAULT_SCALE: f32 = 1.0 / 200.0;

/// Default world-space shift applied to every root joint, independent of
/// time: a fixed horizontal displacement that keeps the rig clear of the
/// scene origin.
pub const DEFAULT_POSITION: Vec3 = Vec3::new(-350.0 * DEFAULT_SCALE, 0.0, 0.0);

/// One joint's evaluated world transform. Overwritten by every evaluation
/// pass; parents are always written before their children within a pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct JointPose {
    pub world_position: Vec3,
    pub world_rotation: Mat3,
}

impl Default for JointPose {
    fn default() -> Self {
        Self {
            world_position: Vec3::ZERO,
            world_rotation: Mat3::IDENTITY,
        }
    }
}

/// A posable instance of a parsed skeleton.
///
/// [`SkeletonData`] stays immutable and shareable; all transient evaluation
/// state lives here. Poses are stored index-parallel with `data.joints`.
#[derive(Clone, Debug)]
pub struct Skeleton {
    pub data: Arc<SkeletonData>,
    poses: Vec<JointPose>,
    /// World-space shift applied to root joints.
    pub position: Vec3,
    /// Uniform scale applied to every local translation.
    pub scale: f32,
}

impl Skeleton {
    pub fn new(data: Arc<SkeletonData>) -> Self {
        let poses = vec![JointPose::default(); data.joints.len()];
        let mut out = Self {
            data,
            poses,
            position: DEFAULT_POSITION,
            scale: DEFAULT_SCALE,
        };
        out.set_to_rest_pose();
        out
    }

    pub fn poses(&self) -> &[JointPose] {
        &self.poses
    }

    pub fn pose(&self, joint: usize) -> Option<&JointPose> {
        self.poses.get(joint)
    }

    /// Pre-animation placement: identity rotations throughout, roots exactly
    /// at the origin, every other joint displaced from its parent by its
    /// scaled rest offset.
    pub fn set_to_rest_pose(&mut self) {
        let data = self.data.clone();
        let mut queue = VecDeque::new();
        for &root in &data.roots {
            queue.push_back(root);
            while let Some(index) = queue.pop_front() {
                let joint = &data.joints[index];
                self.poses[index] = match joint.parent {
                    Some(parent) => JointPose {
                        world_position: self.poses[parent].world_position
                            + joint.offset * self.scale,
                        world_rotation: Mat3::IDENTITY,
                    },
                    None => JointPose::default(),
                };
                for &child in &joint.children {
                    queue.push_back(child);
                }
            }
        }
    }

    /// Evaluates every joint's world pose at `time` seconds.
    ///
    /// Breadth-first from each root, so a joint always composes against its
    /// parent's pose from the same pass. `time` is not required to be
    /// monotonic across calls; each pass is a pure function of the keyframe
    /// tables and the query time.
    pub fn update_world_transform(&mut self, time: f32) {
        let data = self.data.clone();
        let mut queue = VecDeque::new();
        for &root in &data.roots {
            queue.push_back(root);
            while let Some(index) = queue.pop_front() {
                let joint = &data.joints[index];

                self.poses[index] = match sample_channels(joint, time) {
                    Some(sample) => {
                        // Exporters that emit translation channels bake the
                        // rest offset into the motion data, so a sampled
                        // translation is used verbatim rather than added to
                        // the offset. Whether that replacement is also
                        // intended for partial channel sets is unconfirmed;
                        // it matches how existing viewers play this data
                        // back.
                        let translation = if sample.has_translation {
                            Vec3::new(sample.values[0], sample.values[1], sample.values[2])
                        } else {
                            joint.offset
                        };
                        let local_rotation =
                            euler_rotation(sample.values[3], sample.values[4], sample.values[5]);

                        match joint.parent {
                            Some(parent) => {
                                let parent_pose = self.poses[parent];
                                JointPose {
                                    world_position: parent_pose.world_position
                                        + parent_pose.world_rotation * (translation * self.scale),
                                    world_rotation: parent_pose.world_rotation * local_rotation,
                                }
                            }
                            None => JointPose {
                                world_position: translation * self.scale + self.position,
                                world_rotation: local_rotation,
                            },
                        }
                    }
                    // No keyframes: end sites, or a zero frame count. The
                    // joint hangs off its parent by the static offset and
                    // inherits the parent's orientation unchanged.
                    None => match joint.parent {
                        Some(parent) => {
                            let parent_pose = self.poses[parent];
                            JointPose {
                                world_position: parent_pose.world_position
                                    + parent_pose.world_rotation * (joint.offset * self.scale),
                                world_rotation: parent_pose.world_rotation,
                            }
                        }
                        None => JointPose {
                            world_position: joint.offset * self.scale + self.position,
                            world_rotation: Mat3::IDENTITY,
                        },
                    },
                };

                for &child in &joint.children {
                    queue.push_back(child);
                }
            }
        }
    }
}

/// Local rotation from three sampled Euler angles, in degrees, slot order
/// rx, ry, rz.
///
/// Row-major element layout:
/// ```text
///     (a b c)
/// R = (d e f)
///     (g h j)
/// ```
/// with `c1,s1` from rx, `c2,s2` from ry, `c3,s3` from rz. The exact
/// element formulas are load-bearing for parity with other consumers of the
/// same motion data and must not be rearranged.
pub(crate) fn euler_rotation(rx: f32, ry: f32, rz: f32) -> Mat3 {
    let (s1, c1) = rx.to_radians().sin_cos();
    let (s2, c2) = ry.to_radians().sin_cos();
    let (s3, c3) = rz.to_radians().sin_cos();

    let a = c2 * c3;
    let b = s1 * s2 * c3 - c1 * s3;
    let c = c1 * s2 * c3 + s1 * s3;
    let d = c2 * s3;
    let e = s1 * s2 * s3 + c1 * c3;
    let f = c1 * s2 * s3 - s1 * c3;
    let g = -s2;
    let h = s1 * c2;
    let j = c1 * c2;

    Mat3::from_cols(Vec3::new(a, d, g), Vec3::new(b, e, h), Vec3::new(c, f, j))
}
