//! BVH token-stream parser.
//!
//! A BVH file is a flat whitespace-delimited token sequence: a `HIERARCHY`
//! section declaring one or more joint trees, then a `MOTION` section whose
//! frame rows are consumed in lock-step with the hierarchy's traversal
//! order. Parsing is strict and atomic: any grammar violation aborts the
//! whole load, and every token must be consumed exactly.

use crate::{Channel, Error, JointData, Keyframe, SkeletonData, VERTICES_PER_JOINT};
use glam::Vec3;
use log::debug;
use std::collections::VecDeque;
use std::path::Path;

impl SkeletonData {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn parse(input: &str) -> Result<Self, Error> {
        parse_bvh(input)
    }
}

/// Splits raw text on runs of whitespace. Total: empty input yields an
/// empty sequence.
fn tokenize(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}

struct Cursor<'a> {
    tokens: &'a [&'a str],
    position: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.position).copied()
    }

    fn next(&mut self) -> Result<&'a str, Error> {
        let token = self
            .tokens
            .get(self.position)
            .copied()
            .ok_or(Error::UnexpectedEof {
                position: self.position,
            })?;
        self.position += 1;
        Ok(token)
    }

    /// Consumes one token and requires it to be exactly `expected`. A
    /// missing or mismatched token is reported against the position where
    /// it was required.
    fn keyword(&mut self, expected: &'static str) -> Result<(), Error> {
        let position = self.position;
        match self.next() {
            Ok(token) if token == expected => Ok(()),
            _ => Err(Error::ExpectedToken { expected, position }),
        }
    }

    fn float(&mut self) -> Result<f32, Error> {
        let position = self.position;
        let token = self.next()?;
        token.parse().map_err(|_| Error::InvalidNumber {
            value: token.to_string(),
            position,
        })
    }

    fn integer(&mut self) -> Result<usize, Error> {
        let position = self.position;
        let token = self.next()?;
        token.parse().map_err(|_| Error::InvalidNumber {
            value: token.to_string(),
            position,
        })
    }

    fn vec3(&mut self) -> Result<Vec3, Error> {
        Ok(Vec3::new(self.float()?, self.float()?, self.float()?))
    }
}

fn parse_bvh(input: &str) -> Result<SkeletonData, Error> {
    let tokens = tokenize(input);
    let mut cursor = Cursor {
        tokens: &tokens,
        position: 0,
    };

    let mut joints = Vec::<JointData>::new();
    let mut roots = Vec::<usize>::new();

    cursor.keyword("HIERARCHY")?;

    while cursor.peek() == Some("ROOT") {
        cursor.next()?;
        let root = read_joint(&mut cursor, &mut joints, None)?;
        roots.push(root);

        // Innermost open joint on top. The root's subtree is fully closed
        // when its own `}` pops the stack empty.
        let mut open = vec![root];
        while let Some(&top) = open.last() {
            let position = cursor.position;
            match cursor.next()? {
                "JOINT" => {
                    let child = read_joint(&mut cursor, &mut joints, Some(top))?;
                    joints[top].children.push(child);
                    open.push(child);
                }
                "End" => {
                    let child = read_end_site(&mut cursor, &mut joints, top)?;
                    joints[top].children.push(child);
                }
                "}" => {
                    // Every child subtree is already final when its parent
                    // closes; fold their totals exactly once.
                    open.pop();
                    let children = joints[top].children.clone();
                    let mut nodes = 0;
                    let mut links = 0;
                    for &child in &children {
                        nodes += joints[child].subtree_nodes;
                        links += joints[child].subtree_links + 1;
                    }
                    joints[top].subtree_nodes += nodes;
                    joints[top].subtree_links += links;
                }
                found => {
                    return Err(Error::UnexpectedToken {
                        found: found.to_string(),
                        position,
                    });
                }
            }
        }
    }

    cursor.keyword("MOTION")?;
    cursor.keyword("Frames:")?;
    let frame_count = cursor.integer()?;
    cursor.keyword("Frame")?;
    cursor.keyword("Time:")?;
    let frame_time = cursor.float()?;

    read_motion(&mut cursor, &mut joints, &roots, frame_count, frame_time)?;

    if cursor.position < tokens.len() {
        return Err(Error::TrailingData {
            position: cursor.position,
            total: tokens.len(),
        });
    }

    let mut total_nodes = 0;
    let mut total_links = 0;
    for &root in &roots {
        total_nodes += joints[root].subtree_nodes;
        total_links += joints[root].subtree_links;
    }

    assign_placement(&mut joints, &roots);

    debug!(
        "parsed BVH: {} joints in {} hierarchies, {} frames at {}s",
        joints.len(),
        roots.len(),
        frame_count,
        frame_time
    );

    Ok(SkeletonData {
        joints,
        roots,
        frame_count,
        frame_time,
        total_nodes,
        total_links,
    })
}

/// Reads one joint declaration after its `ROOT`/`JOINT` keyword has been
/// consumed: name, `{`, `OFFSET` triple, `CHANNELS` count and names.
/// Subtree totals start at the self-inclusive value and are folded when the
/// joint closes.
fn read_joint(
    cursor: &mut Cursor<'_>,
    joints: &mut Vec<JointData>,
    parent: Option<usize>,
) -> Result<usize, Error> {
    let name = cursor.next()?.to_string();
    cursor.keyword("{")?;
    cursor.keyword("OFFSET")?;
    let offset = cursor.vec3()?;
    cursor.keyword("CHANNELS")?;
    let count = cursor.integer()?;

    let mut channels = Vec::with_capacity(count);
    for _ in 0..count {
        let position = cursor.position;
        let token = cursor.next()?;
        let channel = Channel::from_name(token).ok_or_else(|| Error::UnrecognizedChannel {
            name: token.to_string(),
            position,
        })?;
        channels.push(channel);
    }

    let index = joints.len();
    joints.push(JointData {
        name,
        offset,
        channels,
        parent,
        children: Vec::new(),
        subtree_nodes: 1,
        subtree_links: 0,
        node_index: 0,
        vertex_slot: 0,
        keyframes: Vec::new(),
    });
    Ok(index)
}

/// Reads an end-site leaf after its `End` keyword: name, `{`, `OFFSET`
/// triple, `}`. End sites declare no channels and are closed immediately,
/// so they are never pushed on the open-joint stack.
fn read_end_site(
    cursor: &mut Cursor<'_>,
    joints: &mut Vec<JointData>,
    parent: usize,
) -> Result<usize, Error> {
    let name = cursor.next()?.to_string();
    cursor.keyword("{")?;
    cursor.keyword("OFFSET")?;
    let offset = cursor.vec3()?;
    cursor.keyword("}")?;

    let index = joints.len();
    joints.push(JointData {
        name,
        offset,
        channels: Vec::new(),
        parent: Some(parent),
        children: Vec::new(),
        subtree_nodes: 1,
        subtree_links: 0,
        node_index: 0,
        vertex_slot: 0,
        keyframes: Vec::new(),
    });
    Ok(index)
}

/// Consumes every frame row, visiting each hierarchy depth-first in
/// declaration order. The same traversal order is what gives a keyframe
/// row its meaning, so it must stay in lock-step with the evaluator's view
/// of the forest.
fn read_motion(
    cursor: &mut Cursor<'_>,
    joints: &mut [JointData],
    roots: &[usize],
    frame_count: usize,
    frame_time: f32,
) -> Result<(), Error> {
    let mut time = 0.0f32;
    for _ in 0..frame_count {
        for &root in roots {
            let mut stack = vec![root];
            while let Some(index) = stack.pop() {
                let channel_count = joints[index].channels.len();
                if channel_count > 0 {
                    let mut values = Vec::with_capacity(channel_count);
                    for _ in 0..channel_count {
                        values.push(cursor.float()?);
                    }
                    joints[index].keyframes.push(Keyframe { time, values });
                }
                // Reversed push so popping restores declaration order.
                for &child in joints[index].children.iter().rev() {
                    stack.push(child);
                }
            }
        }
        time += frame_time;
    }
    Ok(())
}

/// Breadth-first placement pass: one running ordinal across all
/// hierarchies, with each joint's marker block placed at
/// `node_index * VERTICES_PER_JOINT` in the shared vertex buffer.
fn assign_placement(joints: &mut [JointData], roots: &[usize]) {
    let mut node_index = 0;
    let mut queue = VecDeque::new();
    for &root in roots {
        queue.push_back(root);
        while let Some(index) = queue.pop_front() {
            joints[index].node_index = node_index;
            joints[index].vertex_slot = node_index * VERTICES_PER_JOINT;
            node_index += 1;
            for &child in &joints[index].children {
                queue.push_back(child);
            }
        }
    }
}
