//! Diagnostic pretty-printer for the parsed joint forest.

use crate::SkeletonData;

/// Renders every hierarchy as indented text, one line per joint with its
/// name, self-inclusive subtree node count, and rest offset. The last child
/// of a joint is prefixed ` *> `, every other child ` +> `. Deterministic
/// for a given forest.
pub fn report(data: &SkeletonData) -> String {
    let mut out = String::new();
    for &root in &data.roots {
        report_joint(data, root, &mut out, "", "", "");
    }
    out
}

fn report_joint(
    data: &SkeletonData,
    index: usize,
    out: &mut String,
    prefix: &str,
    first: &str,
    next: &str,
) {
    let joint = &data.joints[index];
    out.push_str(&format!(
        "{prefix}{first}Node \"{}\", NbSubTreeNodes :{}, Offset: ({:.6}, {:.6}, {:.6})\n",
        joint.name, joint.subtree_nodes, joint.offset.x, joint.offset.y, joint.offset.z
    ));

    let child_prefix = format!("{prefix}{next}");
    for (i, &child) in joint.children.iter().enumerate() {
        let last = i + 1 == joint.children.len();
        let (fst, snd) = if last { (" *> ", "   ") } else { (" +> ", " | ") };
        report_joint(data, child, out, &child_prefix, fst, snd);
    }
}
