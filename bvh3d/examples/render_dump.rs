use bvh3d::{Skeleton, SkeletonData, build_draw_list};
use std::sync::Arc;

fn main() {
    env_logger::init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let path = args
        .first()
        .cloned()
        .unwrap_or_else(|| "./models/run1.bvh".to_string());
    let time: f32 = args
        .get(1)
        .and_then(|t| t.parse().ok())
        .unwrap_or(0.5);

    let data = Arc::new(SkeletonData::load(&path).expect("parse bvh"));
    let mut skeleton = Skeleton::new(data);
    skeleton.update_world_transform(time);

    let list = build_draw_list(&skeleton);
    println!(
        "{} vertices, {} line indices at t = {time}",
        list.vertices.len(),
        list.indices.len()
    );
    for vertex in list.vertices.iter().take(7) {
        let [x, y, z] = vertex.position;
        let [r, g, b] = vertex.color;
        println!("({x:+.4}, {y:+.4}, {z:+.4}) rgb({r}, {g}, {b})");
    }
}
