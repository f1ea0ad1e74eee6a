use bvh3d::{Skeleton, SkeletonData, report};
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
    print!("{}", report(&data));
    println!(
        "{} joints, {} frames, {:.3}s",
        data.joints.len(),
        data.frame_count,
        data.duration()
    );

    let mut skeleton = Skeleton::new(data.clone());
    skeleton.update_world_transform(time);

    println!("world positions at t = {time}:");
    for (joint, pose) in data.joints.iter().zip(skeleton.poses()) {
        let p = pose.world_position;
        println!("{:<24} ({:+.4}, {:+.4}, {:+.4})", joint.name, p.x, p.y, p.z);
    }
}
