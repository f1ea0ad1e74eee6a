use super::sample_channels;
use crate::{Channel, JointData, Keyframe};
use glam::Vec3;

fn assert_approx(actual: f32, expected: f32) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= 1.0e-5,
        "expected {expected}, got {actual} (diff {diff})"
    );
}

fn joint(channels: Vec<Channel>, rows: Vec<(f32, Vec<f32>)>) -> JointData {
    JointData {
        name: "j".to_string(),
        offset: Vec3::new(9.0, 9.0, 9.0),
        channels,
        parent: None,
        children: Vec::new(),
        subtree_nodes: 1,
        subtree_links: 0,
        node_index: 0,
        vertex_slot: 0,
        keyframes: rows
            .into_iter()
            .map(|(time, values)| Keyframe { time, values })
            .collect(),
    }
}

#[test]
fn values_land_in_slots_by_kind_not_declaration_order() {
    let j = joint(
        vec![Channel::RotateZ, Channel::TranslateX],
        vec![(0.0, vec![90.0, 5.0])],
    );
    let sample = sample_channels(&j, 0.0).unwrap();
    assert_eq!(sample.values, [5.0, 0.0, 0.0, 0.0, 0.0, 90.0]);
    assert!(sample.has_translation);
}

#[test]
fn first_frame_is_returned_raw_at_its_own_time() {
    let j = joint(
        vec![Channel::RotateX],
        vec![(0.0, vec![350.0]), (1.0, vec![10.0])],
    );
    // Raw, not lifted across the seam: the recorded sample wins exactly at
    // the boundary.
    let sample = sample_channels(&j, 0.0).unwrap();
    assert_approx(sample.values[3], 350.0);
}

#[test]
fn queries_clamp_to_the_recorded_range() {
    let j = joint(
        vec![Channel::TranslateX],
        vec![(0.0, vec![0.0]), (1.0, vec![10.0])],
    );
    assert_approx(sample_channels(&j, -5.0).unwrap().values[0], 0.0);
    assert_approx(sample_channels(&j, 1.0).unwrap().values[0], 10.0);
    assert_approx(sample_channels(&j, 100.0).unwrap().values[0], 10.0);
}

#[test]
fn translation_interpolates_linearly() {
    let j = joint(
        vec![Channel::TranslateX],
        vec![(0.0, vec![0.0]), (1.0, vec![10.0])],
    );
    assert_approx(sample_channels(&j, 0.25).unwrap().values[0], 2.5);
    assert_approx(sample_channels(&j, 0.5).unwrap().values[0], 5.0);
}

#[test]
fn bracket_is_found_past_the_first_pair() {
    let j = joint(
        vec![Channel::TranslateY],
        vec![
            (0.0, vec![0.0]),
            (1.0, vec![10.0]),
            (2.0, vec![30.0]),
            (3.0, vec![-10.0]),
        ],
    );
    assert_approx(sample_channels(&j, 1.5).unwrap().values[1], 20.0);
    assert_approx(sample_channels(&j, 2.5).unwrap().values[1], 10.0);
}

#[test]
fn rotation_interpolates_across_the_seam() {
    let j = joint(
        vec![Channel::RotateX],
        vec![(0.0, vec![350.0]), (1.0, vec![10.0])],
    );
    // 350 -> 360 -> 10, not the long way through 180.
    let half = sample_channels(&j, 0.5).unwrap().values[3];
    assert_approx(half.rem_euclid(360.0), 0.0);

    let quarter = sample_channels(&j, 0.25).unwrap().values[3];
    assert_approx(quarter.rem_euclid(360.0), 355.0);
}

#[test]
fn rotation_seam_also_lifts_the_next_endpoint() {
    let j = joint(
        vec![Channel::RotateY],
        vec![(0.0, vec![10.0]), (1.0, vec![350.0])],
    );
    let half = sample_channels(&j, 0.5).unwrap().values[4];
    assert_approx(half.rem_euclid(360.0), 0.0);
}

#[test]
fn plain_rotations_stay_on_the_short_arc() {
    let j = joint(
        vec![Channel::RotateZ],
        vec![(0.0, vec![80.0]), (1.0, vec![100.0])],
    );
    assert_approx(sample_channels(&j, 0.5).unwrap().values[5], 90.0);
}

#[test]
fn translations_never_wrap() {
    let j = joint(
        vec![Channel::TranslateZ],
        vec![(0.0, vec![350.0]), (1.0, vec![10.0])],
    );
    assert_approx(sample_channels(&j, 0.5).unwrap().values[2], 180.0);
}

#[test]
fn undeclared_slots_stay_zero() {
    let j = joint(
        vec![Channel::RotateX],
        vec![(0.0, vec![45.0]), (1.0, vec![45.0])],
    );
    let sample = sample_channels(&j, 0.5).unwrap();
    assert!(!sample.has_translation);
    assert_eq!(sample.values[0], 0.0);
    assert_eq!(sample.values[1], 0.0);
    assert_eq!(sample.values[2], 0.0);
    assert_approx(sample.values[3], 45.0);
}

#[test]
fn single_row_tables_clamp_to_that_row() {
    let j = joint(vec![Channel::TranslateX], vec![(0.0, vec![7.0])]);
    assert_approx(sample_channels(&j, 0.0).unwrap().values[0], 7.0);
    assert_approx(sample_channels(&j, 3.0).unwrap().values[0], 7.0);
}

#[test]
fn empty_tables_yield_no_sample() {
    let j = joint(vec![Channel::TranslateX], Vec::new());
    assert!(sample_channels(&j, 0.0).is_none());

    let end_site = joint(Vec::new(), Vec::new());
    assert!(sample_channels(&end_site, 0.5).is_none());
}
