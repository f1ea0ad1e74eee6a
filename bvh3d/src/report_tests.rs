use crate::{SkeletonData, report};

#[test]
fn branches_are_prefixed_and_indented() {
    let data = SkeletonData::parse(
        "HIERARCHY \
         ROOT Hips { OFFSET 0.0 1.0 0.0 CHANNELS 3 Zrotation Xrotation Yrotation \
             JOINT Spine { OFFSET 0.0 5.0 0.0 CHANNELS 3 Zrotation Xrotation Yrotation \
                 End Site { OFFSET 0.0 2.0 0.0 } } \
             JOINT LeftHip { OFFSET 1.0 0.0 0.0 CHANNELS 3 Zrotation Xrotation Yrotation \
                 End Site { OFFSET 0.0 -2.0 0.0 } } } \
         MOTION Frames: 1 Frame Time: 1.0 \
         0.0 0.0 0.0 0.0 0.0 0.0",
    )
    .unwrap();

    let expected = concat!(
        "Node \"Hips\", NbSubTreeNodes :5, Offset: (0.000000, 1.000000, 0.000000)\n",
        " +> Node \"Spine\", NbSubTreeNodes :2, Offset: (0.000000, 5.000000, 0.000000)\n",
        " |  *> Node \"Site\", NbSubTreeNodes :1, Offset: (0.000000, 2.000000, 0.000000)\n",
        " *> Node \"LeftHip\", NbSubTreeNodes :2, Offset: (1.000000, 0.000000, 0.000000)\n",
        "    *> Node \"Site\", NbSubTreeNodes :1, Offset: (0.000000, -2.000000, 0.000000)\n",
    );
    assert_eq!(report(&data), expected);
}

#[test]
fn every_root_is_rendered_in_order() {
    let data = SkeletonData::parse(
        "HIERARCHY \
         ROOT A { OFFSET 0 0 0 CHANNELS 0 } \
         ROOT B { OFFSET 0 0 0 CHANNELS 0 } \
         MOTION Frames: 0 Frame Time: 0.1",
    )
    .unwrap();

    let expected = concat!(
        "Node \"A\", NbSubTreeNodes :1, Offset: (0.000000, 0.000000, 0.000000)\n",
        "Node \"B\", NbSubTreeNodes :1, Offset: (0.000000, 0.000000, 0.000000)\n",
    );
    assert_eq!(report(&data), expected);
}
