//! Time-bracketed sampling of one joint's keyframe table.

use crate::JointData;

/// Interpolated channel values for one joint at one query time, slot-indexed
/// by [`Channel::slot`](crate::Channel::slot): tx, ty, tz, rx, ry, rz.
/// Slots with no declared channel stay 0.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct ChannelSample {
    pub values: [f32; 6],
    /// True when the joint declares at least one translation channel, in
    /// which case the sampled translation replaces the rest offset outright.
    pub has_translation: bool,
}

/// Samples a joint's channels at `time` seconds.
///
/// The bracketing pair satisfies `frames[i].time <= time < frames[i+1].time`;
/// queries before the first frame or at/after the last clamp to that frame's
/// raw values, so there is no extrapolation beyond the recorded range. The
/// scan restarts from the table on every call; results are a pure function
/// of (table, time).
///
/// Returns `None` when the joint has no keyframes (end sites, or a zero
/// frame count), in which case the joint evaluates purely from its static
/// offset.
pub(crate) fn sample_channels(joint: &JointData, time: f32) -> Option<ChannelSample> {
    let frames = &joint.keyframes;
    let first = frames.first()?;

    let mut sample = ChannelSample {
        values: [0.0; 6],
        has_translation: joint.has_translation_channels(),
    };

    if frames.len() == 1 || time <= first.time {
        copy_row(joint, &first.values, &mut sample.values);
        return Some(sample);
    }

    let last = &frames[frames.len() - 1];
    if time >= last.time {
        copy_row(joint, &last.values, &mut sample.values);
        return Some(sample);
    }

    // First frame strictly past `time`; both bounds checked above, so the
    // bracketing pair is always in range.
    let index = frames.partition_point(|frame| frame.time <= time);
    let prev_row = &frames[index - 1];
    let next_row = &frames[index];

    let denom = next_row.time - prev_row.time;
    if denom.abs() <= 1.0e-12 {
        copy_row(joint, &next_row.values, &mut sample.values);
        return Some(sample);
    }
    let p = ((time - prev_row.time) / denom).clamp(0.0, 1.0);

    for (k, channel) in joint.channels.iter().enumerate() {
        let mut prev = prev_row.values[k];
        let mut next = next_row.values[k];
        if channel.is_rotation() {
            // Shortest angular path across the 0/360 seam: lift whichever
            // endpoint brings the pair closer together.
            if (prev + 360.0 - next).abs() < (prev - next).abs() {
                prev += 360.0;
            } else if (prev - (next + 360.0)).abs() < (prev - next).abs() {
                next += 360.0;
            }
        }
        sample.values[channel.slot()] = (1.0 - p) * prev + p * next;
    }

    Some(sample)
}

fn copy_row(joint: &JointData, row: &[f32], values: &mut [f32; 6]) {
    for (k, channel) in joint.channels.iter().enumerate() {
        values[channel.slot()] = row[k];
    }
}
