//! Scenario: composing two frame-tagged spatial quantities expressed in different
//! frames is rejected rather than silently producing a nonsense result.

use mechanism_spatial::{FrameId, SpatialVector, Twist};

#[test]
fn adding_twists_expressed_in_different_frames_fails() {
    let body = FrameId::new(1);
    let base = FrameId::new(0);
    let frame_a = FrameId::new(2);
    let frame_b = FrameId::new(3);

    let twist_a = Twist::new(body, base, frame_a, SpatialVector::<f64>::zero());
    let twist_b = Twist::new(body, base, frame_b, SpatialVector::<f64>::zero());

    let err = twist_a.checked_add(&twist_b).unwrap_err();
    assert_eq!(err.expected, frame_a);
    assert_eq!(err.got, frame_b);
}
