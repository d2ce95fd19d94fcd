//! Proptest strategies for moves.

use proptest::prelude::*;
use twistysim_notation::*;

pub(crate) fn arb_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(vec![Direction::Clockwise, Direction::CounterClockwise])
}

pub(crate) fn arb_cube_move() -> impl Strategy<Value = CubeMove> {
    (
        prop::sample::select(CubeFace::ALL.to_vec()),
        1..=3_u16,
        prop::sample::select(vec![
            Modifier::Clockwise,
            Modifier::CounterClockwise,
            Modifier::Double,
        ]),
    )
        .prop_map(|(face, layers, modifier)| CubeMove::wide(face, layers, modifier))
}

pub(crate) fn arb_pyraminx_move() -> impl Strategy<Value = PyraminxMove> {
    (
        prop::sample::select(PyraminxAxis::ALL.to_vec()),
        any::<bool>(),
        arb_direction(),
    )
        .prop_map(|(axis, tip, direction)| PyraminxMove {
            axis,
            tip,
            direction,
        })
}

pub(crate) fn arb_skewb_move() -> impl Strategy<Value = SkewbMove> {
    (prop::sample::select(SkewbAxis::ALL.to_vec()), arb_direction())
        .prop_map(|(axis, direction)| SkewbMove { axis, direction })
}

pub(crate) fn arb_sq1_move() -> impl Strategy<Value = Sq1Move> {
    prop_oneof![
        (-6..=6_i32, -6..=6_i32).prop_map(|(u, d)| Sq1Move::UD { u, d }),
        Just(Sq1Move::Slash),
    ]
}

pub(crate) fn arb_clock_move() -> impl Strategy<Value = ClockMove> {
    use strum::IntoEnumIterator;

    let pins = prop::sample::select(PinGroup::iter().collect::<Vec<_>>());
    prop_oneof![
        (pins.clone(), -6..=6_i8).prop_map(|(pins, ticks)| ClockMove::Turn { pins, ticks }),
        pins.prop_map(ClockMove::Pins),
        Just(ClockMove::Flip),
    ]
}
