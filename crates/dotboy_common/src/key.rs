/// Frontend-agnostic key identifiers.
///
/// Frontends translate their native key events into this enum before
/// handing them to a machine; the machine decides what each key means.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    A,
    B,
    S,
    X,
    Z,
    Return,
    Space,
    Escape,
}
