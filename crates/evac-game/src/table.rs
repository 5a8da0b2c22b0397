//! The pairwise interaction table.
//!
//! Cost to agent *a* for playing `own` against a neighbour *b* whose current
//! strategy is `other`:
//!
//! ```text
//!              b: Patient    b: Impatient   b: Neutral
//! Patient      PP (below)    +1             0
//! Impatient    −1            II (below)     0
//! Neutral      0             0              0
//! ```
//!
//! The two same-strategy entries depend on how congested the pair is:
//!
//! ```text
//! t_ij = (t_a + t_b) / 2
//! Δu   = 0                              if t_ij ≤ T_ASET − T0
//!        (c / T0) · (t_ij − T_ASET + T0) otherwise
//! PP   = −ORDER_PAYOFF / Δu   (0 when Δu = 0)
//! II   = c / Δu               (0 when Δu = 0)
//! ```

use evac_core::Strategy;

/// Available safe egress time.
pub const T_ASET: f64 = 20.0;

/// Reference time scale.
pub const T0: f64 = 10.0;

/// Payoff of an orderly (mutually patient) exchange.
pub const ORDER_PAYOFF: f64 = 1.0;

/// One entry of the interaction table.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Interaction {
    /// A constant cost.
    Fixed(f64),
    /// Both patient; cost depends on the pair's congestion.
    MutualPatience,
    /// Both impatient; cost depends on the pair's congestion.
    MutualImpatience,
}

/// Look up the table entry for (`own`, `other`).
pub fn interaction(own: Strategy, other: Strategy) -> Interaction {
    use Strategy::*;
    match (own, other) {
        (Patient, Patient)     => Interaction::MutualPatience,
        (Patient, Impatient)   => Interaction::Fixed(1.0),
        (Impatient, Patient)   => Interaction::Fixed(-1.0),
        (Impatient, Impatient) => Interaction::MutualImpatience,
        _                      => Interaction::Fixed(0.0),
    }
}

/// Utility loss `Δu` for a pair with mean congestion `t_ij` and congestion
/// cost `c`.
pub fn delta_u(t_ij: f64, c: f64) -> f64 {
    if t_ij <= T_ASET - T0 {
        0.0
    } else {
        (c / T0) * (t_ij - T_ASET + T0)
    }
}

/// Cost of mutual patience for agents with congestion indices `t_a`, `t_b`.
pub fn pp_cost(t_a: f64, t_b: f64, c: f64) -> f64 {
    let du = delta_u((t_a + t_b) / 2.0, c);
    if du == 0.0 { 0.0 } else { -ORDER_PAYOFF / du }
}

/// Cost of mutual impatience for agents with congestion indices `t_a`, `t_b`.
pub fn ii_cost(t_a: f64, t_b: f64, c: f64) -> f64 {
    let du = delta_u((t_a + t_b) / 2.0, c);
    if du == 0.0 { 0.0 } else { c / du }
}

/// Resolve the table entry for (`own`, `other`) into a number.
pub fn cost(own: Strategy, other: Strategy, t_own: f64, t_other: f64, c: f64) -> f64 {
    match interaction(own, other) {
        Interaction::Fixed(v)          => v,
        Interaction::MutualPatience    => pp_cost(t_own, t_other, c),
        Interaction::MutualImpatience  => ii_cost(t_own, t_other, c),
    }
}
