//! `evac-movement`: one movement phase of the automaton.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                        |
//! |----------------|-----------------------------------------------------------------|
//! | [`weights`]    | `MoveCandidates`: floor-field weights over the 3×3 block        |
//! | [`contention`] | Grouping requests by target, class-priority winner selection    |
//! | [`resolver`]   | `MovementResolver`: sample, resolve, apply, reward              |
//! | [`report`]     | `MovementReport`, `GrantedMove`                                 |
//! | [`error`]      | `MovementError`, `MovementResult<T>`                            |
//!
//! # Phase outline
//!
//! 1. **Sample**: every agent, in store order, draws one target from its
//!    weighted 3×3 block against the phase-start occupancy.  Agents whose
//!    weights are all zero stall.
//! 2. **Group**: draws are grouped by target in order of first request.
//! 3. **Resolve**: a target with capacity `k` (1, or `exit_capacity` for the
//!    exit) grants everyone when there are at most `k` contenders.
//!    Otherwise Impatient agents are served first, then Patient, then
//!    Neutral, drawing uniformly inside a class.
//! 4. **Apply**: winners move.  Winners of the exit leave the store and
//!    reinforce the dynamic field along their route.
//!
//! Diffusion of the dynamic field is left to the caller.

pub mod contention;
pub mod error;
pub mod report;
pub mod resolver;
pub mod weights;


pub use contention::{ContentionGroup, MoveRequest};
pub use error::{MovementError, MovementResult};
pub use report::{GrantedMove, MovementReport};
pub use resolver::MovementResolver;
pub use weights::{MoveCandidates, DF_MULTIPLIER, SF_MULTIPLIER};
