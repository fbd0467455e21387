//! `tp-colony` — colonies, their wishes, and the goods they ship.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`colony`]    | `Colony`, `ColonyStore`, `ImprovementPlan`                |
//! | [`goods`]     | `GoodsParcel`, `GoodsStore`                               |
//! | [`wish`]      | `Wish`, `WishKind`, `WishStore`                           |
//! | [`registry`]  | `WishRegistry` (per-type index, rebuilt each cycle)       |
//! | [`loader`]    | `load_wishes_csv`, `load_wishes_reader`                   |
//! | [`error`]     | `ColonyError`, `ColonyResult<T>`                          |
//!
//! # Wish lifecycle (summary)
//!
//! ```text
//! raised by colony ─► indexed by registry ─► matched (bound / shrunk) ─► completed
//! ```
//!
//! A colony's raw wish list is owned by the colony.  The registry only holds
//! ids and is rebuilt from scratch every planning cycle; a completed wish is
//! flagged `consumed` so no later rebuild can index it again.

pub mod colony;
pub mod error;
pub mod goods;
pub mod loader;
pub mod registry;
pub mod wish;

#[cfg(test)]
mod tests;

pub use colony::{Colony, ColonyStore, ImprovementPlan};
pub use error::{ColonyError, ColonyResult};
pub use goods::{GoodsParcel, GoodsStore, BASE_GOODS_PRIORITY};
pub use loader::{load_wishes_csv, load_wishes_reader};
pub use registry::WishRegistry;
pub use wish::{Wish, WishKind, WishStore};
