//! Vision board canvas: placement, drag gestures, and the optimistic item
//! cache for a free-form goal board.
//!
//! The board holds image/text/drawing/emoji items a user places and drags.
//! This crate owns the spatial logic and the synchronization policy: where a
//! new item lands (random placement that avoids existing items when it can),
//! how a drag turns into a committed position (threshold, lift, clamp on
//! release), and how the local item list tracks the remote backend under
//! optimistic writes (remote-first create, optimistic update/delete, full
//! reload on any write failure). Screens and rendering live in the host app;
//! it drives [`drag::DragController`] from pointer events and reads state
//! back from [`store::BoardStore`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`store`] | Optimistic board cache over the remote backend |
//! | [`drag`] | Per-item drag gesture state machine |
//! | [`placement`] | Random placement for newly created items |
//! | [`cache`] | Ordered in-memory item collection |
//! | [`item`] | Board item model and create/update shapes |
//! | [`remote`] | Backend CRUD trait, HTTP adapter, and env config |
//! | [`geom`] | Points, sizes, rectangles, and the bounds clamp |
//! | [`consts`] | Shared numeric constants (margins, thresholds, timers) |

pub mod cache;
pub mod consts;
pub mod drag;
pub mod geom;
pub mod item;
pub mod placement;
pub mod remote;
pub mod store;
