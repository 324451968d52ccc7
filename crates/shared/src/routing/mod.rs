//! Entity route table.
//!
//! A [`RouteTable`] is an ordered, append-only list of [`Route`] entries. Each
//! entry owns a loader that produces its child [`RouteModule`] on first
//! navigation; the loaded module is then kept for every later navigation.

mod module;
mod table;

pub use self::module::{ChildRoute, RouteModule};
pub use self::table::{
    LoadChildren, LoadChildrenFuture, ResolvedRoute, Route, RouteData, RouteError, RouteTable,
};
