//! Views - the index listing, the post page and the layout shell around them
//!
//! Every view is a pure function of its inputs and returns a fragment of
//! trusted markup. The only mutable state is the navigation toggle, owned by
//! a single [`LayoutShell`].

mod index;
mod layout;
mod post;
mod seo;

pub use index::{index_entries, IndexView, PostLink};
pub use layout::{Clock, FixedClock, LayoutShell, NavEvent, NavToggle, SystemClock};
pub use post::PostView;
pub use seo::Seo;
