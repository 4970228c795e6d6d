//! Pure component renderers.
//!
//! Each component takes its slice of the view model plus the theme and returns
//! a markup `String`; none of them read ambient state or perform IO. The
//! composition into one frame happens in [`crate::ui::renderer`].

pub mod empty;
pub mod footer;
pub mod form;
pub mod header;
pub mod list;
pub mod switcher;

pub use empty::render_empty;
pub use footer::render_footer;
pub use form::render_form;
pub use header::render_header;
pub use list::render_list;
pub use switcher::render_switcher;
