//! # summit-renderer
//!
//! Tera-based text renderer for the landing page. The page is a pure function
//! of the countdown state and the registration view; callers re-render after
//! every mutation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use summit_countdown::CountdownState;
//! use summit_core::RegistrationView;
//! use summit_renderer::{PageContext, Renderer};
//!
//! if let Ok(renderer) = Renderer::new() {
//!     let ctx = PageContext::new(&CountdownState::new(5), &RegistrationView::Closed);
//!     if let Ok(page) = renderer.render_page(&ctx) {
//!         println!("{page}");
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::PageContext;
pub use engine::{Renderer, PAGE_TEMPLATE};
pub use error::RenderError;
